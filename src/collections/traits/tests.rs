#![cfg(all(test, feature = "circ", feature = "linked"))]

use std::collections::VecDeque;

use proptest::prelude::*;

use super::*;
use crate::collections::{LinkedDeque, RingDeque};
use crate::util::error::Underflow;
use crate::util::model::{self, Op};

fn check_push_order<D: Deque<i32>>(mut deque: D) {
    deque.push_front(1).unwrap();
    deque.push_front(2).unwrap();
    deque.push_back(3).unwrap();

    assert_eq!(
        deque.to_sequence(),
        [2, 1, 3],
        "Pushes at either end should be reflected in front to back order."
    );
    assert_eq!(
        deque.to_sequence(),
        deque.to_sequence(),
        "Taking the sequence shouldn't modify the deque."
    );
    assert_eq!(deque.len(), 3);
}

fn check_push_pop_inverse<D: Deque<i32>>(mut deque: D) {
    deque.push_back(4).unwrap();
    deque.push_front(7).unwrap();
    let before = deque.to_sequence();

    deque.push_back(42).unwrap();
    assert_eq!(deque.pop_back(), Ok(42), "pop_back should undo push_back.");
    assert_eq!(deque.to_sequence(), before);

    deque.push_front(-1).unwrap();
    assert_eq!(deque.pop_front(), Ok(-1), "pop_front should undo push_front.");
    assert_eq!(deque.to_sequence(), before);
    assert_eq!(deque.len(), 2);
}

fn check_underflow<D: Deque<i32>>(mut deque: D) {
    assert!(deque.is_empty());
    assert_eq!(deque.pop_front(), Err(Underflow));
    assert_eq!(deque.pop_back(), Err(Underflow));
    assert_eq!(deque.front(), Err(Underflow));
    assert_eq!(deque.back(), Err(Underflow));
    assert_eq!(deque.len(), 0, "Failed operations shouldn't change the length.");

    deque.push_back(9).unwrap();
    assert_eq!(deque.pop_front(), Ok(9));
    assert_eq!(
        deque.pop_back(),
        Err(Underflow),
        "Removing the only element should leave the deque empty."
    );
}

fn check_len_accounting<D: Deque<i32>>(mut deque: D) {
    let mut expected = 0_usize;
    for i in 0..4 {
        deque.push_back(i).unwrap();
        deque.push_front(-i).unwrap();
        expected += 2;
        assert_eq!(deque.len(), expected);
    }
    for _ in 0..3 {
        deque.pop_front().unwrap();
        deque.pop_back().unwrap();
        expected -= 2;
        assert_eq!(deque.len(), expected);
    }

    deque.clear();
    assert!(deque.is_empty(), "Clearing should remove every element.");
    assert_eq!(deque.iter().len(), 0);
}

#[test]
fn test_push_order() {
    check_push_order(RingDeque::with_cap(5));
    check_push_order(LinkedDeque::new());
}

#[test]
fn test_push_pop_inverse() {
    check_push_pop_inverse(RingDeque::with_cap(4));
    check_push_pop_inverse(LinkedDeque::new());
}

#[test]
fn test_underflow() {
    check_underflow(RingDeque::with_cap(3));
    check_underflow(LinkedDeque::new());
}

#[test]
fn test_len_accounting() {
    check_len_accounting(RingDeque::with_cap(8));
    check_len_accounting(LinkedDeque::new());
}

#[test]
fn test_is_full() {
    let mut ring = RingDeque::with_cap(2);
    let mut linked = LinkedDeque::new();
    for i in 0..2 {
        Deque::push_back(&mut ring, i).unwrap();
        Deque::push_back(&mut linked, i).unwrap();
    }

    assert!(Deque::is_full(&ring), "A ring deque at capacity should be full.");
    assert!(!Deque::is_full(&linked), "A linked deque should never be full.");
}

fn op_sequences() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(model::op(), 0..64)
}

proptest! {
    #[test]
    fn test_ring_matches_model(cap in 0_usize..8, ops in op_sequences()) {
        let mut deque = RingDeque::with_cap(cap);
        let mut expected = VecDeque::new();

        for op in ops {
            prop_assert!(model::apply(&mut deque, &mut expected, Some(cap), op), "diverged on {:?}", op);
            prop_assert_eq!(deque.len(), expected.len());
            prop_assert_eq!(deque.is_full(), expected.len() == cap);
            prop_assert!(deque.iter().eq(expected.iter()));
        }
    }

    #[test]
    fn test_linked_matches_model(ops in op_sequences()) {
        let mut deque = LinkedDeque::new();
        let mut expected = VecDeque::new();

        for op in ops {
            prop_assert!(model::apply(&mut deque, &mut expected, None, op), "diverged on {:?}", op);
            prop_assert_eq!(deque.len(), expected.len());
            prop_assert!(deque.iter().eq(expected.iter()));
            prop_assert!(deque.iter().rev().eq(expected.iter().rev()));
            deque.verify_double_links();
        }
    }
}
