#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::util::drop_ledger::DropLedger;
use crate::util::error::Underflow;

#[test]
fn test_scenario_unbounded() {
    let mut deque = LinkedDeque::new();
    deque.push_front(10);
    deque.push_back(20);
    deque.push_front(5);
    deque.push_back(30);
    deque.verify_double_links();

    assert_eq!(deque.to_sequence(), [5, 10, 20, 30]);
    assert_eq!(deque.front(), Ok(&5));
    assert_eq!(deque.back(), Ok(&30));

    assert_eq!(deque.pop_front(), Ok(5));
    assert_eq!(deque.pop_back(), Ok(30));
    deque.verify_double_links();

    assert_eq!(deque.to_sequence(), [10, 20]);
    assert_eq!(deque.len(), 2);
}

#[test]
fn test_single_element() {
    let mut deque = LinkedDeque::new();
    deque.push_back(1);
    assert_eq!(deque.front(), deque.back(), "A single element is both the front and the back.");

    assert_eq!(deque.pop_back(), Ok(1));
    assert!(deque.state.is_empty(), "Removing the last node should reset both endpoints.");
    assert_eq!(deque.front(), Err(Underflow));

    deque.push_front(2);
    deque.verify_double_links();
    assert_eq!(deque.pop_front(), Ok(2));
    assert!(deque.is_empty());
}

#[test]
fn test_front_back_mut() {
    let mut deque: LinkedDeque<i32> = LinkedDeque::new();
    assert_eq!(deque.front_mut(), Err(Underflow));
    assert_eq!(deque.back_mut(), Err(Underflow));

    deque.extend([1, 2, 3]);
    *deque.front_mut().unwrap() = 10;
    *deque.back_mut().unwrap() = 30;
    assert_eq!(deque.to_sequence(), [10, 2, 30]);
}

#[test]
fn test_append() {
    let mut deque: LinkedDeque<_> = (0..3).collect();
    deque.append((3..6).collect());
    deque.verify_double_links();
    assert_eq!(deque.to_sequence(), [0, 1, 2, 3, 4, 5]);
    assert_eq!(deque.len(), 6);

    deque.append(LinkedDeque::new());
    assert_eq!(deque.len(), 6, "Appending an empty deque should change nothing.");

    let mut empty = LinkedDeque::new();
    empty.append(deque);
    empty.verify_double_links();
    assert_eq!(empty.to_sequence(), [0, 1, 2, 3, 4, 5]);

    let ledger = DropLedger::default();
    let mut a: LinkedDeque<_> = ledger.track_many(3).collect();
    let b: LinkedDeque<_> = ledger.track_many(4).collect();
    a.append(b);
    assert_eq!(ledger.dropped(), 0, "Appending should move nodes rather than dropping them.");
    assert!(a.iter().map(|item| item.id()).eq(0..7));

    assert_eq!(a.pop_back().map(|item| item.id()), Ok(6));
    a.verify_double_links();
    drop(a);
    ledger.assert_released_once();
}

#[test]
fn test_iterators() {
    let mut deque: LinkedDeque<usize> = (0..5).collect();

    assert_eq!(deque.iter().len(), 5);
    assert!(deque.iter().rev().eq([4, 3, 2, 1, 0].iter()));

    for i in deque.iter_mut() {
        *i *= 2;
    }
    assert_eq!(deque.to_sequence(), [0, 2, 4, 6, 8]);

    let mut iter = deque.iter_mut();
    assert_eq!(iter.next_back(), Some(&mut 8));
    assert_eq!(iter.next(), Some(&mut 0));
    assert_eq!(iter.len(), 3);

    let mut iter = deque.clone().into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let ledger = DropLedger::default();
    let deque: LinkedDeque<_> = ledger.track_many(10).collect();

    let mut iter = deque.into_iter();
    let (first, last) = (iter.next().unwrap(), iter.next_back().unwrap());
    drop(iter);
    assert_eq!(
        ledger.live(),
        [first.id(), last.id()],
        "Dropping an owned iterator should drop only the elements it hasn't yielded."
    );

    drop((first, last));
    ledger.assert_released_once();
}

#[test]
fn test_iterators_meet_in_the_middle() {
    for len in 0..6 {
        let mut deque: LinkedDeque<usize> = (0..len).collect();

        let mut iter = deque.iter();
        let mut yielded = Vec::new();
        while let Some(front) = iter.next() {
            yielded.push(*front);
            let snapshot = iter.clone();
            if let Some(back) = iter.next_back() {
                yielded.push(*back);
            }
            assert_eq!(snapshot.len(), iter.len() + usize::from(snapshot.len() > 0));
        }
        assert_eq!(iter.next_back(), None, "A drained iterator should stay empty.");
        yielded.sort_unstable();
        assert!(yielded.iter().copied().eq(0..len), "Each element should be yielded once.");

        let mut iter = deque.iter_mut();
        while let (Some(front), Some(back)) = (iter.next(), iter.next_back()) {
            std::mem::swap(front, back);
        }
        assert!(deque.iter().copied().eq((0..len).rev()));
        deque.verify_double_links();
    }
}

#[test]
fn test_drop() {
    let ledger = DropLedger::default();
    let mut deque = LinkedDeque::new();
    for _ in 0..3 {
        deque.push_front(ledger.track());
        deque.push_back(ledger.track());
    }

    let back = deque.pop_back().unwrap();
    assert_eq!(back.id(), 5);
    assert_eq!(ledger.dropped(), 0, "Popping should move the element out without dropping it.");
    drop(back);
    assert_eq!(ledger.live(), [0, 1, 2, 3, 4]);

    deque.clear();
    assert!(ledger.live().is_empty(), "Clearing should release every remaining node.");
    assert!(deque.is_empty());

    deque.extend(ledger.track_many(4));
    drop(deque);
    assert_eq!(ledger.dropped(), 10);
    ledger.assert_released_once();
}

#[test]
fn test_zst_support() {
    let mut deque = LinkedDeque::new();
    for _ in 0..10 {
        deque.push_back(());
    }
    deque.verify_double_links();
    assert_eq!(deque.len(), 10);
    assert_eq!(deque.iter().count(), 10);
}

#[test]
fn test_equality_and_hash() {
    let a: LinkedDeque<_> = (1..=3).collect();
    let mut b = LinkedDeque::new();
    b.push_back(2);
    b.push_front(1);
    b.push_back(3);

    assert_eq!(a, b, "Different construction methods should produce equal results.");
    assert_ne!(a, (1..=4).collect::<LinkedDeque<_>>());

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&a),
        state.hash_one(&b),
        "Equal deques should produce the same hash."
    );
    assert_eq!(a.clone(), a);
}

#[test]
fn test_formatting() {
    let mut deque = LinkedDeque::<i32>::new();
    assert_eq!(deque.to_string(), "[]");

    deque.extend([5, 10, 20, 30]);
    assert_eq!(deque.to_string(), "[5, 10, 20, 30]");
    assert_eq!(
        format!("{deque:?}"),
        "LinkedDeque { contents: [5, 10, 20, 30], len: 4 }"
    );
}
