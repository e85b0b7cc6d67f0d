use std::collections::VecDeque;

use proptest::prelude::*;

use crate::collections::traits::Deque;

/// A single operation applied to both a deque under test and a [`VecDeque`] model.
#[derive(Debug, Clone, Copy)]
pub enum Op {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
}

pub fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::PushFront),
        any::<i32>().prop_map(Op::PushBack),
        Just(Op::PopFront),
        Just(Op::PopBack),
    ]
}

/// Applies `op` to both `deque` and `model`, treating `cap` as the model's capacity. Returns false
/// if the two disagree on the outcome.
pub fn apply<D: Deque<i32>>(
    deque: &mut D,
    model: &mut VecDeque<i32>,
    cap: Option<usize>,
    op: Op,
) -> bool {
    let model_full = cap.is_some_and(|cap| model.len() == cap);
    match op {
        Op::PushFront(value) => {
            let accepted = deque.push_front(value).is_ok();
            if !model_full {
                model.push_front(value);
            }
            accepted != model_full
        },
        Op::PushBack(value) => {
            let accepted = deque.push_back(value).is_ok();
            if !model_full {
                model.push_back(value);
            }
            accepted != model_full
        },
        Op::PopFront => deque.pop_front().ok() == model.pop_front(),
        Op::PopBack => deque.pop_back().ok() == model.pop_back(),
    }
}
