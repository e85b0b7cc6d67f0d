#![cfg(test)]

use std::cell::RefCell;
use std::rc::Rc;

/// Records how many times each element it has handed out was dropped, so that tests can check a
/// deque releases every element exactly once.
#[derive(Debug, Default, Clone)]
pub struct DropLedger {
    drops: Rc<RefCell<Vec<usize>>>,
}

/// An element registered with a [`DropLedger`] under a unique id.
#[derive(Debug)]
pub struct Tracked {
    id: usize,
    drops: Rc<RefCell<Vec<usize>>>,
}

impl DropLedger {
    pub fn track(&self) -> Tracked {
        let mut drops = self.drops.borrow_mut();
        drops.push(0);
        Tracked {
            id: drops.len() - 1,
            drops: Rc::clone(&self.drops),
        }
    }

    pub fn track_many(&self, count: usize) -> impl Iterator<Item = Tracked> + '_ {
        (0..count).map(|_| self.track())
    }

    /// Total number of drops recorded so far.
    pub fn dropped(&self) -> usize {
        self.drops.borrow().iter().sum()
    }

    /// Ids of the elements that haven't been dropped yet, in the order they were handed out.
    pub fn live(&self) -> Vec<usize> {
        self.drops
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, count)| **count == 0)
            .map(|(id, _)| id)
            .collect()
    }

    /// Panics unless every element handed out has been dropped once and only once.
    pub fn assert_released_once(&self) {
        let drops = self.drops.borrow();
        let wrong: Vec<(usize, usize)> = drops
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, count)| *count != 1)
            .collect();
        assert!(wrong.is_empty(), "(id, drop count) pairs not released exactly once: {wrong:?}");
    }
}

impl Tracked {
    pub fn id(&self) -> usize {
        self.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.borrow_mut()[self.id] += 1;
    }
}

#[test]
fn test_ledger_counts_per_element() {
    let ledger = DropLedger::default();
    let first = ledger.track();
    let second = ledger.track();
    assert_eq!((first.id(), second.id()), (0, 1));

    drop(second);
    assert_eq!(ledger.live(), [0]);
    assert_eq!(ledger.dropped(), 1);

    drop(first);
    assert!(ledger.live().is_empty());
    ledger.assert_released_once();
}
