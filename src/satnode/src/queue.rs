//! FIFO of literals awaiting propagation.
//!
//! Backed by a `SmallVec` since the queue is almost always a handful of
//! literals deep; a plain `Vec`-with-head-index would otherwise grow
//! unbounded until compacted.

use crate::literal::Lit;
use smallvec::SmallVec;

#[derive(Debug, Clone, Default)]
pub struct PropagationQueue {
    items: SmallVec<[Lit; 8]>,
    head: usize,
}

impl PropagationQueue {
    pub fn new() -> Self {
        PropagationQueue::default()
    }

    pub fn push_back(&mut self, lit: Lit) {
        self.items.push(lit);
    }

    pub fn pop_front(&mut self) -> Option<Lit> {
        if self.head >= self.items.len() {
            return None;
        }
        let lit = self.items[self.head];
        self.head += 1;
        // Compact once the drained prefix dominates, so a long-running
        // solve doesn't pin memory to its historical high-water mark.
        if self.head > 16 && self.head * 2 >= self.items.len() {
            self.items.drain(0..self.head);
            self.head = 0;
        }
        Some(lit)
    }

    pub fn is_empty(&self) -> bool {
        self.head >= self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.head = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order_is_preserved() {
        let mut q = PropagationQueue::new();
        q.push_back(2);
        q.push_back(4);
        q.push_back(6);
        assert_eq!(q.pop_front(), Some(2));
        assert_eq!(q.pop_front(), Some(4));
        assert_eq!(q.pop_front(), Some(6));
        assert_eq!(q.pop_front(), None);
    }

    #[test]
    fn clear_empties_the_queue() {
        let mut q = PropagationQueue::new();
        q.push_back(2);
        q.clear();
        assert!(q.is_empty());
    }

    #[test]
    fn compaction_does_not_lose_or_reorder_items() {
        let mut q = PropagationQueue::new();
        let n = 64;
        for i in 0..n {
            q.push_back(i);
        }
        for i in 0..n {
            assert_eq!(q.pop_front(), Some(i));
        }
        assert_eq!(q.pop_front(), None);
    }
}
