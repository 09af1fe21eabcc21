//! FIFO queue built on [`NodeChain`].

use std::fmt;
use std::ptr::NonNull;

use crate::collections::chain::{Iter, Node, NodeChain};
use crate::error::{Error, Result};

/// First-in first-out queue with O(1) enqueue and dequeue.
///
/// The queue owns a [`NodeChain`] from its head and keeps a pointer to the
/// last node so appends do not walk the chain.
pub struct Queue<T> {
    chain: NodeChain<T>,
    // Invariant: `None` iff `chain` is empty, otherwise the last node of `chain`.
    tail: Option<NonNull<Node<T>>>,
}

impl<T> Queue<T> {
    pub const fn new() -> Self {
        Self {
            chain: NodeChain::new(),
            tail: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Append `element` at the tail.
    pub fn enqueue(&mut self, element: T) {
        let slot = match self.tail {
            // SAFETY: per the invariant `tail` points at the last node of
            // `self.chain`, which is alive and uniquely borrowed through
            // `&mut self`.
            Some(mut tail) => unsafe { &mut tail.as_mut().next },
            None => &mut self.chain,
        };
        slot.push_front(element);
        self.tail = slot.head_node_mut().map(NonNull::from);
    }

    /// Remove the head element and hand it to the caller.
    pub fn dequeue(&mut self) -> Result<T> {
        let element = self.chain.pop_front().ok_or(Error::Empty)?;
        if self.chain.is_empty() {
            self.tail = None;
        }
        Ok(element)
    }

    /// Duplicate of the head element.
    pub fn peek(&self) -> Result<T>
    where
        T: Clone,
    {
        self.chain.peek_front().ok_or(Error::Empty)
    }

    /// Dequeue until empty, dropping every element.
    pub fn drain(&mut self) {
        while self.dequeue().is_ok() {}
    }

    /// Number of queued elements. Walks the chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.chain == other.chain
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.enqueue(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_insertion_order() {
        let mut queue = Queue::new();
        for value in 1..=4u32 {
            queue.enqueue(value);
        }
        assert_eq!(queue.peek().unwrap(), 1);
        assert_eq!(queue.dequeue().unwrap(), 1);
        assert_eq!(queue.dequeue().unwrap(), 2);
        queue.enqueue(5);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn empty_queue_reports_empty() {
        let mut queue: Queue<u32> = Queue::new();
        assert!(matches!(queue.dequeue(), Err(Error::Empty)));
        assert!(matches!(queue.peek(), Err(Error::Empty)));
    }

    #[test]
    fn tail_resets_after_emptying() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        assert_eq!(queue.dequeue().unwrap(), "a");
        assert!(queue.is_empty());
        queue.enqueue("b");
        queue.enqueue("c");
        assert_eq!(queue.dequeue().unwrap(), "b");
        assert_eq!(queue.dequeue().unwrap(), "c");
        assert!(queue.is_empty());
    }

    #[test]
    fn clone_gets_its_own_tail() {
        let mut original: Queue<u32> = (1..=3).collect();
        let mut copy = original.clone();
        copy.enqueue(4);
        original.enqueue(10);
        assert_eq!(copy.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(original.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 10]);
    }

    #[test]
    fn drain_empties_queue() {
        let mut queue: Queue<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
        assert_eq!(queue.len(), 2);
        queue.drain();
        assert!(queue.is_empty());
        queue.enqueue("z".to_string());
        assert_eq!(queue.peek().unwrap(), "z");
    }
}
