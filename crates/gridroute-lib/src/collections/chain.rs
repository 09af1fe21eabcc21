//! Singly-linked node chain.
//!
//! [`NodeChain`] is the building block every other container in this crate is
//! assembled from. A chain is either empty or a node holding one element and
//! owning the rest of the chain. Ownership of the next link is exclusive, so
//! there are no cycles and no shared sub-chains.

use std::fmt;

use crate::error::{Error, Result};

/// A singly-linked chain of owned elements.
pub struct NodeChain<T> {
    head: Option<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) next: NodeChain<T>,
}

impl<T> NodeChain<T> {
    /// Create an empty chain.
    pub const fn new() -> Self {
        Self { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of nodes. Walks the whole chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Add an element in front of the chain.
    pub fn push_front(&mut self, element: T) {
        let next = NodeChain {
            head: self.head.take(),
        };
        self.head = Some(Box::new(Node { element, next }));
    }

    /// Borrow the front element.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.element)
    }

    /// Duplicate of the front element. The chain keeps its own copy.
    pub fn peek_front(&self) -> Option<T>
    where
        T: Clone,
    {
        self.front().cloned()
    }

    /// Detach the front node and hand its element to the caller.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { element, mut next } = *node;
        self.head = next.head.take();
        Some(element)
    }

    /// Drop the front element.
    pub fn remove_front(&mut self) -> Result<()> {
        self.pop_front().map(drop).ok_or(Error::Empty)
    }

    /// The chain following the front node, if the chain is not empty.
    pub fn next(&self) -> Option<&NodeChain<T>> {
        self.head.as_deref().map(|node| &node.next)
    }

    pub fn next_mut(&mut self) -> Option<&mut NodeChain<T>> {
        self.head.as_deref_mut().map(|node| &mut node.next)
    }

    /// Replace the chain following the front node and return the old one.
    pub fn set_next(&mut self, next: NodeChain<T>) -> Result<NodeChain<T>> {
        let node = self.head.as_deref_mut().ok_or(Error::Empty)?;
        Ok(std::mem::replace(&mut node.next, next))
    }

    /// Detach everything after the front node.
    pub fn take_next(&mut self) -> NodeChain<T> {
        self.next_mut().map(std::mem::take).unwrap_or_default()
    }

    /// Drop every node and element.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.head.take();
        }
    }

    /// Structural equality with a caller-provided element comparison.
    pub fn equals_by<F>(&self, other: &NodeChain<T>, mut eq: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if eq(a, b) => continue,
                _ => return false,
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub(crate) fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    pub(crate) fn head_node_mut(&mut self) -> Option<&mut Node<T>> {
        self.head.as_deref_mut()
    }

    /// The sub-chain starting `n` nodes after the front.
    ///
    /// `n == len()` yields the empty chain at the end, which is where an
    /// append happens.
    pub(crate) fn suffix(&self, n: usize) -> Option<&NodeChain<T>> {
        let mut cursor = self;
        for _ in 0..n {
            cursor = &cursor.head.as_deref()?.next;
        }
        Some(cursor)
    }

    pub(crate) fn suffix_mut(&mut self, n: usize) -> Option<&mut NodeChain<T>> {
        let mut cursor = self;
        for _ in 0..n {
            cursor = &mut cursor.head.as_deref_mut()?.next;
        }
        Some(cursor)
    }

    /// Remove and return the first element matching `pred`.
    pub(crate) fn remove_first<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self;
        loop {
            if pred(cursor.front()?) {
                return cursor.pop_front();
            }
            cursor = &mut cursor.head.as_deref_mut()?.next;
        }
    }

    /// Keep only the elements matching `keep`; returns how many were dropped.
    pub(crate) fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut cursor = self;
        loop {
            let Some(front) = cursor.front() else {
                return removed;
            };
            if !keep(front) {
                cursor.pop_front();
                removed += 1;
                continue;
            }
            match cursor.head.as_deref_mut() {
                Some(node) => cursor = &mut node.next,
                None => return removed,
            }
        }
    }
}

impl<T> Default for NodeChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for NodeChain<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for NodeChain<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for NodeChain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals_by(other, |a, b| a == b)
    }
}

impl<T: Eq> Eq for NodeChain<T> {}

impl<T: fmt::Debug> fmt::Debug for NodeChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Builds a chain in iteration order.
impl<T> FromIterator<T> for NodeChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = NodeChain::new();
        let mut cursor = &mut chain;
        for element in iter {
            let node = cursor.head.insert(Box::new(Node {
                element,
                next: NodeChain::new(),
            }));
            cursor = &mut node.next;
        }
        chain
    }
}

impl<'a, T> IntoIterator for &'a NodeChain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`NodeChain`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.head.as_deref();
            &node.element
        })
    }
}

pub(crate) struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.head.as_deref_mut();
            &mut node.element
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_of(values: &[u32]) -> NodeChain<u32> {
        values.iter().copied().collect()
    }

    #[test]
    fn push_front_prepends() {
        let mut chain = NodeChain::new();
        assert!(chain.is_empty());
        chain.push_front(3);
        chain.push_front(2);
        chain.push_front(1);
        assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(chain.peek_front(), Some(1));
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn remove_front_on_empty_chain_fails() {
        let mut chain: NodeChain<u32> = NodeChain::new();
        assert!(matches!(chain.remove_front(), Err(Error::Empty)));
        assert!(matches!(chain.set_next(NodeChain::new()), Err(Error::Empty)));
    }

    #[test]
    fn set_next_swaps_tail() {
        let mut chain = chain_of(&[1, 2, 3]);
        let old = chain.set_next(chain_of(&[9])).expect("non-empty chain");
        assert_eq!(old, chain_of(&[2, 3]));
        assert_eq!(chain, chain_of(&[1, 9]));
        assert_eq!(chain.next().and_then(NodeChain::front), Some(&9));
    }

    #[test]
    fn take_next_splits_after_front() {
        let mut chain = chain_of(&[1, 2, 3]);
        let rest = chain.take_next();
        assert_eq!(chain, chain_of(&[1]));
        assert_eq!(rest, chain_of(&[2, 3]));
    }

    #[test]
    fn deep_copy_is_independent() {
        let original = chain_of(&[1, 2, 3]);
        let mut copy = original.clone();
        copy.push_front(0);
        copy.pop_front();
        copy.pop_front();
        assert_eq!(original, chain_of(&[1, 2, 3]));
        assert_eq!(copy, chain_of(&[2, 3]));
    }

    #[test]
    fn equality_respects_length_and_order() {
        assert_eq!(chain_of(&[]), chain_of(&[]));
        assert_ne!(chain_of(&[1, 2]), chain_of(&[2, 1]));
        assert_ne!(chain_of(&[1, 2]), chain_of(&[1, 2, 3]));
        assert!(chain_of(&[1, 2]).equals_by(&chain_of(&[11, 12]), |a, b| a % 10 == b % 10));
    }

    #[test]
    fn remove_first_and_retain() {
        let mut chain = chain_of(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(chain.remove_first(|v| *v == 4), Some(4));
        assert_eq!(chain.remove_first(|v| *v == 42), None);
        assert_eq!(chain.retain(|v| v % 2 == 1), 2);
        assert_eq!(chain, chain_of(&[1, 3, 5]));
    }

    #[test]
    fn suffix_reaches_end_of_chain() {
        let mut chain = chain_of(&[1, 2]);
        assert!(chain.suffix(2).is_some_and(NodeChain::is_empty));
        assert!(chain.suffix(3).is_none());
        chain.suffix_mut(2).expect("end of chain").push_front(3);
        assert_eq!(chain, chain_of(&[1, 2, 3]));
    }

    #[test]
    fn long_chain_drops_without_recursion() {
        let chain: NodeChain<u32> = (0..200_000).collect();
        assert_eq!(chain.len(), 200_000);
        drop(chain);
    }
}
