//! Positional list built on [`NodeChain`].

use std::fmt;

use crate::collections::chain::{Iter, NodeChain};
use crate::error::{Error, Result};

/// A list addressed by 0-based position with O(1) length tracking.
///
/// Inserting at position 0 is O(1); every other positional operation walks
/// the chain from the front and costs O(position).
#[derive(Clone, PartialEq, Eq)]
pub struct PositionalList<T> {
    chain: NodeChain<T>,
    len: usize,
}

impl<T> PositionalList<T> {
    pub const fn new() -> Self {
        Self {
            chain: NodeChain::new(),
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Insert `element` so that it ends up at `position` (`0..=len`).
    pub fn insert(&mut self, element: T, position: usize) -> Result<()> {
        let len = self.len;
        if position > len {
            return Err(Error::OutOfBounds { position, len });
        }
        let slot = self
            .chain
            .suffix_mut(position)
            .ok_or(Error::OutOfBounds { position, len })?;
        slot.push_front(element);
        self.len += 1;
        Ok(())
    }

    /// Append `element` after the last position.
    pub fn push_back(&mut self, element: T) {
        if let Some(slot) = self.chain.suffix_mut(self.len) {
            slot.push_front(element);
            self.len += 1;
        }
    }

    /// Remove the element at `position` (`0..len`) and return it.
    pub fn remove(&mut self, position: usize) -> Result<T> {
        self.check_position(position)?;
        let element = self
            .chain
            .suffix_mut(position)
            .and_then(NodeChain::pop_front)
            .ok_or(Error::OutOfBounds {
                position,
                len: self.len,
            })?;
        self.len -= 1;
        Ok(element)
    }

    /// Duplicate of the element at `position` (`0..len`).
    pub fn get(&self, position: usize) -> Result<T>
    where
        T: Clone,
    {
        self.check_position(position)?;
        self.chain
            .suffix(position)
            .and_then(NodeChain::peek_front)
            .ok_or(Error::OutOfBounds {
                position,
                len: self.len,
            })
    }

    /// Position of the first element matching `pred`.
    pub fn position<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(pred)
    }

    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == element)
    }

    /// Keep only the elements matching `keep`; returns how many were removed.
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let removed = self.chain.retain(keep);
        self.len -= removed;
        removed
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.chain.clear();
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        if position >= self.len {
            return Err(Error::OutOfBounds {
                position,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<T> Default for PositionalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for PositionalList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for PositionalList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let chain: NodeChain<T> = iter.into_iter().collect();
        let len = chain.len();
        Self { chain, len }
    }
}

impl<'a, T> IntoIterator for &'a PositionalList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
