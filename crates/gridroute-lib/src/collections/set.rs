use std::fmt;

use crate::collections::list::PositionalList;
use crate::collections::table::{ByteKey, HashTable, InsertOutcome};
use crate::error::Result;

/// Set of unique elements backed by a [`HashTable`].
///
/// Each element is its own key; uniqueness is decided by `Eq`.
#[derive(Clone)]
pub struct Set<T> {
    table: HashTable<T, ()>,
}

impl<T: ByteKey> Set<T> {
    pub fn new() -> Self {
        Self {
            table: HashTable::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of elements.
    pub fn cardinality(&self) -> usize {
        self.table.len()
    }

    pub fn len(&self) -> usize {
        self.cardinality()
    }

    pub fn add(&mut self, element: T) -> InsertOutcome {
        self.table.insert(element, ())
    }

    pub fn remove(&mut self, element: &T) -> Result<()> {
        self.table.remove(element)
    }

    pub fn contains(&self, element: &T) -> bool {
        self.table.contains(element)
    }

    /// Duplicates of every element, in bucket order.
    pub fn elements(&self) -> PositionalList<T>
    where
        T: Clone,
    {
        self.table.keys()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.table.iter().map(|(element, _)| element)
    }

    /// Every element of `a`, then every element of `b`.
    pub fn union(a: &Set<T>, b: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        a.iter().chain(b.iter()).cloned().collect()
    }

    /// Elements of `a` also present in `b`.
    pub fn intersection(a: &Set<T>, b: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        a.iter().filter(|element| b.contains(element)).cloned().collect()
    }

    /// Elements of `a` absent from `b`.
    pub fn difference(a: &Set<T>, b: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        a.iter()
            .filter(|element| !b.contains(element))
            .cloned()
            .collect()
    }
}

impl<T: ByteKey> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ByteKey> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Set::new();
        set.extend(iter);
        set
    }
}

impl<T: ByteKey> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: ByteKey + fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
