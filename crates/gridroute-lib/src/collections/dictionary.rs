use std::fmt;

use crate::collections::list::PositionalList;
use crate::collections::table::{ByteKey, HashTable, InsertOutcome};
use crate::error::Result;

/// Key/value dictionary backed by a [`HashTable`].
#[derive(Clone)]
pub struct Dictionary<K, V> {
    table: HashTable<K, V>,
}

impl<K: ByteKey, V> Dictionary<K, V> {
    pub fn new() -> Self {
        Self {
            table: HashTable::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.table.contains(key)
    }

    pub fn insert(&mut self, key: K, value: V) -> InsertOutcome {
        self.table.insert(key, value)
    }

    pub fn remove(&mut self, key: &K) -> Result<()> {
        self.table.remove(key)
    }

    pub fn get(&self, key: &K) -> Result<V>
    where
        V: Clone,
    {
        self.table.get(key)
    }

    pub fn keys(&self) -> PositionalList<K>
    where
        K: Clone,
    {
        self.table.keys()
    }

    pub fn values(&self) -> PositionalList<V>
    where
        V: Clone,
    {
        self.table.values()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.table.iter()
    }
}

impl<K: ByteKey, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ByteKey + fmt::Debug, V: fmt::Debug> fmt::Debug for Dictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.table, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn count_matches_keys() {
        let mut dictionary = Dictionary::new();
        for (key, value) in [(1u32, 1.5f64), (2, 2.5), (1, 3.5), (300, 0.0)] {
            dictionary.insert(key, value);
        }
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.keys().len(), dictionary.len());
        assert_eq!(dictionary.get(&1).unwrap(), 3.5);
    }

    #[test]
    fn missing_key_is_reported() {
        let mut dictionary: Dictionary<u32, String> = Dictionary::new();
        assert!(matches!(dictionary.get(&4), Err(Error::MissingKey)));
        assert!(matches!(dictionary.remove(&4), Err(Error::MissingKey)));
        assert!(dictionary.is_empty());
    }

    #[test]
    fn copy_is_independent() {
        let mut original = Dictionary::new();
        original.insert('a', 1u32);
        let mut copy = original.clone();
        copy.insert('b', 2);
        copy.remove(&'a').unwrap();
        assert_eq!(original.len(), 1);
        assert!(original.contains_key(&'a'));
        assert!(!original.contains_key(&'b'));
        assert_eq!(copy.len(), 1);
    }
}
