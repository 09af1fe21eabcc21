//! Fixed-size chained hash table.
//!
//! The table has [`BUCKET_COUNT`] buckets, each a [`NodeChain`] of key/value
//! entries. A key's bucket is the sum of its raw bytes modulo 256. The hash is
//! deliberately crude; correctness comes from scanning the bucket chain with
//! key equality, never from the distribution of the hash.

use std::fmt;
use std::iter;

use crate::collections::chain::NodeChain;
use crate::collections::list::PositionalList;
use crate::error::{Error, Result};

/// Number of buckets in every [`HashTable`].
pub const BUCKET_COUNT: usize = 256;

/// Keys that expose a fixed-size raw byte representation.
///
/// The byte array length is the key's byte-size; all keys of one type must
/// produce arrays of the same length.
pub trait ByteKey: Eq {
    type Bytes: AsRef<[u8]>;

    fn key_bytes(&self) -> Self::Bytes;
}

macro_rules! byte_key_for_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ByteKey for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn key_bytes(&self) -> Self::Bytes {
                    self.to_le_bytes()
                }
            }
        )*
    };
}

byte_key_for_primitive!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

impl ByteKey for char {
    type Bytes = [u8; 4];

    fn key_bytes(&self) -> Self::Bytes {
        u32::from(*self).to_le_bytes()
    }
}

/// Bucket selected for `key`: byte sum modulo 256.
pub fn bucket_index<K: ByteKey + ?Sized>(key: &K) -> usize {
    let sum = key
        .key_bytes()
        .as_ref()
        .iter()
        .fold(0u8, |acc, byte| acc.wrapping_add(*byte));
    usize::from(sum)
}

/// Result of a successful insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was new; the table grew by one entry.
    Inserted,
    /// The key was already stored; its value was replaced.
    Replaced,
}

#[derive(Clone, PartialEq, Eq)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Hash table mapping keys to values with per-bucket chaining.
#[derive(Clone)]
pub struct HashTable<K, V> {
    buckets: Vec<NodeChain<Entry<K, V>>>,
    len: usize,
}

impl<K: ByteKey, V> HashTable<K, V> {
    pub fn new() -> Self {
        Self {
            buckets: iter::repeat_with(NodeChain::new)
                .take(BUCKET_COUNT)
                .collect(),
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entry(key).is_some()
    }

    /// Store `value` under `key`, replacing (and dropping) any previous value.
    pub fn insert(&mut self, key: K, value: V) -> InsertOutcome {
        let bucket = &mut self.buckets[bucket_index(&key)];
        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            entry.value = value;
            return InsertOutcome::Replaced;
        }
        bucket.push_front(Entry { key, value });
        self.len += 1;
        InsertOutcome::Inserted
    }

    /// Remove the entry stored under `key`.
    pub fn remove(&mut self, key: &K) -> Result<()> {
        self.take(key).map(drop)
    }

    /// Remove the entry stored under `key` and return its value.
    pub fn take(&mut self, key: &K) -> Result<V> {
        let entry = self.buckets[bucket_index(key)]
            .remove_first(|entry| entry.key == *key)
            .ok_or(Error::MissingKey)?;
        self.len -= 1;
        Ok(entry.value)
    }

    /// Duplicate of the value stored under `key`.
    pub fn get(&self, key: &K) -> Result<V>
    where
        V: Clone,
    {
        self.entry(key)
            .map(|entry| entry.value.clone())
            .ok_or(Error::MissingKey)
    }

    /// Duplicates of every key, in bucket order then chain order.
    pub fn keys(&self) -> PositionalList<K>
    where
        K: Clone,
    {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Duplicates of every value, in the same order as [`HashTable::keys`].
    pub fn values(&self) -> PositionalList<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Drop every key and value.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Borrowing iteration in bucket order then chain order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter())
            .map(|entry| (&entry.key, &entry.value))
    }

    fn entry(&self, key: &K) -> Option<&Entry<K, V>> {
        self.buckets[bucket_index(key)]
            .iter()
            .find(|entry| entry.key == *key)
    }
}

impl<K: ByteKey, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ByteKey + fmt::Debug, V: fmt::Debug> fmt::Debug for HashTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_is_byte_sum_modulo_256() {
        assert_eq!(bucket_index(&0u32), 0);
        assert_eq!(bucket_index(&0x0102u16), 3);
        assert_eq!(bucket_index(&0x0000_80C0u32), (0x80 + 0xC0) % 256);
        assert_eq!(bucket_index(&'A'), 65);
    }

    #[test]
    fn insert_replaces_existing_value() {
        let mut table = HashTable::new();
        assert_eq!(table.insert(7u32, "seven"), InsertOutcome::Inserted);
        assert_eq!(table.insert(7u32, "SEVEN"), InsertOutcome::Replaced);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&7).unwrap(), "SEVEN");
    }

    #[test]
    fn colliding_keys_are_independent() {
        // 0x0102 and 0x0201 both sum to 3.
        let (a, b) = (0x0102u16, 0x0201u16);
        assert_eq!(bucket_index(&a), bucket_index(&b));

        let mut table = HashTable::new();
        table.insert(a, 'a');
        table.insert(b, 'b');
        assert_eq!(table.get(&a).unwrap(), 'a');
        assert_eq!(table.get(&b).unwrap(), 'b');

        table.remove(&a).unwrap();
        assert!(!table.contains(&a));
        assert_eq!(table.get(&b).unwrap(), 'b');
        table.remove(&b).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn failed_removal_keeps_count() {
        let mut table = HashTable::new();
        table.insert(1u8, ());
        assert!(matches!(table.remove(&2), Err(Error::MissingKey)));
        assert!(matches!(table.get(&2), Err(Error::MissingKey)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn keys_follow_bucket_order() {
        let mut table = HashTable::new();
        for key in [200u8, 3, 17, 3] {
            table.insert(key, u32::from(key) * 10);
        }
        assert_eq!(table.keys().to_vec(), vec![3, 17, 200]);
        assert_eq!(table.values().to_vec(), vec![30, 170, 2000]);
        assert_eq!(table.keys().len(), table.len());
    }

    #[test]
    fn clear_resets_every_bucket() {
        let mut table = HashTable::new();
        for key in 0..1000u32 {
            table.insert(key, key);
        }
        assert_eq!(table.len(), 1000);
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn clone_does_not_share_storage() {
        let mut original = HashTable::new();
        original.insert(1u32, String::from("one"));
        let mut copy = original.clone();
        copy.insert(2, String::from("two"));
        copy.insert(1, String::from("uno"));
        assert_eq!(original.len(), 1);
        assert_eq!(original.get(&1).unwrap(), "one");
        assert_eq!(copy.take(&1).unwrap(), "uno");
    }
}
