//! Generic owned containers.
//!
//! Layers, leaves first:
//! - [`NodeChain`] - singly-linked chain of owned elements
//! - [`PositionalList`] - chain with 0-based positional access and O(1) length
//! - [`Queue`] - FIFO queue with O(1) enqueue through a tail pointer
//! - [`HashTable`] - 256 buckets of chains keyed by [`ByteKey`]
//! - [`Dictionary`] and [`Set`] - specialisations of the hash table
//!
//! Containers take ownership of inserted elements and hand out clones from
//! read accessors, so callers never hold references into container storage
//! across mutations.

pub mod chain;
pub mod dictionary;
pub mod list;
pub mod queue;
pub mod set;
pub mod table;

pub use chain::NodeChain;
pub use dictionary::Dictionary;
pub use list::PositionalList;
pub use queue::Queue;
pub use set::Set;
pub use table::{bucket_index, ByteKey, HashTable, InsertOutcome, BUCKET_COUNT};
