use crate::record::Record;

mod bst;
pub use bst::BinarySearchTree;

pub mod rbtree;
pub use rbtree::RedBlackTree;

pub mod hashtable;
pub use hashtable::{HashTable, HashTableConfig};

mod multimap;
pub use multimap::MultiMap;

pub type NodeId = usize;

/// A structure indexing records by name. Built by inserting records one at a
/// time and queried afterwards; there is no removal.
pub trait Index {
    fn insert(&mut self, record: Record);
    /// Every record whose name equals `key`. Empty when the key is absent.
    fn search_all(&self, key: &str) -> Vec<Record>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn name(&self) -> &'static str;
}
