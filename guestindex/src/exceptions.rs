use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IndexError in Loader, {0}")]
    LoaderError(#[from] crate::loader::exceptions::LoaderError),
    #[error("IndexError in HashTable config, {0}")]
    ConfigError(#[from] crate::index::hashtable::exceptions::ConfigError),
    #[error("IndexError in RedBlackTree, {0}")]
    RBTreeError(#[from] crate::index::rbtree::exceptions::RBTreeError),
    #[error("{0} (FileIOError)")]
    FileIOError(#[from] std::io::Error),
    #[error("{0} (JsonError)")]
    JsonError(#[from] serde_json::Error),
}
