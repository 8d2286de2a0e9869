use thiserror::Error;

pub type Result<T> = std::result::Result<T, RBTreeError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RBTreeError {
    #[error("root node {0:?} is red")]
    RedRoot(String),
    #[error("red node {parent:?} has red child {child:?}")]
    RedRedViolation { parent: String, child: String },
    #[error("black height differs below {key:?}, left {left}, right {right}")]
    BlackHeightMismatch { key: String, left: usize, right: usize },
    #[error("key {key:?} is out of order relative to ancestor key {bound:?}")]
    OrderViolation { key: String, bound: String },
    #[error("parent link of node {key:?} does not point at its actual parent")]
    BrokenParentLink { key: String },
}
