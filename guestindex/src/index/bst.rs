use log::debug;
use super::{Index, NodeId};
use crate::record::Record;

/// Unbalanced search tree keyed on `Record::name`.
///
/// Equal keys always go right on insert, so every later duplicate of a key
/// lands in the right subtree of the first node holding it. The search relies
/// on that: after a match it only continues to the right, which keeps it a
/// single root-to-leaf walk. Changing either rule alone loses duplicates.
#[derive(Default)]
pub struct BinarySearchTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

struct Node {
    data: Record,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl BinarySearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[Record]) -> Self {
        let mut tree = Self::new();
        for record in records {
            tree.insert(record.clone());
        }
        debug!("built bst with {} records, height {}", tree.len(), tree.height());
        tree
    }

    /// Records in non-decreasing key order.
    pub fn in_order(&self) -> Vec<&Record> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut current = self.root;
        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes[id].left;
            }
            if let Some(id) = stack.pop() {
                out.push(&self.nodes[id].data);
                current = self.nodes[id].right;
            }
        }
        out
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            max = max.max(depth);
            let node = &self.nodes[id];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max
    }
}

impl Index for BinarySearchTree {
    fn insert(&mut self, record: Record) {
        let id = self.nodes.len();
        let mut current = match self.root {
            Some(root) => root,
            None => {
                self.nodes.push(Node { data: record, left: None, right: None });
                self.root = Some(id);
                return;
            }
        };
        loop {
            let node = &mut self.nodes[current];
            let slot = if record.name < node.data.name {
                &mut node.left
            } else {
                &mut node.right
            };
            match *slot {
                Some(next) => current = next,
                None => {
                    *slot = Some(id);
                    break;
                }
            }
        }
        self.nodes.push(Node { data: record, left: None, right: None });
    }

    fn search_all(&self, key: &str) -> Vec<Record> {
        let mut results = Vec::new();
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            let node_key = node.data.name.as_str();
            current = if key < node_key {
                node.left
            } else if key > node_key {
                node.right
            } else {
                results.push(node.data.clone());
                node.right
            };
        }
        results
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn name(&self) -> &'static str {
        "bst"
    }
}
