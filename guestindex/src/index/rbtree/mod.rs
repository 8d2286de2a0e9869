use log::{debug, trace};
use super::{Index, NodeId};
use crate::record::Record;

pub mod exceptions;
pub use exceptions::{RBTreeError, Result};

/// Red-black tree keyed on `Record::name`. Equal keys go right on insert and
/// a search continues into both subtrees on a match, so every duplicate is
/// returned regardless of where rotations moved it.
///
/// Nodes live in an arena and refer to each other by index. Absent children
/// are the black null leaves.
#[derive(Default)]
pub struct RedBlackTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

struct Node {
    data: Record,
    red: bool,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl RedBlackTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[Record]) -> Self {
        let mut tree = Self::new();
        for record in records {
            tree.insert(record.clone());
        }
        debug!("built rbt with {} records, height {}", tree.len(), tree.height());
        tree
    }

    fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.nodes[id].left,
            Side::Right => self.nodes[id].right,
        }
    }

    fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.nodes[id].left = child,
            Side::Right => self.nodes[id].right = child,
        }
    }

    fn side_of(&self, parent: NodeId, id: NodeId) -> Side {
        if self.nodes[parent].left == Some(id) {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.map_or(false, |id| self.nodes[id].red)
    }

    /// Rotates `x` down towards `side`; its child on the opposite side takes
    /// its place. `rotate(x, Side::Left)` is the classic left rotation.
    fn rotate(&mut self, x: NodeId, side: Side) {
        let Some(y) = self.child(x, side.opposite()) else {
            return;
        };
        trace!("rotate {:?} at {:?}", side, self.nodes[x].data.name);

        let inner = self.child(y, side);
        self.set_child(x, side.opposite(), inner);
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }

        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        match parent {
            None => self.root = Some(y),
            Some(p) => {
                let x_side = self.side_of(p, x);
                self.set_child(p, x_side, Some(y));
            }
        }

        self.set_child(y, side, Some(x));
        self.nodes[x].parent = Some(y);
    }

    fn fix_insertion(&mut self, mut z: NodeId) {
        while let Some(parent) = self.nodes[z].parent {
            if !self.nodes[parent].red {
                break;
            }
            // A red parent is never the root, so the grandparent exists.
            let Some(grandparent) = self.nodes[parent].parent else {
                break;
            };
            let parent_side = self.side_of(grandparent, parent);
            let uncle = self.child(grandparent, parent_side.opposite());

            if self.is_red(uncle) {
                self.nodes[parent].red = false;
                if let Some(uncle) = uncle {
                    self.nodes[uncle].red = false;
                }
                self.nodes[grandparent].red = true;
                z = grandparent;
                continue;
            }

            if self.side_of(parent, z) != parent_side {
                // inner grandchild, turn it into an outer one
                z = parent;
                self.rotate(z, parent_side);
            }
            let Some(parent) = self.nodes[z].parent else {
                break;
            };
            self.nodes[parent].red = false;
            self.nodes[grandparent].red = true;
            self.rotate(grandparent, parent_side.opposite());
        }
        if let Some(root) = self.root {
            self.nodes[root].red = false;
        }
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

    /// Checks ordering, parent links and the red-black rules. Returns the
    /// black height of the tree, counting the null leaves.
    pub fn validate(&self) -> Result<usize> {
        let Some(root) = self.root else {
            return Ok(1);
        };
        let node = &self.nodes[root];
        if node.red {
            return Err(RBTreeError::RedRoot(node.data.name.clone()));
        }
        if node.parent.is_some() {
            return Err(RBTreeError::BrokenParentLink { key: node.data.name.clone() });
        }
        self.validate_subtree(root, None, None)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    // Keys below `id` must satisfy lower <= key <= upper. Insertion sends equal
    // keys right, but a rotation can lift a right-hand duplicate above its
    // peer, so an equal key may end up on the left as well.
    fn validate_subtree(&self, id: NodeId, lower: Option<&str>, upper: Option<&str>) -> Result<usize> {
        let node = &self.nodes[id];
        let key = node.data.name.as_str();
        if let Some(lower) = lower.filter(|lower| key < *lower) {
            return Err(RBTreeError::OrderViolation { key: key.to_string(), bound: lower.to_string() });
        }
        if let Some(upper) = upper.filter(|upper| key > *upper) {
            return Err(RBTreeError::OrderViolation { key: key.to_string(), bound: upper.to_string() });
        }

        let mut heights = [1, 1];
        for (i, side) in [Side::Left, Side::Right].into_iter().enumerate() {
            let Some(child) = self.child(id, side) else {
                continue;
            };
            let child_node = &self.nodes[child];
            if child_node.parent != Some(id) {
                return Err(RBTreeError::BrokenParentLink { key: child_node.data.name.clone() });
            }
            if node.red && child_node.red {
                return Err(RBTreeError::RedRedViolation {
                    parent: key.to_string(),
                    child: child_node.data.name.clone(),
                });
            }
            heights[i] = match side {
                Side::Left => self.validate_subtree(child, lower, Some(key))?,
                Side::Right => self.validate_subtree(child, Some(key), upper)?,
            };
        }

        if heights[0] != heights[1] {
            return Err(RBTreeError::BlackHeightMismatch {
                key: key.to_string(),
                left: heights[0],
                right: heights[1],
            });
        }
        Ok(heights[0] + usize::from(!node.red))
    }
}

impl Index for RedBlackTree {
    fn insert(&mut self, record: Record) {
        let id = self.nodes.len();
        let mut parent = None;
        let mut current = self.root;
        let mut side = Side::Left;
        while let Some(p) = current {
            parent = Some(p);
            side = if record.name < self.nodes[p].data.name {
                Side::Left
            } else {
                Side::Right
            };
            current = self.child(p, side);
        }

        self.nodes.push(Node {
            data: record,
            red: true,
            left: None,
            right: None,
            parent,
        });
        match parent {
            None => self.root = Some(id),
            Some(p) => self.set_child(p, side, Some(id)),
        }
        self.fix_insertion(id);
    }

    fn search_all(&self, key: &str) -> Vec<Record> {
        let mut results = Vec::new();
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            let node_key = node.data.name.as_str();
            if key < node_key {
                stack.extend(node.left);
            } else if key > node_key {
                stack.extend(node.right);
            } else {
                results.push(node.data.clone());
                stack.extend(node.right);
                stack.extend(node.left);
            }
        }
        results
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn name(&self) -> &'static str {
        "rbt"
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::linear;
    use crate::rand::{rand_records, rand_string};
    use crate::record::same_records;
    use proptest::prelude::*;

    fn guest(name: &str, room: i32) -> Record {
        Record::new(name, room, 250, "2023-03-10 14:00", "2023-03-12 11:00")
    }

    fn assert_in_order(tree: &RedBlackTree) {
        let keys: Vec<&str> = tree.in_order().iter().map(|r| r.name.as_str()).collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]), "keys out of order: {:?}", keys);
    }

    #[test]
    fn empty_tree() {
        let tree = RedBlackTree::from_records(&[]);
        assert!(tree.is_empty());
        assert!(tree.search_all("x").is_empty());
        assert_eq!(tree.validate(), Ok(1));
    }

    #[test]
    fn invariants_hold_after_every_insert() {
        let mut tree = RedBlackTree::new();
        for i in 0..500 {
            tree.insert(guest(&rand_string(3), i));
            if let Err(e) = tree.validate() {
                panic!("invalid after insert {}: {}", i, e);
            }
        }
        assert_in_order(&tree);
    }

    #[test]
    fn sorted_inputs_stay_balanced() {
        let ascending: Vec<Record> = (0..4096).map(|i| guest(&format!("g{:05}", i), i)).collect();
        let mut descending = ascending.clone();
        descending.reverse();

        for records in [ascending, descending] {
            let tree = RedBlackTree::from_records(&records);
            assert!(tree.is_valid());
            assert_in_order(&tree);
            // 2 * log2(n + 1)
            assert!(tree.height() <= 24, "height {}", tree.height());
        }
    }

    #[test]
    fn duplicate_heavy_returns_every_copy() {
        let records: Vec<Record> = (1..=5).map(|room| guest("X", room)).collect();
        let tree = RedBlackTree::from_records(&records);
        assert!(tree.is_valid());
        let found = tree.search_all("X");
        assert_eq!(found.len(), 5);
        assert!(same_records(&found, &records));
    }

    #[test]
    fn duplicates_split_by_rotation_are_found() {
        let mut records = Vec::new();
        for i in 0..200 {
            records.push(guest("dup", i));
            records.push(guest(&format!("k{:03}", i), i));
        }
        let tree = RedBlackTree::from_records(&records);
        assert!(tree.is_valid());
        assert_eq!(tree.search_all("dup").len(), 200);
        assert!(tree.search_all("k999").is_empty());
    }

    #[test]
    fn validate_reports_red_root() {
        let mut tree = RedBlackTree::from_records(&[guest("a", 1)]);
        tree.nodes[0].red = true;
        assert_eq!(tree.validate(), Err(RBTreeError::RedRoot("a".to_string())));
    }

    #[test]
    fn validate_reports_black_height_mismatch() {
        let mut tree = RedBlackTree::from_records(&[guest("b", 1), guest("a", 2), guest("c", 3)]);
        assert!(tree.is_valid());
        let left = tree.nodes[tree.root.unwrap()].left.unwrap();
        tree.nodes[left].red = false;
        assert!(matches!(tree.validate(), Err(RBTreeError::BlackHeightMismatch { .. })));
    }

    #[test]
    fn matches_linear_scan_on_random_records() {
        let records = rand_records(3000, 200);
        let tree = RedBlackTree::from_records(&records);
        assert!(tree.is_valid());
        for record in records.iter().step_by(41) {
            let expected = linear::search_all(&records, &record.name);
            assert!(same_records(&tree.search_all(&record.name), &expected));
        }
    }

    proptest! {
        #[test]
        fn invariants_for_any_insertion_order(names in prop::collection::vec("[a-e]{0,3}", 0..200)) {
            let records: Vec<Record> = names.iter().enumerate()
                .map(|(i, name)| guest(name, i as i32))
                .collect();
            let tree = RedBlackTree::from_records(&records);
            prop_assert!(tree.validate().is_ok());
            prop_assert_eq!(tree.in_order().len(), records.len());
            for name in &names {
                let expected = linear::search_all(&records, name);
                prop_assert!(same_records(&tree.search_all(name), &expected));
            }
        }
    }
}
