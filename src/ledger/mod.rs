//! Clue ledger
//!
//! Binary search tree of discovered clues, ordered by byte-wise comparison
//! of the clue text. Append-only: clues are never removed during a session.
//! Inserting a clue already present leaves the tree unchanged.

use std::cmp::Ordering;

/// Single ledger node, exclusively owning its subtrees
#[derive(Debug, Clone)]
struct ClueNode {
    clue: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(clue: &str) -> Box<Self> {
        Box::new(Self {
            clue: clue.to_string(),
            left: None,
            right: None,
        })
    }
}

/// Insert `clue` below `node`, returning the (possibly new) subtree root
/// and whether a node was added.
fn insert_node(node: Option<Box<ClueNode>>, clue: &str) -> (Option<Box<ClueNode>>, bool) {
    let Some(mut node) = node else {
        return (Some(ClueNode::new(clue)), true);
    };

    let inserted = match clue.cmp(node.clue.as_str()) {
        Ordering::Less => {
            let (left, inserted) = insert_node(node.left.take(), clue);
            node.left = left;
            inserted
        }
        Ordering::Greater => {
            let (right, inserted) = insert_node(node.right.take(), clue);
            node.right = right;
            inserted
        }
        Ordering::Equal => false,
    };

    (Some(node), inserted)
}

/// Sorted, duplicate-free set of discovered clues
#[derive(Debug, Clone, Default)]
pub struct ClueLedger {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Record a clue
    ///
    /// Returns `true` if the clue was new, `false` if it was already present.
    pub fn insert(&mut self, clue: &str) -> bool {
        let (root, inserted) = insert_node(self.root.take(), clue);
        self.root = root;
        if inserted {
            self.len += 1;
            tracing::debug!(clue, total = self.len, "clue recorded");
        }
        inserted
    }

    /// Check whether a clue has been recorded
    pub fn contains(&self, clue: &str) -> bool {
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            node = match clue.cmp(current.clue.as_str()) {
                Ordering::Less => current.left.as_deref(),
                Ordering::Greater => current.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Number of distinct clues
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no clue was recorded yet
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// In-order (ascending) iteration over the clues
    ///
    /// Each call starts a fresh traversal, so iterating twice yields the
    /// same sequence.
    pub fn iter(&self) -> Clues<'_> {
        let mut clues = Clues { stack: Vec::new() };
        clues.push_left_spine(self.root.as_deref());
        clues
    }

    /// Height of the tree (0 when empty)
    pub fn height(&self) -> usize {
        fn height_of(node: Option<&ClueNode>) -> usize {
            node.map_or(0, |n| {
                1 + height_of(n.left.as_deref()).max(height_of(n.right.as_deref()))
            })
        }
        height_of(self.root.as_deref())
    }
}

impl<'a> IntoIterator for &'a ClueLedger {
    type Item = &'a str;
    type IntoIter = Clues<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> FromIterator<&'a str> for ClueLedger {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut ledger = ClueLedger::new();
        for clue in iter {
            ledger.insert(clue);
        }
        ledger
    }
}

/// Lazy in-order iterator over a [`ClueLedger`]
///
/// Stack depth is bounded by the tree height.
#[derive(Debug)]
pub struct Clues<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> Clues<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for Clues<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.clue.as_str())
    }
}
