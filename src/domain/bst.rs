//! Unbalanced binary search tree over `i32` values.
//!
//! Ordering: left subtree strictly less than the node, right subtree
//! greater-or-equal. Duplicates therefore always descend to the right and
//! come out of an in-order walk in insertion order.

use std::fmt;

use termtree::Tree;
use tracing::instrument;

/// Placeholder label for a missing child when its sibling exists.
const EMPTY_SLOT: &str = "·";

/// Tree node exclusively owning its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BstNode {
    pub value: i32,
    pub left: Option<Box<BstNode>>,
    pub right: Option<Box<BstNode>>,
}

impl BstNode {
    pub fn leaf(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// Insert `value` below `root` and hand back the subtree root.
///
/// An empty subtree becomes a fresh leaf. Otherwise the child slot chosen by
/// comparison is taken out, recursed into, and stored back, so the caller
/// must keep the returned handle in place of the one it passed in.
///
/// There is no rebalancing and each level costs one stack frame. Sorted input
/// builds a chain whose depth equals the number of values, so very long sorted
/// runs can exhaust the thread's stack.
#[instrument(level = "trace", skip(root))]
pub fn insert(root: Option<Box<BstNode>>, value: i32) -> Box<BstNode> {
    match root {
        None => Box::new(BstNode::leaf(value)),
        Some(mut node) => {
            if value < node.value {
                node.left = Some(insert(node.left.take(), value));
            } else {
                node.right = Some(insert(node.right.take(), value));
            }
            node
        }
    }
}

/// Lazy left/node/right walk starting at `root`.
pub fn traverse_inorder(root: Option<&BstNode>) -> InOrderIterator<'_> {
    InOrderIterator::new(root)
}

/// Binary search tree owning its root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Bst {
    root: Option<Box<BstNode>>,
    len: usize,
}

impl Bst {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, value: i32) {
        self.root = Some(insert(self.root.take(), value));
        self.len += 1;
    }

    pub fn root(&self) -> Option<&BstNode> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn inorder(&self) -> InOrderIterator<'_> {
        traverse_inorder(self.root())
    }

    pub fn contains(&self, value: i32) -> bool {
        let mut current = self.root();
        while let Some(node) = current {
            if value == node.value {
                return true;
            }
            current = if value < node.value {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        fn calculate_depth(node: Option<&BstNode>) -> usize {
            match node {
                Some(n) => {
                    1 + calculate_depth(n.left.as_deref()).max(calculate_depth(n.right.as_deref()))
                }
                None => 0,
            }
        }
        calculate_depth(self.root())
    }

    /// Printable tree view, left child listed before right child.
    pub fn to_tree(&self) -> Tree<String> {
        fn build_tree(node: &BstNode) -> Tree<String> {
            let mut tree = Tree::new(node.value.to_string());
            if node.left.is_none() && node.right.is_none() {
                return tree;
            }
            for child in [&node.left, &node.right] {
                let leaf = match child {
                    Some(c) => build_tree(c),
                    None => Tree::new(EMPTY_SLOT.to_string()),
                };
                tree.push(leaf);
            }
            tree
        }

        match self.root() {
            Some(root) => build_tree(root),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

impl Extend<i32> for Bst {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<i32> for Bst {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut bst = Bst::new();
        bst.extend(iter);
        bst
    }
}

impl fmt::Display for Bst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree())
    }
}

/// In-order iterator using an explicit stack of pending ancestors.
pub struct InOrderIterator<'a> {
    stack: Vec<&'a BstNode>,
}

impl<'a> InOrderIterator<'a> {
    fn new(root: Option<&'a BstNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a BstNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrderIterator<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.value)
    }
}
