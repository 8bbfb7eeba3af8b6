//! Immutable n-ary trees of named nodes that can be flattened lazily.
//!
//! A [Tree] owns its root and hands out any number of independent
//! [DepthFirstIterator]s. Traversal never mutates the nodes, so a tree can be
//! shared across threads while each thread runs its own iterator.

pub mod depth;

pub use depth::{DepthFirstIterator, Status};

use core::fmt;
use itertools::Itertools;

/// Capability of a node in an immutable n-ary tree.
pub trait Nodelike: Sized {
    type Id: ?Sized;

    fn id(&self) -> &Self::Id;
    /// Ordered children, left to right. Empty for a leaf.
    fn children(&self) -> &[Self];

    fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}

/// A named node that exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    id: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Contructor. Neither uniqueness nor non-emptiness of `id` is checked.
    pub fn new(id: impl Into<String>, children: impl IntoIterator<Item = TreeNode>) -> Self {
        TreeNode {
            id: id.into(),
            children: children.into_iter().collect(),
        }
    }

    pub fn leaf(id: impl Into<String>) -> Self {
        TreeNode {
            id: id.into(),
            children: Vec::new(),
        }
    }
}

/// Drops the subtree without recursing, so arbitrarily deep trees can be released.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl Nodelike for TreeNode {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Wraps a single (required) root node.
///
/// Node count and maximal depth are computed once on construction; the
/// latter pre-sizes the frame stack of every iterator.
#[derive(Debug, Clone)]
pub struct Tree<N = TreeNode> {
    root: N,
    len: usize,
    max_depth: usize,
}

impl<N: Nodelike> Tree<N> {
    pub fn new(root: N) -> Self {
        let (mut len, mut max_depth) = (0, 0);
        let mut nodes = DepthFirstIterator::new(&root);
        while nodes.move_next() {
            len += 1;
            if let Some(depth) = nodes.depth() {
                max_depth = max_depth.max(depth);
            }
        }
        Tree { root, len, max_depth }
    }

    pub fn root(&self) -> &N {
        &self.root
    }

    /// Number of nodes, root included. Never zero.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Distance from the root to its deepest leaf (the root alone has depth 0)
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// A fresh traversal positioned before the root
    pub fn iterate(&self) -> DepthFirstIterator<'_, N> {
        self.iter_with_capacity(self.max_depth)
    }

    /// Same as [Tree::iterate] with an explicit capacity hint for the frame stack.
    pub fn iter_with_capacity(&self, capacity: usize) -> DepthFirstIterator<'_, N> {
        DepthFirstIterator::with_capacity(&self.root, capacity)
    }
}

impl<'a, N: Nodelike> IntoIterator for &'a Tree<N> {
    type Item = &'a N;
    type IntoIter = DepthFirstIterator<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iterate()
    }
}

/// Lists the ids in pre-order, comma separated.
impl<N> fmt::Display for Tree<N>
where
    N: Nodelike,
    N::Id: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iterate().map(|node| node.id()).join(", "))
    }
}
