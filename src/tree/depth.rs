/*! Lazy pre-order (depth-first) traversal with an explicit stack of sibling cursors */
use super::Nodelike;
use crate::{PracticeError, PracticeResult};
use core::fmt;
use core::iter::FusedIterator;
use tracing::{debug, trace};
use tracing_attributes::instrument;

/// Where a [DepthFirstIterator] stands. An empty frame stack alone cannot
/// tell "before the root" from "after the last node", hence the explicit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Positioned before the root
    Unstarted,
    /// [DepthFirstIterator::current] addresses a node
    InProgress,
    /// Permanent until [DepthFirstIterator::reset]; the [FusedIterator] guarantee
    /// only holds up to that point.
    Exhausted,
}

/// Iterator for a pre-order traversal: parent before children, children left to right.
///
/// Each frame on the stack is a cursor over the children of a node that has already
/// been visited, i.e., the stack mirrors the call stack of the recursive traversal.
/// The children of the current node are only pushed on the following advance, so the
/// stack height equals the depth of the current node.
///
/// The iterator is single-consumer: advancing requires `&mut self`. Independent
/// iterators over the same tree may run on different threads.
pub struct DepthFirstIterator<'a, N> {
    root: &'a N,
    stack: Vec<std::slice::Iter<'a, N>>,
    current: Option<&'a N>,
    status: Status,
    visited: usize,
}

impl<'a, N: Nodelike> DepthFirstIterator<'a, N> {
    pub fn new(root: &'a N) -> Self {
        Self::with_capacity(root, 0)
    }

    /// Contructor. `capacity` is the expected maximal depth of the tree and
    /// only pre-sizes the frame stack.
    #[instrument(level = "trace", skip(root))]
    pub fn with_capacity(root: &'a N, capacity: usize) -> Self {
        DepthFirstIterator {
            root,
            stack: Vec::with_capacity(capacity),
            current: None,
            status: Status::Unstarted,
            visited: 0,
        }
    }

    /// Advances to the next node in pre-order. Returns whether a node is available.
    /// Calling it after exhaustion keeps returning `false`.
    pub fn move_next(&mut self) -> bool {
        match self.status {
            Status::Exhausted => false,
            Status::Unstarted => {
                self.status = Status::InProgress;
                self.current = Some(self.root);
                self.visited = 1;
                true
            }
            Status::InProgress => {
                // Descend into the subtree of the current node before moving on to its siblings
                if let Some(node) = self.current.filter(|node| !node.is_leaf()) {
                    self.stack.push(node.children().iter());
                    trace!(depth = self.stack.len(), "pushed frame");
                }
                while let Some(frame) = self.stack.last_mut() {
                    if let Some(next) = frame.next() {
                        self.current = Some(next);
                        self.visited += 1;
                        return true;
                    }
                    self.stack.pop();
                    trace!(depth = self.stack.len(), "popped frame");
                }
                debug!(visited = self.visited, "depth-first traversal exhausted");
                self.current = None;
                self.status = Status::Exhausted;
                false
            }
        }
    }

    /// The node addressed by the last successful [DepthFirstIterator::move_next].
    pub fn current(&self) -> PracticeResult<&'a N> {
        match (self.status, self.current) {
            (Status::InProgress, Some(node)) => Ok(node),
            (Status::Unstarted, _) => Err(PracticeError::InvalidState("traversal has not started")),
            _ => Err(PracticeError::InvalidState("traversal is exhausted")),
        }
    }

    /// Depth of the current node; the root has depth 0.
    pub fn depth(&self) -> Option<usize> {
        match self.status {
            Status::InProgress => Some(self.stack.len()),
            _ => None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Discards all frames and positions the iterator before the root again.
    /// Equivalent to obtaining a fresh iterator.
    pub fn reset(&mut self) {
        trace!(visited = self.visited, "reset");
        self.stack.clear();
        self.current = None;
        self.status = Status::Unstarted;
        self.visited = 0;
    }

    /// Releases the frame stack and leaves the iterator exhausted. Idempotent.
    pub fn dispose(&mut self) {
        self.stack = Vec::new();
        self.current = None;
        self.status = Status::Exhausted;
    }
}

impl<'a, N: Nodelike> Iterator for DepthFirstIterator<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            self.current
        } else {
            None
        }
    }
}

impl<N: Nodelike> FusedIterator for DepthFirstIterator<'_, N> {}

// Manual impls: deriving would require `N: Clone`/`N: Debug`.
impl<N> Clone for DepthFirstIterator<'_, N> {
    fn clone(&self) -> Self {
        DepthFirstIterator {
            root: self.root,
            stack: self.stack.clone(),
            current: self.current,
            status: self.status,
            visited: self.visited,
        }
    }
}

impl<N> fmt::Debug for DepthFirstIterator<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepthFirstIterator")
            .field("depth", &self.stack.len())
            .field("status", &self.status)
            .field("visited", &self.visited)
            .finish()
    }
}
