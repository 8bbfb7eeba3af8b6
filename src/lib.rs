//! ## About
//!
//! Two small, independent collection practices:
//!
//! * Flattening an immutable n-ary tree lazily. A recursive pre-order traversal
//!   is translated into a resumable iteration that keeps an explicit stack of
//!   sibling cursors. See [Tree] and [DepthFirstIterator] to get started.
//! * Ordering poker cards by a custom two-level comparator. See [Card] and [PokerOrder].
//!
//! ## Naming conventions
//! * Traits – adjectives that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             are uses substantives (i.e., omit a `get_` prefix) much like the standard library.
//!
//! ## Logging
//!
//! Traversal and card construction emit [tracing](https://docs.rs/tracing) events at
//! `trace`/`debug` level. Installing a subscriber is up to the application.

pub mod cards;
pub mod errors;
pub mod tree;

pub use cards::{Card, PokerOrder, Rank, Suit};
pub use errors::{PracticeError, PracticeResult};
pub use tree::{DepthFirstIterator, Nodelike, Status, Tree, TreeNode};
