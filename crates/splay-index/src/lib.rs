//! Self-adjusting ordered index over composite `(key, id)` pairs.
//!
//! A splay tree: every successful access rotates the touched node to the
//! root (zig / zig-zig / zig-zag steps), which yields amortized O(log n)
//! operations and keeps recently used entries near the top. Entries are
//! ordered lexicographically on `(key, id)`, with `key` primary and `id`
//! breaking ties, and each pair is unique.
//!
//! Nodes live in a `Vec`-backed arena; all links are `Option<u32>` indices
//! into it. Child links own by convention, the parent link exists only for
//! the upward walk during splaying.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] link trait, [`EntryKey`], [`SplayNode`] |
//! | [`splay`] | Rotation primitives and the splay driver |
//! | [`util`]  | In-order traversal, structural validator, debug printer |
//! | [`tree`]  | [`SplayTree`] — the public index |
//!
//! # Example
//!
//! ```
//! use splay_index::SplayTree;
//!
//! let mut tree = SplayTree::new();
//! tree.insert(10, 5);
//! tree.insert(10, 2);
//! tree.insert(10, 8);
//!
//! assert!(tree.contains(&10, &5));
//! assert_eq!(tree.find_smallest_by_key(&10).map(|e| e.id), Some(2));
//! assert!(tree.remove_smallest(&10));
//! assert_eq!(tree.find_smallest_by_key(&10).map(|e| e.id), Some(5));
//! ```

pub mod splay;
pub mod tree;
pub mod types;
pub mod util;

pub use splay::{rotate_left, rotate_right, splay};
pub use tree::SplayTree;
pub use types::{EntryKey, Node, SplayNode};
pub use util::{assert_links, first, last, next, InvariantError};
