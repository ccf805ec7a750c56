//! Ordered maps backed by binary search trees.
//!
//! Three maps share one interface (`OrderedMap`): `BstMap`, a binary search tree without
//! rebalancing, `AvlMap`, which keeps the heights of sibling subtrees within one of each other,
//! and `RedBlackMap`, a left-leaning red black tree. Every node caches the size of its subtree, so
//! the length of a map is read from its root.
//!
//! Every map serializes with `serde` as a sequence of `Entry` values in ascending key order.

#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;

#[macro_use]
mod ordered_map;
mod binary_tree;
#[macro_use]
mod entry;
mod error;
pub mod avl_tree;
pub mod bst_tree;
pub mod iter;
pub mod red_black_tree;

pub use self::entry::Entry;
pub use self::error::{Error, Result};
pub use self::ordered_map::OrderedMap;
