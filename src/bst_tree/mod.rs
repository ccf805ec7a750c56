//! Binary search tree that performs no rebalancing. Its height depends on the order in which keys
//! are inserted.

mod map;
mod node;
mod tree;

pub use self::map::{BstMap, BstMapIntoIter, BstMapIter, BstMapIterMut};
