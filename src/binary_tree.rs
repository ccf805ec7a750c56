//! Read-only queries shared by every search tree in this crate.
//!
//! Each tree defines its own node type and its own structural mutations. Everything that only
//! walks the tree is written once here against the `BinaryNode` trait. None of these functions
//! recurse, so their stack usage does not depend on the height of the tree.

use crate::entry::Entry;
use std::borrow::Borrow;
use std::cmp::Ordering;

/// A subtree: either empty or an owned root node.
pub type Tree<N> = Option<Box<N>>;

/// A node of a binary search tree that caches the size of its subtree.
pub trait BinaryNode: Sized {
    type Key;
    type Value;

    fn entry(&self) -> &Entry<Self::Key, Self::Value>;

    fn left(&self) -> &Tree<Self>;

    fn right(&self) -> &Tree<Self>;

    /// Splits the node into disjoint mutable borrows of its entry and children.
    fn parts_mut(&mut self) -> (&mut Entry<Self::Key, Self::Value>, &mut Tree<Self>, &mut Tree<Self>);

    fn into_parts(self) -> (Entry<Self::Key, Self::Value>, Tree<Self>, Tree<Self>);

    /// Number of entries in the subtree rooted at this node.
    fn len(&self) -> usize;
}

pub fn len<N>(tree: &Tree<N>) -> usize
where
    N: BinaryNode,
{
    match tree {
        None => 0,
        Some(node) => node.len(),
    }
}

pub fn get<'a, N, V>(tree: &'a Tree<N>, key: &V) -> Option<&'a Entry<N::Key, N::Value>>
where
    N: BinaryNode,
    N::Key: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match key.cmp(node.entry().key.borrow()) {
            Ordering::Less => curr = node.left(),
            Ordering::Greater => curr = node.right(),
            Ordering::Equal => return Some(node.entry()),
        }
    }
    None
}

pub fn get_mut<'a, N, V>(tree: &'a mut Tree<N>, key: &V) -> Option<&'a mut Entry<N::Key, N::Value>>
where
    N: BinaryNode,
    N::Key: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    loop {
        let node = match curr {
            Some(node) => node,
            None => return None,
        };
        let (entry, left, right) = node.parts_mut();
        match key.cmp(entry.key.borrow()) {
            Ordering::Less => curr = left,
            Ordering::Greater => curr = right,
            Ordering::Equal => return Some(entry),
        }
    }
}

/// Returns the entry with the greatest key less than or equal to `key`.
pub fn floor<'a, N, V>(tree: &'a Tree<N>, key: &V) -> Option<&'a Entry<N::Key, N::Value>>
where
    N: BinaryNode,
    N::Key: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    let mut best = None;
    while let Some(node) = curr {
        match key.cmp(node.entry().key.borrow()) {
            Ordering::Less => curr = node.left(),
            Ordering::Greater => {
                best = Some(node.entry());
                curr = node.right();
            },
            Ordering::Equal => return Some(node.entry()),
        }
    }
    best
}

/// Returns the entry with the least key greater than or equal to `key`.
pub fn ceil<'a, N, V>(tree: &'a Tree<N>, key: &V) -> Option<&'a Entry<N::Key, N::Value>>
where
    N: BinaryNode,
    N::Key: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    let mut best = None;
    while let Some(node) = curr {
        match key.cmp(node.entry().key.borrow()) {
            Ordering::Greater => curr = node.right(),
            Ordering::Less => {
                best = Some(node.entry());
                curr = node.left();
            },
            Ordering::Equal => return Some(node.entry()),
        }
    }
    best
}

pub fn min<N>(tree: &Tree<N>) -> Option<&Entry<N::Key, N::Value>>
where
    N: BinaryNode,
{
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(left_node) = curr.left() {
            curr = left_node;
        }
        curr.entry()
    })
}

pub fn max<N>(tree: &Tree<N>) -> Option<&Entry<N::Key, N::Value>>
where
    N: BinaryNode,
{
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(right_node) = curr.right() {
            curr = right_node;
        }
        curr.entry()
    })
}
