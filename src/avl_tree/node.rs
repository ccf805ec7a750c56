use crate::avl_tree::tree;
use crate::binary_tree::{self, BinaryNode};
use crate::entry::Entry;
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub height: usize,
    pub len: usize,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            height: 1,
            len: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node {
            height,
            len,
            left,
            right,
            ..
        } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
        *len = binary_tree::len(left) + binary_tree::len(right) + 1;
    }

    pub fn balance(&self) -> i32 {
        (tree::height(&self.left) as i32) - (tree::height(&self.right) as i32)
    }
}

impl<T, U> BinaryNode for Node<T, U> {
    type Key = T;
    type Value = U;

    fn entry(&self) -> &Entry<T, U> {
        &self.entry
    }

    fn left(&self) -> &tree::Tree<T, U> {
        &self.left
    }

    fn right(&self) -> &tree::Tree<T, U> {
        &self.right
    }

    fn parts_mut(&mut self) -> (&mut Entry<T, U>, &mut tree::Tree<T, U>, &mut tree::Tree<T, U>) {
        let Node { entry, left, right, .. } = self;
        (entry, left, right)
    }

    fn into_parts(self) -> (Entry<T, U>, tree::Tree<T, U>, tree::Tree<T, U>) {
        let Node { entry, left, right, .. } = self;
        (entry, left, right)
    }

    fn len(&self) -> usize {
        self.len
    }
}
