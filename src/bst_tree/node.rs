use crate::binary_tree::BinaryNode;
use crate::bst_tree::tree;
use crate::entry::Entry;

/// A struct representing an internal node of a binary search tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub len: usize,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            len: 1,
            left: None,
            right: None,
        }
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
