use crate::binary_tree::{self, BinaryNode};
use crate::entry::Entry;
use crate::red_black_tree::tree;
use std::mem;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A struct representing an internal node of a red black tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub color: Color,
    pub len: usize,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            color: Color::Red,
            len: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node { len, left, right, .. } = self;
        *len = 1 + binary_tree::len(left) + binary_tree::len(right);
    }

    pub fn flip_colors(&mut self) {
        self.color = self.color.flip();
        if let Some(child) = &mut self.left {
            child.color = child.color.flip();
        }
        if let Some(child) = &mut self.right {
            child.color = child.color.flip();
        }
    }

    pub fn rotate_left(&mut self) {
        let mut child = self
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.len = child.len;
        child.update();
        self.left = Some(child);
    }

    pub fn rotate_right(&mut self) {
        let mut child = self
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.len = child.len;
        child.update();
        self.right = Some(child);
    }

    /// Repairs a right-leaning red link, two chained left red links, and a temporary 4-node, in
    /// that order, then refreshes the size of the node.
    pub fn balance(&mut self) {
        if tree::is_red(&self.right) && !tree::is_red(&self.left) {
            self.rotate_left();
        }

        if tree::is_red(&self.left) && tree::is_left_red(&self.left) {
            self.rotate_right();
        }

        if tree::is_red(&self.left) && tree::is_red(&self.right) {
            self.flip_colors();
        }

        self.update();
    }

    // Makes the left child or one of its children red before descending left.
    pub fn move_red_left(&mut self) {
        self.flip_colors();
        if let Some(mut child) = self.right.take() {
            if tree::is_red(&child.left) {
                trace!("red black borrow: rotating red from the right sibling");
                child.rotate_right();
                self.right = Some(child);
                self.rotate_left();
                self.flip_colors();
            } else {
                self.right = Some(child);
            }
        }
    }

    // Makes the right child or one of its children red before descending right.
    pub fn move_red_right(&mut self) {
        self.flip_colors();
        if tree::is_left_red(&self.left) {
            trace!("red black borrow: rotating red from the left sibling");
            self.rotate_right();
            self.flip_colors();
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
