//! In-order iterators over any tree made of `BinaryNode`s.

use crate::binary_tree::{BinaryNode, Tree};
use crate::entry::Entry;

/// An owning iterator over a search tree.
///
/// This iterator traverses the elements of the tree in-order and yields owned entries.
pub struct IntoIter<N>
where
    N: BinaryNode,
{
    current: Tree<N>,
    stack: Vec<(Entry<N::Key, N::Value>, Tree<N>)>,
}

impl<N> IntoIter<N>
where
    N: BinaryNode,
{
    pub(crate) fn new(tree: Tree<N>) -> Self {
        IntoIter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<N> Iterator for IntoIter<N>
where
    N: BinaryNode,
{
    type Item = (N::Key, N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current.take() {
            let (entry, left, right) = (*node).into_parts();
            self.current = left;
            self.stack.push((entry, right));
        }
        self.stack.pop().map(|(entry, right)| {
            self.current = right;
            entry.into_pair()
        })
    }
}

impl<N> Drop for IntoIter<N>
where
    N: BinaryNode,
{
    // Draining unlinks the remaining nodes one at a time instead of dropping whole subtrees.
    fn drop(&mut self) {
        while self.next().is_some() {}
    }
}

/// An iterator over a search tree.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct Iter<'a, N>
where
    N: 'a,
{
    current: &'a Tree<N>,
    stack: Vec<&'a N>,
}

impl<'a, N> Iter<'a, N>
where
    N: BinaryNode,
{
    pub(crate) fn new(tree: &'a Tree<N>) -> Self {
        Iter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, N> Iterator for Iter<'a, N>
where
    N: BinaryNode + 'a,
{
    type Item = (&'a N::Key, &'a N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = node.left();
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = node.right();
            let Entry { key, value } = node.entry();
            (key, value)
        })
    }
}

type BorrowedIterEntryMut<'a, N> = (
    &'a mut Entry<<N as BinaryNode>::Key, <N as BinaryNode>::Value>,
    BorrowedTreeMut<'a, N>,
);
type BorrowedTreeMut<'a, N> = Option<&'a mut N>;

/// A mutable iterator over a search tree.
///
/// This iterator traverses the elements of the tree in-order and yields mutable references to the
/// values.
pub struct IterMut<'a, N>
where
    N: BinaryNode + 'a,
{
    current: BorrowedTreeMut<'a, N>,
    stack: Vec<BorrowedIterEntryMut<'a, N>>,
}

impl<'a, N> IterMut<'a, N>
where
    N: BinaryNode,
{
    pub(crate) fn new(tree: &'a mut Tree<N>) -> Self {
        IterMut {
            current: tree.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }
}

impl<'a, N> Iterator for IterMut<'a, N>
where
    N: BinaryNode + 'a,
{
    type Item = (&'a N::Key, &'a mut N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        let IterMut { current, stack } = self;
        while let Some(node) = current.take() {
            let (entry, left, right) = node.parts_mut();
            *current = left.as_mut().map(|node| &mut **node);
            stack.push((entry, right.as_mut().map(|node| &mut **node)));
        }
        stack.pop().map(|(entry, right)| {
            *current = right;
            let Entry { key, value } = entry;
            (&*key, value)
        })
    }
}
