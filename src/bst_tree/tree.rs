use crate::binary_tree;
use crate::bst_tree::node::Node;
use crate::entry::Entry;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = binary_tree::Tree<Node<T, U>>;

// Unlinks the node with the minimum key. Sizes along the left spine are adjusted on the way down.
fn take_min<T, U>(tree: &mut Tree<T, U>) -> Option<Box<Node<T, U>>> {
    let mut tree = tree;
    while tree.as_ref().map_or(false, |node| node.left.is_some()) {
        if let Some(node) = tree {
            node.len -= 1;
            tree = &mut node.left;
        }
    }

    let mut node = tree.take()?;
    *tree = node.right.take();
    Some(node)
}

// Unlinks the node with the maximum key. Sizes along the right spine are adjusted on the way down.
fn take_max<T, U>(tree: &mut Tree<T, U>) -> Option<Box<Node<T, U>>> {
    let mut tree = tree;
    while tree.as_ref().map_or(false, |node| node.right.is_some()) {
        if let Some(node) = tree {
            node.len -= 1;
            tree = &mut node.right;
        }
    }

    let mut node = tree.take()?;
    *tree = node.left.take();
    Some(node)
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, key: T, value: U) -> Option<U>
where
    T: Ord,
{
    if let Some(entry) = binary_tree::get_mut(tree, &key) {
        return Some(mem::replace(&mut entry.value, value));
    }

    // the key is new, so every node on the search path gains one descendant
    let mut tree = tree;
    while let Some(node) = tree {
        node.len += 1;
        tree = match key.cmp(&node.entry.key) {
            Ordering::Less => &mut node.left,
            _ => &mut node.right,
        };
    }
    *tree = Some(Box::new(Node::new(key, value)));
    None
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    binary_tree::get(tree, key)?;

    let mut tree = tree;
    while let Some(ordering) = tree.as_ref().map(|node| key.cmp(node.entry.key.borrow())) {
        if ordering == Ordering::Equal {
            break;
        }
        if let Some(node) = tree {
            node.len -= 1;
            tree = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }

    let mut node = tree.take()?;
    if node.left.is_none() || node.right.is_none() {
        let Node { entry, left, right, .. } = *node;
        *tree = left.or(right);
        return Some(entry);
    }

    // the predecessor takes the place of the removed entry
    let Node { entry, .. } = *take_max(&mut node.left)?;
    node.len -= 1;
    let ret = mem::replace(&mut node.entry, entry);
    *tree = Some(node);
    Some(ret)
}

pub fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Option<Entry<T, U>> {
    take_min(tree).map(|node| {
        let Node { entry, .. } = *node;
        entry
    })
}

pub fn remove_max<T, U>(tree: &mut Tree<T, U>) -> Option<Entry<T, U>> {
    take_max(tree).map(|node| {
        let Node { entry, .. } = *node;
        entry
    })
}

// Frees the tree one node at a time, since dropping a boxed chain recurses once per node.
pub fn clear<T, U>(tree: &mut Tree<T, U>) {
    let mut stack: Vec<Box<Node<T, U>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
