use crate::binary_tree;
use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = binary_tree::Tree<Node<T, U>>;

pub fn is_red<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(node) => node.color == Color::Red,
    }
}

/// Returns `true` if the root of `tree` has a red left child.
pub fn is_left_red<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(node) => is_red(&node.left),
    }
}

// Licenses the first borrow of a removal by letting the root act as part of a 3-node.
fn redden_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(node) = tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            node.color = Color::Red;
        }
    }
}

fn blacken_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(node) = tree {
        node.color = Color::Black;
    }
}

// precondition: there exists a minimum node in the tree
fn take_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    let mut node = tree.take().expect("Expected a non-empty tree.");
    if node.left.is_none() {
        *tree = node.right.take();
        return node;
    }

    if !is_red(&node.left) && !is_left_red(&node.left) {
        node.move_red_left();
    }

    let ret = take_min(&mut node.left);
    node.balance();
    *tree = Some(node);
    ret
}

// precondition: there exists a maximum node in the tree
fn take_max<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    let mut node = tree.take().expect("Expected a non-empty tree.");
    if is_red(&node.left) {
        node.rotate_right();
    }

    if node.right.is_none() {
        *tree = node.left.take();
        return node;
    }

    if !is_red(&node.right) && !is_left_red(&node.right) {
        node.move_red_right();
    }

    let ret = take_max(&mut node.right);
    node.balance();
    *tree = Some(node);
    ret
}

fn insert_node<T, U>(tree: &mut Tree<T, U>, key: T, value: U) -> Option<U>
where
    T: Ord,
{
    let ret = match tree {
        Some(node) => match key.cmp(&node.entry.key) {
            Ordering::Less => insert_node(&mut node.left, key, value),
            Ordering::Greater => insert_node(&mut node.right, key, value),
            Ordering::Equal => return Some(mem::replace(&mut node.entry.value, value)),
        },
        None => {
            *tree = Some(Box::new(Node::new(key, value)));
            return None;
        },
    };

    if let Some(node) = tree {
        node.balance();
    }
    ret
}

// precondition: `key` exists in the tree
fn remove_node<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut node = tree.take()?;
    let ret;

    if key.cmp(node.entry.key.borrow()) == Ordering::Less {
        if !is_red(&node.left) && !is_left_red(&node.left) {
            node.move_red_left();
        }
        ret = remove_node(&mut node.left, key);
    } else {
        if is_red(&node.left) {
            node.rotate_right();
        }

        if key.cmp(node.entry.key.borrow()) == Ordering::Equal && node.right.is_none() {
            debug_assert!(node.left.is_none());
            let Node { entry, .. } = *node;
            return Some(entry);
        }

        if !is_red(&node.right) && !is_left_red(&node.right) {
            node.move_red_right();
        }

        if key.cmp(node.entry.key.borrow()) == Ordering::Equal {
            // the successor takes the place of the removed entry
            let successor = take_min(&mut node.right);
            let Node { entry, .. } = *successor;
            ret = Some(mem::replace(&mut node.entry, entry));
        } else {
            ret = remove_node(&mut node.right, key);
        }
    }

    node.balance();
    *tree = Some(node);
    ret
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, key: T, value: U) -> Option<U>
where
    T: Ord,
{
    let ret = insert_node(tree, key, value);
    blacken_root(tree);
    ret
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    if binary_tree::get(tree, key).is_none() {
        return None;
    }

    redden_root(tree);
    let ret = remove_node(tree, key);
    blacken_root(tree);
    ret
}

pub fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Option<Entry<T, U>> {
    if tree.is_none() {
        return None;
    }

    redden_root(tree);
    let Node { entry, .. } = *take_min(tree);
    blacken_root(tree);
    Some(entry)
}

pub fn remove_max<T, U>(tree: &mut Tree<T, U>) -> Option<Entry<T, U>> {
    if tree.is_none() {
        return None;
    }

    redden_root(tree);
    let Node { entry, .. } = *take_max(tree);
    blacken_root(tree);
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::{insert, is_red, remove, remove_max, remove_min, Tree};
    use crate::binary_tree::tests::check_ordered_and_sized;
    use crate::red_black_tree::node::Color;
    use rand::{Rng, SeedableRng, XorShiftRng};
    use std::collections::BTreeMap;

    // Returns the number of black nodes on every path from the root of the tree to an empty
    // subtree after checking the left-leaning color rules.
    fn check_colors<T, U>(tree: &Tree<T, U>) -> usize {
        match tree {
            None => 1,
            Some(node) => {
                assert!(!is_red(&node.right), "right-leaning red link");
                if node.color == Color::Red {
                    assert!(!is_red(&node.left), "two red links in a row");
                }
                let left_height = check_colors(&node.left);
                let right_height = check_colors(&node.right);
                assert_eq!(left_height, right_height, "unequal black height");
                match node.color {
                    Color::Black => left_height + 1,
                    Color::Red => left_height,
                }
            },
        }
    }

    fn check<T, U>(tree: &Tree<T, U>) -> usize
    where
        T: Ord + std::fmt::Debug,
    {
        assert!(!is_red(tree), "red root");
        check_colors(tree);
        check_ordered_and_sized(tree)
    }

    #[test]
    fn test_insert_sorted() {
        let mut tree = None;
        for key in 0..256 {
            insert(&mut tree, key, ());
            assert_eq!(check(&tree), key as usize + 1);
        }
    }

    #[test]
    fn test_remove_uses_successor() {
        let mut tree = None;
        for key in &[5, 3, 8, 1, 4, 7, 9] {
            insert(&mut tree, *key, *key);
        }
        let root_key = tree.as_ref().map(|node| node.entry.key);
        assert_eq!(root_key, Some(5));
        assert_eq!(remove(&mut tree, &5).map(|entry| entry.key), Some(5));
        assert_eq!(tree.as_ref().map(|node| node.entry.key), Some(7));
        assert_eq!(check(&tree), 6);
    }

    #[test]
    fn test_remove_missing_leaves_tree_untouched() {
        let mut tree = None;
        for key in 0..10 {
            insert(&mut tree, key * 2, ());
        }
        assert!(remove(&mut tree, &5).is_none());
        assert_eq!(check(&tree), 10);
    }

    #[test]
    fn test_remove_min_max_drain() {
        let mut tree = None;
        for key in 0..200 {
            insert(&mut tree, key, ());
        }
        for key in 0..100 {
            assert_eq!(remove_min(&mut tree).map(|entry| entry.key), Some(key));
            check(&tree);
            assert_eq!(remove_max(&mut tree).map(|entry| entry.key), Some(199 - key));
            check(&tree);
        }
        assert!(tree.is_none());
        assert!(remove_min(&mut tree).is_none());
        assert!(remove_max(&mut tree).is_none());
    }

    #[test]
    fn test_random_operations_keep_invariants() {
        let mut rng: XorShiftRng = SeedableRng::from_seed([1, 4, 1, 4]);
        let mut tree = None;
        let mut expected = BTreeMap::new();

        for _ in 0..5000 {
            let key = rng.gen_range(0, 500u32);
            match rng.gen_range(0, 5) {
                0 | 1 => {
                    let value = rng.next_u32();
                    assert_eq!(insert(&mut tree, key, value), expected.insert(key, value));
                },
                2 => {
                    assert_eq!(
                        remove(&mut tree, &key).map(|entry| (entry.key, entry.value)),
                        expected.remove_entry(&key),
                    );
                },
                3 => {
                    let expected_min = expected.keys().next().cloned();
                    if let Some(min_key) = expected_min {
                        expected.remove(&min_key);
                    }
                    assert_eq!(remove_min(&mut tree).map(|entry| entry.key), expected_min);
                },
                _ => {
                    let expected_max = expected.keys().next_back().cloned();
                    if let Some(max_key) = expected_max {
                        expected.remove(&max_key);
                    }
                    assert_eq!(remove_max(&mut tree).map(|entry| entry.key), expected_max);
                },
            }
            assert_eq!(check(&tree), expected.len());
        }
    }
}
