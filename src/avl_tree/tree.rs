use crate::avl_tree::node::Node;
use crate::binary_tree;
use crate::entry::Entry;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = binary_tree::Tree<Node<T, U>>;

pub fn height<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        None => 0,
        Some(node) => node.height,
    }
}

// Lifts the right child of `node` into its place. The demoted node is refreshed before the lifted
// child, because the child's height and size are computed from it.
fn rotate_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = node
        .right
        .take()
        .expect("Expected right child node to be `Some`.");
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

// Mirror image of `rotate_left`.
fn rotate_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = node
        .left
        .take()
        .expect("Expected left child node to be `Some`.");
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Restores the height invariant at the root of `tree`, assuming both of its subtrees already
// satisfy it and differ in height by at most two. Heights and sizes are accurate afterwards.
fn balance<T, U>(tree: &mut Tree<T, U>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };
    node.update();

    let factor = node.balance();
    let node = if factor > 1 {
        if node.left.as_ref().map_or(false, |child| child.balance() < 0) {
            trace!("avl rebalance: left-right case");
            node.left = node.left.take().map(rotate_left);
        } else {
            trace!("avl rebalance: left-left case");
        }
        rotate_right(node)
    } else if factor < -1 {
        if node.right.as_ref().map_or(false, |child| child.balance() > 0) {
            trace!("avl rebalance: right-left case");
            node.right = node.right.take().map(rotate_right);
        } else {
            trace!("avl rebalance: right-right case");
        }
        rotate_left(node)
    } else {
        node
    };

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn take_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    if let Some(node) = tree {
        if node.left.is_some() {
            let ret = take_min(&mut node.left);
            balance(tree);
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

// precondition: there exists a maximum node in the tree
fn take_max<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    if let Some(node) = tree {
        if node.right.is_some() {
            let ret = take_max(&mut node.right);
            balance(tree);
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.left.take();
    node
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, key: T, value: U) -> Option<U>
where
    T: Ord,
{
    let ret = match tree {
        Some(node) => match key.cmp(&node.entry.key) {
            Ordering::Less => insert(&mut node.left, key, value),
            Ordering::Greater => insert(&mut node.right, key, value),
            Ordering::Equal => return Some(mem::replace(&mut node.entry.value, value)),
        },
        None => {
            *tree = Some(Box::new(Node::new(key, value)));
            return None;
        },
    };

    balance(tree);
    ret
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut node = tree.take()?;
    let ret = match key.cmp(node.entry.key.borrow()) {
        Ordering::Less => remove(&mut node.left, key),
        Ordering::Greater => remove(&mut node.right, key),
        Ordering::Equal => {
            if node.left.is_none() || node.right.is_none() {
                let Node { entry, left, right, .. } = *node;
                *tree = left.or(right);
                return Some(entry);
            }

            // the predecessor takes the place of the removed entry
            let predecessor = take_max(&mut node.left);
            let Node { entry, .. } = *predecessor;
            Some(mem::replace(&mut node.entry, entry))
        },
    };

    *tree = Some(node);
    balance(tree);
    ret
}

pub fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Option<Entry<T, U>> {
    if tree.is_none() {
        return None;
    }
    let Node { entry, .. } = *take_min(tree);
    Some(entry)
}

pub fn remove_max<T, U>(tree: &mut Tree<T, U>) -> Option<Entry<T, U>> {
    if tree.is_none() {
        return None;
    }
    let Node { entry, .. } = *take_max(tree);
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::{height, insert, remove, remove_max, remove_min, Tree};
    use crate::binary_tree::tests::check_ordered_and_sized;
    use rand::{Rng, SeedableRng, XorShiftRng};
    use std::cmp;
    use std::collections::BTreeMap;

    // Returns the height of the tree after checking every cached height and balance factor.
    fn check_balanced<T, U>(tree: &Tree<T, U>) -> usize {
        match tree {
            None => 0,
            Some(node) => {
                let left_height = check_balanced(&node.left);
                let right_height = check_balanced(&node.right);
                assert!((left_height as i64 - right_height as i64).abs() <= 1);
                assert_eq!(node.height, cmp::max(left_height, right_height) + 1);
                node.height
            },
        }
    }

    #[test]
    fn test_leaf_height() {
        let mut tree = None;
        assert_eq!(height(&tree), 0);
        insert(&mut tree, 1, ());
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_sorted_inserts_stay_logarithmic() {
        let mut tree = None;
        for key in 0..1023 {
            insert(&mut tree, key, ());
            check_balanced(&tree);
        }
        assert_eq!(height(&tree), 10);
        assert_eq!(check_ordered_and_sized(&tree), 1023);
    }

    #[test]
    fn test_double_rotation_cases() {
        let mut left_right = None;
        for key in &[3, 1, 2] {
            insert(&mut left_right, *key, ());
        }
        assert_eq!(left_right.as_ref().map(|node| node.entry.key), Some(2));
        assert_eq!(check_balanced(&left_right), 2);

        let mut right_left = None;
        for key in &[1, 3, 2] {
            insert(&mut right_left, *key, ());
        }
        assert_eq!(right_left.as_ref().map(|node| node.entry.key), Some(2));
        assert_eq!(check_balanced(&right_left), 2);
    }

    #[test]
    fn test_rotations_carry_sizes() {
        for keys in &[[1, 2, 3], [3, 2, 1], [3, 1, 2], [1, 3, 2]] {
            let mut tree = None;
            for key in keys {
                insert(&mut tree, *key, ());
            }
            let node = tree.as_ref().expect("Expected a non-empty tree.");
            assert_eq!((node.entry.key, node.len, node.height), (2, 3, 2));
            let child_lens = (
                node.left.as_ref().map(|child| child.len),
                node.right.as_ref().map(|child| child.len),
            );
            assert_eq!(child_lens, (Some(1), Some(1)));
        }
    }

    #[test]
    fn test_remove_min_max_rebalance() {
        let mut tree = None;
        for key in 0..100 {
            insert(&mut tree, key, key);
        }
        for key in 0..40 {
            assert_eq!(remove_min(&mut tree).map(|entry| entry.key), Some(key));
            check_balanced(&tree);
        }
        for key in (60..100).rev() {
            assert_eq!(remove_max(&mut tree).map(|entry| entry.key), Some(key));
            check_balanced(&tree);
        }
        assert_eq!(check_ordered_and_sized(&tree), 20);
    }

    #[test]
    fn test_random_operations_keep_invariants() {
        let mut rng: XorShiftRng = SeedableRng::from_seed([2, 7, 1, 8]);
        let mut tree = None;
        let mut expected = BTreeMap::new();

        for _ in 0..5000 {
            let key = rng.gen_range(0, 500u32);
            match rng.gen_range(0, 4) {
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
                _ => {
                    let expected_min = expected.keys().next().cloned();
                    if let Some(min_key) = expected_min {
                        expected.remove(&min_key);
                    }
                    assert_eq!(remove_min(&mut tree).map(|entry| entry.key), expected_min);
                },
            }
            check_balanced(&tree);
            assert_eq!(check_ordered_and_sized(&tree), expected.len());
        }
    }
}
