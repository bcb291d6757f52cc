//! Rotation and rebalancing primitives.
//!
//! All functions here take an owned subtree root and return the new root
//! after any needed rotation. Dispatch is top-down, repair bottom-up: the
//! callers recompute heights and rebalance on the unwind path.

use crate::node::{balance, height, Node};

/// Kind of rotation reported to a [`RotationHook`].
///
/// Composite rotations report themselves first and then their two
/// constituent single rotations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
    LeftRight,
    RightLeft,
}

/// Observer invoked with the rotation kind and the pivot key (the key at
/// the pre-rotation subtree root) each time a rotation fires.
pub type RotationHook<T> = Box<dyn FnMut(Rotation, &T)>;

fn notify<T>(hook: &mut Option<RotationHook<T>>, kind: Rotation, pivot: &T) {
    if let Some(f) = hook {
        f(kind, pivot);
    }
}

/// Single left rotation. `k1.right` becomes the new subtree root.
pub(crate) fn rotate_left<T>(mut k1: Box<Node<T>>, hook: &mut Option<RotationHook<T>>) -> Box<Node<T>> {
    notify(hook, Rotation::Left, &k1.data);
    let mut k2 = k1.right.take().expect("right child exists");
    k1.right = k2.left.take();
    k1.update_height();
    k2.left = Some(k1);
    k2.update_height();
    k2
}

/// Single right rotation. `k2.left` becomes the new subtree root.
pub(crate) fn rotate_right<T>(mut k2: Box<Node<T>>, hook: &mut Option<RotationHook<T>>) -> Box<Node<T>> {
    notify(hook, Rotation::Right, &k2.data);
    let mut k1 = k2.left.take().expect("left child exists");
    k2.left = k1.right.take();
    k2.update_height();
    k1.right = Some(k2);
    k1.update_height();
    k1
}

fn rotate_left_right<T>(mut n: Box<Node<T>>, hook: &mut Option<RotationHook<T>>) -> Box<Node<T>> {
    notify(hook, Rotation::LeftRight, &n.data);
    let left = n.left.take().expect("left child exists");
    n.left = Some(rotate_left(left, hook));
    rotate_right(n, hook)
}

fn rotate_right_left<T>(mut n: Box<Node<T>>, hook: &mut Option<RotationHook<T>>) -> Box<Node<T>> {
    notify(hook, Rotation::RightLeft, &n.data);
    let right = n.right.take().expect("right child exists");
    n.right = Some(rotate_right(right, hook));
    rotate_left(n, hook)
}

/// Restores the AVL invariant at `node` after a height change.
///
/// Tie-breaks are the standard AVL policy: a left-heavy node whose left
/// child has balance factor >= 0 takes a single right rotation, and the
/// mirror for the right-heavy side. One rotation suffices after insert;
/// removal may rebalance at every ancestor on the unwind path.
pub(crate) fn rebalance<T>(node: Box<Node<T>>, hook: &mut Option<RotationHook<T>>) -> Box<Node<T>> {
    let bf = node.balance_factor();
    if bf > 1 {
        if balance(node.left.as_deref()) >= 0 {
            rotate_right(node, hook)
        } else {
            rotate_left_right(node, hook)
        }
    } else if bf < -1 {
        if balance(node.right.as_deref()) <= 0 {
            rotate_left(node, hook)
        } else {
            rotate_right_left(node, hook)
        }
    } else {
        node
    }
}

/// Inserts `value` into the subtree, returning the new root and whether a
/// node was created. Inserting an already present key is a no-op.
pub(crate) fn insert<T, C>(
    node: Option<Box<Node<T>>>,
    value: T,
    comparator: &C,
    hook: &mut Option<RotationHook<T>>,
) -> (Box<Node<T>>, bool)
where
    C: Fn(&T, &T) -> i32,
{
    let Some(mut node) = node else {
        return (Box::new(Node::new(value)), true);
    };

    let cmp = comparator(&value, &node.data);
    if cmp == 0 {
        return (node, false);
    }

    let inserted;
    if cmp < 0 {
        let (left, hit) = insert(node.left.take(), value, comparator, hook);
        node.left = Some(left);
        inserted = hit;
    } else {
        let (right, hit) = insert(node.right.take(), value, comparator, hook);
        node.right = Some(right);
        inserted = hit;
    }

    node.update_height();
    (rebalance(node, hook), inserted)
}

/// Removes `value` from the subtree, returning the new root and whether a
/// node was removed. Removing a missing key is a no-op.
///
/// The two-child case overwrites the node's value with its in-order
/// successor (minimum of the right subtree) and structurally deletes the
/// successor node instead. The one-child case returns the surviving child
/// as-is: the child subtree is untouched, so only ancestors rebalance.
pub(crate) fn remove<T, C>(
    node: Option<Box<Node<T>>>,
    value: &T,
    comparator: &C,
    hook: &mut Option<RotationHook<T>>,
) -> (Option<Box<Node<T>>>, bool)
where
    C: Fn(&T, &T) -> i32,
{
    let Some(mut node) = node else {
        return (None, false);
    };

    let cmp = comparator(value, &node.data);
    if cmp != 0 {
        let removed;
        if cmp < 0 {
            let (left, hit) = remove(node.left.take(), value, comparator, hook);
            node.left = left;
            removed = hit;
        } else {
            let (right, hit) = remove(node.right.take(), value, comparator, hook);
            node.right = right;
            removed = hit;
        }
        node.update_height();
        return (Some(rebalance(node, hook)), removed);
    }

    match (node.left.take(), node.right.take()) {
        (None, None) => (None, true),
        (Some(child), None) | (None, Some(child)) => (Some(child), true),
        (left, Some(right)) => {
            let (right, successor) = remove_min(right, hook);
            node.data = successor.data;
            node.left = left;
            node.right = right;
            node.update_height();
            (Some(rebalance(node, hook)), true)
        }
    }
}

/// Unlinks the leftmost node of the subtree, rebalancing the unwind path,
/// and returns `(new root, unlinked node)`.
fn remove_min<T>(
    mut node: Box<Node<T>>,
    hook: &mut Option<RotationHook<T>>,
) -> (Option<Box<Node<T>>>, Box<Node<T>>) {
    let Some(left) = node.left.take() else {
        let right = node.right.take();
        return (right, node);
    };

    let (left, min) = remove_min(left, hook);
    node.left = left;
    node.update_height();
    (Some(rebalance(node, hook)), min)
}

/// Validates cached heights and the AVL balance bound for every node,
/// returning the first violation found.
pub(crate) fn validate_heights<T>(node: &Node<T>) -> Result<(), String> {
    if let Some(left) = node.left.as_deref() {
        validate_heights(left)?;
    }
    if let Some(right) = node.right.as_deref() {
        validate_heights(right)?;
    }

    let expected = 1 + height(node.left.as_deref()).max(height(node.right.as_deref()));
    if node.height != expected {
        return Err(format!(
            "Height cache mismatch: expected {expected}, got {}",
            node.height
        ));
    }
    if !(-1..=1).contains(&node.balance_factor()) {
        return Err("AVL balance violated".to_string());
    }

    Ok(())
}
