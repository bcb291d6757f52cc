use std::fmt;

use thiserror::Error;

use crate::node::{height, Node};
use crate::print::print;
use crate::util::{self, Rotation, RotationHook};

/// Raised by [`BalancedTree::find_min`] and [`BalancedTree::find_max`] on
/// an empty tree. Every other operation is total.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("empty tree")]
pub struct EmptyTreeError;

fn default_comparator<T: PartialOrd>(a: &T, b: &T) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Self-balancing AVL tree over a totally ordered key type.
///
/// Keys are unique; inserting a present key or removing a missing one is a
/// no-op. Every mutation restores the AVL invariant (all balance factors
/// in {-1, 0, 1}) via rotations, so lookups, inserts, and removals are
/// O(log n). Not safe for concurrent mutation without external
/// synchronization; each subtree is exclusively owned by its parent.
pub struct BalancedTree<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    root: Option<Box<Node<T>>>,
    comparator: C,
    hook: Option<RotationHook<T>>,
    len: usize,
}

impl<T> BalancedTree<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T> Default for BalancedTree<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> BalancedTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            hook: None,
            len: 0,
        }
    }

    /// Registers an observer fired with `(rotation kind, pivot key)` each
    /// time a rotation fires. The mutation completes before control
    /// returns to the caller; the hook never re-enters the tree.
    pub fn on_rotation<F>(&mut self, hook: F)
    where
        F: FnMut(Rotation, &T) + 'static,
    {
        self.hook = Some(Box::new(hook));
    }

    /// Inserts `value`, returning false if the key was already present.
    pub fn insert(&mut self, value: T) -> bool {
        let (root, inserted) = util::insert(self.root.take(), value, &self.comparator, &mut self.hook);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes `value`, returning false if the key was absent.
    pub fn remove(&mut self, value: &T) -> bool {
        let (root, removed) = util::remove(self.root.take(), value, &self.comparator, &mut self.hook);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut curr = self.root.as_deref();
        while let Some(node) = curr {
            let cmp = (self.comparator)(value, &node.data);
            if cmp == 0 {
                return true;
            }
            curr = if cmp < 0 {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    /// Smallest key, or [`EmptyTreeError`] if the tree is empty.
    pub fn find_min(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root.as_deref().ok_or(EmptyTreeError)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.data)
    }

    /// Largest key, or [`EmptyTreeError`] if the tree is empty.
    pub fn find_max(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root.as_deref().ok_or(EmptyTreeError)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.data)
    }

    /// Cached height of the root, -1 for an empty tree.
    pub fn height(&self) -> i32 {
        height(self.root.as_deref())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Read-only root access for external tree-shape introspection.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// In-order traversal yielding keys in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    pub fn for_each<F: FnMut(&T)>(&self, mut f: F) {
        for key in self.iter() {
            f(key);
        }
    }

    /// Structural self-check: cached heights, the AVL balance bound,
    /// strict key ordering, and the element count.
    pub fn assert_valid(&self) -> Result<(), String> {
        if let Some(root) = self.root.as_deref() {
            util::validate_heights(root)?;
        }

        let mut prev: Option<&T> = None;
        let mut count = 0usize;
        for key in self.iter() {
            if let Some(prev) = prev {
                if (self.comparator)(prev, key) >= 0 {
                    return Err("Node order violated".to_string());
                }
            }
            prev = Some(key);
            count += 1;
        }
        if count != self.len {
            return Err(format!("Size mismatch: expected {}, counted {count}", self.len));
        }

        Ok(())
    }
}

impl<T, C> fmt::Debug for BalancedTree<T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", print(self.root.as_deref(), ""))
    }
}

/// In-order iterator over the tree, using an explicit stack of the left
/// spine (nodes carry no parent links).
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.data)
    }
}

impl<'a, T, C> IntoIterator for &'a BalancedTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
