//! Node record for the AVL tree.
//!
//! Each node exclusively owns its children through `Option<Box<_>>`; there
//! are no parent or back links. The `height` field is a cache: an absent
//! subtree has height −1, a leaf has height 0, and every structural change
//! restores `height == 1 + max(height(left), height(right))` bottom-up on
//! the modified path.

/// A single tree node holding one key.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
    pub(crate) height: i32,
}

impl<T> Node<T> {
    pub(crate) fn new(data: T) -> Self {
        Self {
            data,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &T {
        &self.data
    }

    /// Cached subtree height. O(1), never recomputed from scratch.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `height(left) - height(right)`, in {-1, 0, 1} for a balanced tree.
    pub fn balance_factor(&self) -> i32 {
        height(self.left.as_deref()) - height(self.right.as_deref())
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(self.left.as_deref()).max(height(self.right.as_deref()));
    }
}

/// Height of a possibly absent subtree.
pub(crate) fn height<T>(node: Option<&Node<T>>) -> i32 {
    node.map_or(-1, |n| n.height)
}

/// Balance factor of a possibly absent subtree.
pub(crate) fn balance<T>(node: Option<&Node<T>>) -> i32 {
    node.map_or(0, Node::balance_factor)
}
