//! Self-balancing binary search tree (AVL tree).
//!
//! [`BalancedTree`] is an ordered-key container with logarithmic insert,
//! remove, membership test, min/max, and in-order traversal. Every
//! mutation restores two invariants via rotations:
//!
//! - **BST order** — left subtree strictly less, right subtree strictly
//!   greater; duplicate inserts are no-ops.
//! - **AVL balance** — every node's balance factor
//!   (`height(left) - height(right)`) stays in {-1, 0, 1}.
//!
//! Nodes exclusively own their children through `Option<Box<_>>`; there is
//! no sharing and no parent links, so the tree requires external
//! synchronization for concurrent use.
//!
//! External tooling can watch rebalancing through the rotation observer
//! hook ([`BalancedTree::on_rotation`]) and render the tree through the
//! read-only [`Node`] accessors, without the core depending on any I/O.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | [`Node`] record, height/balance helpers, introspection |
//! | [`util`] | rotations, rebalancing, recursive insert/remove |
//! | [`tree`] | [`BalancedTree`] wrapper, [`EmptyTreeError`], [`Iter`] |
//! | [`print`] | recursive debug dump backing the `Debug` impl |

pub mod node;
pub mod print;
pub mod tree;
pub mod util;

pub use node::Node;
pub use tree::{BalancedTree, EmptyTreeError, Iter};
pub use util::{Rotation, RotationHook};
