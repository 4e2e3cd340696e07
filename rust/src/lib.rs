//! AVL tree implementation in Rust.
//!
//! This crate provides a height-balanced binary search tree keyed by any
//! totally ordered type, supporting logarithmic insertion, deletion and
//! lookup, an in-order snapshot, and structural self-verification.
//!
//! Absent keys are expressed as `None` at the operation boundary and are
//! rejected with [`AvlTreeError::InvalidKey`]; duplicate inserts are rejected
//! with [`AvlTreeError::DuplicateKey`]. Both errors leave the tree unchanged.

mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod types;
mod validation;

pub use error::{AvlResultExt, AvlTreeError, KeyResult, ModifyResult, TreeResult};
pub use types::AvlTree;

use node::height_of;
use types::Link;

impl<K> AvlTree<K> {
    // ============================================================================
    // OTHER API OPERATIONS
    // ============================================================================

    /// Returns the number of keys in the tree.
    ///
    /// Computed by walking the tree; no counter is kept between operations.
    pub fn len(&self) -> usize {
        Self::len_recursive(&self.root)
    }

    /// Recursively count nodes.
    fn len_recursive(link: &Link<K>) -> usize {
        link.as_ref().map_or(0, |node| {
            1 + Self::len_recursive(&node.left) + Self::len_recursive(&node.right)
        })
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree: 0 when empty, 1 for a single node.
    pub fn height(&self) -> usize {
        height_of(&self.root)
    }

    /// Clear all keys from the tree.
    pub fn clear(&mut self) {
        self.root = None;
    }
}
