//! DELETE operations for AvlTree.
//!
//! This module contains key removal, successor promotion for nodes with two
//! children, and the per-level rebalancing that follows a removal. Unlike
//! insertion, a single deletion may rotate at every ancestor.

use std::cmp::Ordering;

use crate::error::{AvlTreeError, ModifyResult};
use crate::node::rebalance_slot;
use crate::types::{AvlTree, Link};

impl<K: Ord> AvlTree<K> {
    /// Remove a key from the tree.
    ///
    /// Removing a key that is not present is a no-op, not an error.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to remove. Passing `None` is an absent key.
    ///
    /// # Returns
    ///
    /// `Ok(())` whether or not the key was present, or
    /// `Err(AvlTreeError::InvalidKey)` for an absent key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{AvlTree, AvlTreeError};
    ///
    /// let mut tree: AvlTree<i32> = AvlTree::new();
    /// tree.insert(100).unwrap();
    /// tree.delete(&100).unwrap();
    /// assert_eq!(tree.search(&100), Ok(false));
    ///
    /// assert_eq!(tree.delete(&7), Ok(()));
    /// assert_eq!(tree.delete(None), Err(AvlTreeError::InvalidKey));
    /// ```
    pub fn delete<'k>(&mut self, key: impl Into<Option<&'k K>>) -> ModifyResult<()>
    where
        K: 'k,
    {
        let Some(key) = key.into() else {
            tracing::debug!("rejected delete of absent key");
            return Err(AvlTreeError::InvalidKey);
        };

        if !Self::delete_recursive(&mut self.root, key) {
            tracing::debug!("delete missed, key not present");
        }
        Ok(())
    }

    // ============================================================================
    // HELPERS FOR DELETE OPERATIONS
    // ============================================================================

    /// Remove `key` from the subtree in `slot`. Returns whether a node was
    /// removed; every level on the path is rebalanced only when one was.
    fn delete_recursive(slot: &mut Link<K>, key: &K) -> bool {
        let Some(node) = slot.as_mut() else {
            return false;
        };

        let removed = match key.cmp(&node.key) {
            Ordering::Less => Self::delete_recursive(&mut node.left, key),
            Ordering::Greater => Self::delete_recursive(&mut node.right, key),
            Ordering::Equal => {
                Self::unlink_node(slot);
                true
            }
        };

        if removed {
            rebalance_slot(slot);
        }
        removed
    }

    /// Unlink the node sitting in `slot`.
    ///
    /// A node with at most one child is replaced by that child. A node with
    /// two children takes over its in-order successor's key, and the
    /// successor is detached from the right subtree.
    fn unlink_node(slot: &mut Link<K>) {
        let Some(mut node) = slot.take() else {
            return;
        };

        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let (successor, rest) = right.take_min();
                node.key = successor;
                node.left = Some(left);
                node.right = rest;
                Some(node)
            }
        };
        tracing::trace!("unlinked node");
    }
}
