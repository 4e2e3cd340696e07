//! INSERT operations for AvlTree.
//!
//! Insertion descends by comparison to an empty slot, places a new leaf
//! there, and rebalances every ancestor on the way back up.

use std::cmp::Ordering;

use crate::error::{AvlTreeError, ModifyResult};
use crate::node::rebalance_slot;
use crate::types::{AvlTree, Link, Node};

impl<K: Ord> AvlTree<K> {
    /// Insert a key into the tree.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert. Passing `None` is an absent key.
    ///
    /// # Returns
    ///
    /// `Ok(())` once the key has been placed. `Err(AvlTreeError::InvalidKey)`
    /// for an absent key, `Err(AvlTreeError::DuplicateKey)` if an equal key is
    /// already stored. The tree is unchanged on either error.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{AvlTree, AvlTreeError};
    ///
    /// let mut tree: AvlTree<i32> = AvlTree::new();
    /// assert_eq!(tree.insert(2), Ok(()));
    /// assert_eq!(tree.insert(2), Err(AvlTreeError::DuplicateKey));
    /// assert_eq!(tree.insert(None), Err(AvlTreeError::InvalidKey));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: impl Into<Option<K>>) -> ModifyResult<()> {
        let Some(key) = key.into() else {
            tracing::debug!("rejected insert of absent key");
            return Err(AvlTreeError::InvalidKey);
        };
        Self::insert_recursive(&mut self.root, key)
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Place `key` under `slot`, then rebalance `slot` on the way back up.
    /// Returns before touching anything if the key is a duplicate.
    fn insert_recursive(slot: &mut Link<K>, key: K) -> ModifyResult<()> {
        let Some(node) = slot.as_mut() else {
            tracing::trace!("placing new leaf");
            *slot = Some(Box::new(Node::leaf(key)));
            return Ok(());
        };

        match key.cmp(&node.key) {
            Ordering::Less => Self::insert_recursive(&mut node.left, key)?,
            Ordering::Greater => Self::insert_recursive(&mut node.right, key)?,
            Ordering::Equal => {
                tracing::debug!("rejected duplicate key");
                return Err(AvlTreeError::DuplicateKey);
            }
        }

        rebalance_slot(slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_into_empty_tree_creates_root_leaf() {
        let mut tree: AvlTree<i32> = AvlTree::new();
        tree.insert(1).unwrap();

        let root = tree.root.as_ref().unwrap();
        assert_eq!(root.key, 1);
        assert_eq!(root.height, 1);
        assert!(root.left.is_none() && root.right.is_none());
    }

    #[test]
    fn test_ascending_inserts_rotate_left_at_root() {
        let mut tree: AvlTree<i32> = AvlTree::new();
        for key in [1, 2, 3] {
            tree.insert(key).unwrap();
        }

        let root = tree.root.as_ref().unwrap();
        assert_eq!(root.key, 2);
        assert_eq!(root.left.as_ref().unwrap().key, 1);
        assert_eq!(root.right.as_ref().unwrap().key, 3);
        assert_eq!(root.height, 2);
    }

    #[test]
    fn test_descending_inserts_rotate_right_at_root() {
        let mut tree: AvlTree<i32> = AvlTree::new();
        for key in [3, 2, 1] {
            tree.insert(key).unwrap();
        }

        let root = tree.root.as_ref().unwrap();
        assert_eq!(root.key, 2);
        assert_eq!(root.left.as_ref().unwrap().key, 1);
        assert_eq!(root.right.as_ref().unwrap().key, 3);
    }

    #[test]
    fn test_zigzag_inserts_double_rotate() {
        let mut tree: AvlTree<i32> = AvlTree::new();
        for key in [3, 1, 2] {
            tree.insert(key).unwrap();
        }
        assert_eq!(tree.root.as_ref().unwrap().key, 2);

        let mut tree: AvlTree<i32> = AvlTree::new();
        for key in [1, 3, 2] {
            tree.insert(key).unwrap();
        }
        assert_eq!(tree.root.as_ref().unwrap().key, 2);
    }

    #[test]
    fn test_rotation_below_root_relinks_into_parent() {
        let mut tree: AvlTree<i32> = AvlTree::new();
        // 5 stays the root; 2, 1 unbalance its left child and rotate there.
        for key in [5, 3, 8, 2, 1] {
            tree.insert(key).unwrap();
        }

        let root = tree.root.as_ref().unwrap();
        assert_eq!(root.key, 5);
        let left = root.left.as_ref().unwrap();
        assert_eq!(left.key, 2);
        assert_eq!(left.left.as_ref().unwrap().key, 1);
        assert_eq!(left.right.as_ref().unwrap().key, 3);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_duplicate_leaves_tree_unchanged() {
        let mut tree: AvlTree<i32> = AvlTree::new();
        for key in [4, 2, 6] {
            tree.insert(key).unwrap();
        }
        let before = tree.structure_string();

        assert_eq!(tree.insert(2), Err(AvlTreeError::DuplicateKey));
        assert_eq!(tree.structure_string(), before);
    }

    #[test]
    fn test_absent_key_rejected() {
        let mut tree: AvlTree<i32> = AvlTree::new();
        assert_eq!(tree.insert(None), Err(AvlTreeError::InvalidKey));
        assert!(tree.is_empty());
    }
}
