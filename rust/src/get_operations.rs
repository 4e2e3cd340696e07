//! GET operations for AvlTree.
//!
//! This module contains the read-only lookups: membership search and the
//! minimum/maximum descents.

use std::cmp::Ordering;

use crate::error::{AvlTreeError, KeyResult};
use crate::types::{AvlTree, Link};

impl<K: Ord> AvlTree<K> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Search the tree for a key.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to look up. Passing `None` is an absent key.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the key is stored, `Ok(false)` if not, or
    /// `Err(AvlTreeError::InvalidKey)` for an absent key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{AvlTree, AvlTreeError};
    ///
    /// let mut tree: AvlTree<i32> = AvlTree::new();
    /// tree.insert(100).unwrap();
    /// assert_eq!(tree.search(&100), Ok(true));
    /// assert_eq!(tree.search(&99), Ok(false));
    /// assert_eq!(tree.search(None), Err(AvlTreeError::InvalidKey));
    /// ```
    pub fn search<'k>(&self, key: impl Into<Option<&'k K>>) -> KeyResult<bool>
    where
        K: 'k,
    {
        match key.into() {
            Some(key) => Ok(self.contains(key)),
            None => {
                tracing::debug!("rejected search for absent key");
                Err(AvlTreeError::InvalidKey)
            }
        }
    }

    /// Check if key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let mut tree: AvlTree<i32> = AvlTree::new();
    /// tree.insert(1).unwrap();
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        let mut current: &Link<K> = &self.root;
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Returns the smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Returns the largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }
}
