//! In-order traversal for AvlTree.
//!
//! Every call performs its own fresh walk; no cursor is kept between calls.

use std::fmt::Display;

use crate::types::{AvlTree, Link};

impl<K> AvlTree<K> {
    /// Returns all keys in ascending order as a snapshot.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let mut tree: AvlTree<i32> = AvlTree::new();
    /// for key in [3, 1, 2] {
    ///     tree.insert(key).unwrap();
    /// }
    /// assert_eq!(tree.in_order_keys(), vec![&1, &2, &3]);
    /// ```
    pub fn in_order_keys(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        Self::collect_in_order(&self.root, &mut keys);
        keys
    }

    /// Returns the keys in ascending order, each followed by a single space.
    ///
    /// An empty tree yields an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let mut tree: AvlTree<i32> = AvlTree::new();
    /// for key in [10, 14, 8] {
    ///     tree.insert(key).unwrap();
    /// }
    /// assert_eq!(tree.in_order_string(), "8 10 14 ");
    /// ```
    pub fn in_order_string(&self) -> String
    where
        K: Display,
    {
        let mut out = String::new();
        for key in self.in_order_keys() {
            out.push_str(&format!("{} ", key));
        }
        out
    }

    fn collect_in_order<'a>(link: &'a Link<K>, keys: &mut Vec<&'a K>) {
        if let Some(node) = link {
            Self::collect_in_order(&node.left, keys);
            keys.push(&node.key);
            Self::collect_in_order(&node.right, keys);
        }
    }
}
