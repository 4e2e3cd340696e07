//! Construction and initialization logic for AvlTree.

use crate::types::AvlTree;

impl<K> AvlTree<K> {
    /// Create an empty AVL tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let tree = AvlTree::<i32>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn new() -> Self {
        Self { root: None }
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}
