//! Validation and debugging utilities for AvlTree.
//!
//! This module contains the structural checks (height balance, stored height
//! correctness, BST ordering) and a debugging dump of the node layout.

use std::fmt::Debug;

use crate::types::{AvlTree, Link};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord> AvlTree<K> {
    /// Check the AVL balance property and stored heights at every node.
    ///
    /// Returns false on the first node whose subtree heights differ by more
    /// than one or whose cached height disagrees with its children. An empty
    /// tree is balanced.
    pub fn is_height_balanced(&self) -> bool {
        Self::checked_height(&self.root).is_some()
    }

    /// Check that an in-order walk yields strictly increasing keys.
    ///
    /// Equal neighbours count as a violation. An empty tree passes.
    pub fn is_binary_search_tree(&self) -> bool {
        self.in_order_keys()
            .windows(2)
            .all(|pair| pair[0] < pair[1])
    }

    /// Check if the tree maintains all AVL tree invariants.
    pub fn check_invariants(&self) -> bool {
        self.is_height_balanced() && self.is_binary_search_tree()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String>
    where
        K: Debug,
    {
        Self::check_node_detailed(&self.root)?;

        let keys = self.in_order_keys();
        for (i, pair) in keys.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(format!(
                    "Keys out of order at in-order index {}: {:?} then {:?}",
                    i + 1,
                    pair[0],
                    pair[1]
                ));
            }
        }
        Ok(())
    }

    /// Check invariants, returning a description of the first violation.
    ///
    /// Same checks as [`AvlTree::check_invariants_detailed`]; shorter name
    /// for assertions such as `assert_eq!(tree.validate(), Ok(()))`.
    pub fn validate(&self) -> Result<(), String>
    where
        K: Debug,
    {
        self.check_invariants_detailed()
    }

    /// Recompute the height of `link` from scratch, failing on any node that
    /// is unbalanced or carries a stale cached height.
    fn checked_height(link: &Link<K>) -> Option<usize> {
        let Some(node) = link else {
            return Some(0);
        };
        let left = Self::checked_height(&node.left)?;
        let right = Self::checked_height(&node.right)?;
        let height = 1 + left.max(right);

        (left.abs_diff(right) <= 1 && node.height == height).then_some(height)
    }

    fn check_node_detailed(link: &Link<K>) -> Result<usize, String>
    where
        K: Debug,
    {
        let Some(node) = link else {
            return Ok(0);
        };
        let left = Self::check_node_detailed(&node.left)?;
        let right = Self::check_node_detailed(&node.right)?;
        let height = 1 + left.max(right);

        if left.abs_diff(right) > 1 {
            return Err(format!(
                "Node {:?} is unbalanced: left height {}, right height {}",
                node.key, left, right
            ));
        }
        if node.height != height {
            return Err(format!(
                "Node {:?} has stale height {} (expected {})",
                node.key, node.height, height
            ));
        }
        Ok(height)
    }
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<K> AvlTree<K> {
    /// Indented pre-order dump of the node layout, one node per line with its
    /// cached height and balance factor.
    pub fn structure_string(&self) -> String
    where
        K: Debug,
    {
        let mut out = String::new();
        Self::write_node(&self.root, 0, "root", &mut out);
        out
    }

    fn write_node(link: &Link<K>, depth: usize, side: &str, out: &mut String)
    where
        K: Debug,
    {
        let indent = "  ".repeat(depth);
        let line = match link {
            None => format!("{}{}: <empty>\n", indent, side),
            Some(node) => format!(
                "{}{}: {:?} [height={}, balance={}]\n",
                indent,
                side,
                node.key,
                node.height,
                node.balance_factor()
            ),
        };
        out.push_str(&line);
        if let Some(node) = link {
            if node.left.is_some() || node.right.is_some() {
                Self::write_node(&node.left, depth + 1, "L", out);
                Self::write_node(&node.right, depth + 1, "R", out);
            }
        }
    }
}
