//! Core types and data structures for AvlTree.
//!
//! This module contains the tree record and the node record it owns. All
//! per-operation scratch state lives on the call stack of the operation that
//! needs it; nothing here besides the root link survives between calls.

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Owning link to a child subtree. `None` is an empty subtree of height 0.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Height-balanced binary search tree (AVL tree).
///
/// Keys are kept in strictly ascending in-order sequence. After every insert
/// or delete, each node's left and right subtree heights differ by at most
/// one, which bounds lookups, insertions, and deletions to O(log n).
///
/// Duplicate keys are rejected rather than stored.
///
/// # Type Parameters
///
/// * `K` - Key type, must implement `Ord`
///
/// # Examples
///
/// ```
/// use avltree::AvlTree;
///
/// let mut tree: AvlTree<i32> = AvlTree::new();
/// tree.insert(10).unwrap();
/// tree.insert(14).unwrap();
/// tree.insert(8).unwrap();
///
/// assert_eq!(tree.search(&14), Ok(true));
/// assert_eq!(tree.in_order_string(), "8 10 14 ");
/// assert!(tree.is_height_balanced());
/// ```
#[derive(Debug, Clone)]
pub struct AvlTree<K> {
    /// Root of the tree; `None` when empty.
    pub(crate) root: Link<K>,
}

/// A single tree node.
///
/// Children are exclusively owned. `height` caches
/// `1 + max(height(left), height(right))`, with a leaf at height 1.
#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) height: usize,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}
