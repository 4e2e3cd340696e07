//! Node-level primitives for AvlTree.
//!
//! This module contains the height bookkeeping, the single rotations, and the
//! rebalance step that insert and delete apply on every level they unwind
//! through. Everything here is a pure function of a node and its immediate
//! children; nothing reads or writes tree-wide state.

use crate::types::{Link, Node};

// ============================================================================
// HEIGHT PRIMITIVES
// ============================================================================

/// Height of a possibly empty subtree. An empty subtree has height 0.
pub(crate) fn height_of<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

impl<K> Node<K> {
    /// Creates a detached leaf holding `key`.
    pub(crate) fn leaf(key: K) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Recompute the cached height from the children's cached heights.
    /// Must be called after any child link of this node changes.
    pub(crate) fn recompute_height(&mut self) {
        self.height = 1 + height_of(&self.left).max(height_of(&self.right));
    }

    /// Left height minus right height.
    pub(crate) fn balance_factor(&self) -> isize {
        height_of(&self.left) as isize - height_of(&self.right) as isize
    }

    // ============================================================================
    // ROTATIONS
    // ============================================================================

    /// Promote the left child into this node's position.
    ///
    /// The left child's former right subtree becomes this node's left subtree.
    /// Returns the new local root; the caller re-links it. The left child must
    /// be present.
    pub(crate) fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        debug_assert!(self.left.is_some(), "rotate_right requires a left child");
        let Some(mut pivot) = self.left.take() else {
            return self;
        };
        self.left = pivot.right.take();
        self.recompute_height();
        pivot.right = Some(self);
        pivot.recompute_height();
        pivot
    }

    /// Promote the right child into this node's position. Mirror of
    /// [`Node::rotate_right`].
    pub(crate) fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        debug_assert!(self.right.is_some(), "rotate_left requires a right child");
        let Some(mut pivot) = self.right.take() else {
            return self;
        };
        self.right = pivot.left.take();
        self.recompute_height();
        pivot.left = Some(self);
        pivot.recompute_height();
        pivot
    }

    // ============================================================================
    // REBALANCE
    // ============================================================================

    /// Restore the AVL property at this node after one of its subtrees changed.
    ///
    /// The rotation case is chosen from the balance factors of this node and
    /// the heavy child only. Returns the (possibly new) local subtree root.
    pub(crate) fn rebalance(mut self: Box<Self>) -> Box<Self> {
        self.recompute_height();
        let balance = self.balance_factor();

        if balance > 1 {
            if let Some(left) = self.left.take() {
                self.left = Some(if left.balance_factor() < 0 {
                    tracing::trace!("left-right double rotation");
                    left.rotate_left()
                } else {
                    tracing::trace!("left-left single rotation");
                    left
                });
            }
            self.rotate_right()
        } else if balance < -1 {
            if let Some(right) = self.right.take() {
                self.right = Some(if right.balance_factor() > 0 {
                    tracing::trace!("right-left double rotation");
                    right.rotate_right()
                } else {
                    tracing::trace!("right-right single rotation");
                    right
                });
            }
            self.rotate_left()
        } else {
            self
        }
    }

    /// Detach the minimum node of this subtree.
    ///
    /// Returns the minimum key and what remains of the subtree, rebalanced on
    /// every level between the removed node and this one.
    pub(crate) fn take_min(mut self: Box<Self>) -> (K, Link<K>) {
        match self.left.take() {
            None => {
                let Node { key, right, .. } = *self;
                (key, right)
            }
            Some(left) => {
                let (min, rest) = left.take_min();
                self.left = rest;
                (min, Some(self.rebalance()))
            }
        }
    }
}

/// Rebalance the subtree sitting in `slot` in place, re-linking the new root.
pub(crate) fn rebalance_slot<K>(slot: &mut Link<K>) {
    if let Some(node) = slot.take() {
        *slot = Some(node.rebalance());
    }
}
