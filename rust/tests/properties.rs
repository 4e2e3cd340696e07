use avltree::{AvlTree, AvlTreeError};
use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Op {
    Insert(i16),
    Delete(i16),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i16>().prop_map(Op::Insert),
        2 => any::<i16>().prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn prop_invariants_hold_after_every_operation(ops in prop::collection::vec(op_strategy(), 0..300)) {
        let mut tree: AvlTree<i16> = AvlTree::new();
        for op in ops {
            match op {
                Op::Insert(key) => { let _ = tree.insert(key); }
                Op::Delete(key) => tree.delete(&key).unwrap(),
            }
            prop_assert!(tree.is_height_balanced());
            prop_assert!(tree.is_binary_search_tree());
        }
    }

    #[test]
    fn prop_in_order_keys_are_sorted_and_counted(keys in prop::collection::vec(any::<i32>(), 0..500)) {
        let mut tree: AvlTree<i32> = AvlTree::new();
        let mut accepted = 0;
        for &key in &keys {
            if tree.insert(key).is_ok() {
                accepted += 1;
            }
        }

        let in_order = tree.in_order_keys();
        prop_assert_eq!(in_order.len(), accepted);
        prop_assert!(in_order.windows(2).all(|pair| pair[0] < pair[1]));

        let distinct: BTreeSet<i32> = keys.iter().copied().collect();
        prop_assert_eq!(accepted, distinct.len());
    }

    #[test]
    fn prop_insert_then_delete_round_trip(keys in prop::collection::btree_set(any::<u16>(), 1..200), extra in any::<u16>()) {
        let mut tree: AvlTree<u16> = AvlTree::new();
        for &key in &keys {
            tree.insert(key).unwrap();
        }

        let _ = tree.insert(extra);
        prop_assert_eq!(tree.search(&extra), Ok(true));
        tree.delete(&extra).unwrap();
        prop_assert_eq!(tree.search(&extra), Ok(false));
        prop_assert!(tree.check_invariants());
    }

    #[test]
    fn prop_duplicate_insert_leaves_sequence_unchanged(keys in prop::collection::vec(any::<i64>(), 1..200), pick in any::<prop::sample::Index>()) {
        let mut tree: AvlTree<i64> = AvlTree::new();
        for &key in &keys {
            let _ = tree.insert(key);
        }

        let before = tree.in_order_string();
        let existing = keys[pick.index(keys.len())];
        prop_assert_eq!(tree.insert(existing), Err(AvlTreeError::DuplicateKey));
        prop_assert_eq!(tree.in_order_string(), before);
    }

    #[test]
    fn prop_height_within_avl_bound(keys in prop::collection::btree_set(any::<u32>(), 0..2000)) {
        let mut tree: AvlTree<u32> = AvlTree::new();
        for &key in &keys {
            tree.insert(key).unwrap();
        }
        let n = keys.len() as f64;
        prop_assert!(tree.height() as f64 <= 1.44 * (n + 2.0).log2());
    }
}
