use avltree::{AvlResultExt, AvlTree, TreeResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_KEYS: [&str; 3] = ["10", "20", "30"];

// Demo driver: inserts keys from the command line (or the defaults), treating
// rejected keys as recoverable.
fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,avltree=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let raw_keys: Vec<&str> = if args.is_empty() {
        DEFAULT_KEYS.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    let mut tree: AvlTree<i64> = AvlTree::new();
    for raw in raw_keys {
        tracing::info!("inserting {}", raw);
        insert_raw(&mut tree, raw).or_default_with_log();
    }

    tracing::info!("in-order: {}", tree.in_order_string());
    tracing::info!("size={}, height={}", tree.len(), tree.height());
    tracing::info!(
        "height balanced: {}, binary search tree: {}",
        tree.is_height_balanced(),
        tree.is_binary_search_tree()
    );
    tracing::debug!("structure:\n{}", tree.structure_string());
}

/// A key that does not parse as an integer is passed on as absent.
fn insert_raw(tree: &mut AvlTree<i64>, raw: &str) -> TreeResult<()> {
    tree.insert(raw.trim().parse::<i64>().ok())
}
