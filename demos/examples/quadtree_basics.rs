// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Insert enough objects to force a split, print the tree outline, run a query, and clear.
//!
//! Run:
//! - `RUST_LOG=understory_quadtree=trace cargo run -p understory_demos --example quadtree_basics`

use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{QuadTree, QuadTreeError, Rect};

fn main() -> Result<(), QuadTreeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut tree = QuadTree::new("rect", Rect::new(0, 0, 100, 100))?;

    // Eleven small boxes in the top-left corner push the root past its capacity.
    for i in 0..11 {
        tree.insert(Rect::new(1 + i, 1, 2, 2))?;
    }
    // A straddler that can never leave the root.
    tree.insert(Rect::new(40, 40, 20, 20))?;

    print!("{}", tree.outline());

    let hits = tree.search(0, 0, 20, 20);
    info!(candidates = hits.len(), "search (0, 0, 20, 20)");
    let exact = tree.search_overlapping(Rect::new(0, 0, 20, 20));
    info!(overlapping = exact.len(), "exact overlap (0, 0, 20, 20)");

    tree.clear();
    info!(empty = tree.is_empty(), leaf = tree.is_leaf(), "after clear");
    Ok(())
}
