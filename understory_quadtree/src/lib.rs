// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a region quadtree over integer rectangles.
//!
//! Understory Quadtree answers one question quickly: which objects may lie under this
//! rectangle? A renderer builds a tree over its world once per frame (or per edit), asks
//! it for the candidates under the current viewport or visibility region, and culls the
//! short list exactly.
//!
//! - Payloads implement [`SpatialObject`] (integer `x`, `y`, `width`, `height`).
//! - [`QuadTree::insert`] places each object in the deepest node whose quadrant fully holds it.
//! - [`QuadTree::search`] returns a superset of the overlapping objects;
//!   [`QuadTree::search_overlapping`] narrows it to exact overlaps.
//! - [`QuadTree::clear`] drops the whole index for the next frame.
//!
//! There is no removal and no move tracking: footprints must stay put while indexed.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{QuadTree, Rect};
//!
//! let mut tree = QuadTree::new("token", Rect::new(0, 0, 1000, 1000)).unwrap();
//! for i in 0..50 {
//!     tree.insert(Rect::new(i * 20, i * 20, 10, 10)).unwrap();
//! }
//!
//! // Candidates under the viewport, then the exact overlaps.
//! let viewport = Rect::new(0, 0, 100, 100);
//! let candidates = tree.search_rect(viewport);
//! let visible = tree.search_overlapping(viewport);
//! assert!(candidates.len() >= visible.len());
//! assert_eq!(visible.len(), 5);
//! ```
//!
//! ## Limits and placement
//!
//! A leaf subdivides once it holds more than [`DEFAULT_MAX_OBJECTS`] objects, down to
//! [`DEFAULT_MAX_LEVELS`] levels below the root. Both are adjustable with
//! [`QuadTreeConfig`], which also selects the [`Placement`] rules: `Legacy` (the
//! default) keeps long-standing quadrant and clamping behaviour bit for bit, while
//! `Repaired` makes the geometry symmetric and gap-free.
//!
//! ```rust
//! use understory_quadtree::{Placement, QuadTree, QuadTreeConfig, Rect};
//!
//! let config = QuadTreeConfig::default()
//!     .with_max_objects(4)
//!     .with_placement(Placement::Repaired);
//! let mut tree = QuadTree::with_config("tile", Rect::new(0, 0, 255, 255), config).unwrap();
//! for i in 0..16 {
//!     tree.insert(Rect::new((i % 4) * 64, (i / 4) * 64, 63, 63)).unwrap();
//! }
//! assert!(!tree.is_leaf());
//! assert_eq!(tree.search(0, 0, 255, 255).len(), 16);
//! ```
//!
//! ## Viewports
//!
//! Views usually live in floating point. [`Rect::covering`] rounds a [`kurbo::Rect`]
//! outward to the integer rectangle to query with.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod object;
pub mod tile;
pub mod tree;
pub mod types;

pub use config::{DEFAULT_MAX_LEVELS, DEFAULT_MAX_OBJECTS, Placement, QuadTreeConfig};
pub use error::QuadTreeError;
pub use object::SpatialObject;
pub use tile::{ImageExtent, ImageTile};
pub use tree::{Nodes, Outline, QuadTree};
pub use types::{Quadrant, Rect};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;

    #[test]
    fn shared_handles_preserve_identity() {
        let a = Rc::new(Rect::new(10, 10, 5, 5));
        let b = Rc::new(Rect::new(70, 70, 5, 5));
        let mut tree = QuadTree::new("rect", Rect::new(0, 0, 100, 100)).unwrap();
        tree.insert(Rc::clone(&a)).unwrap();
        tree.insert(Rc::clone(&b)).unwrap();
        let found = tree.search(0, 0, 100, 100);
        assert!(found.iter().any(|h| Rc::ptr_eq(h, &a)));
        assert!(found.iter().any(|h| Rc::ptr_eq(h, &b)));
    }

    #[test]
    fn viewport_cull_over_tiles() {
        struct Img(i32);
        impl ImageExtent for Img {
            fn width(&self) -> i32 {
                self.0
            }
            fn height(&self) -> i32 {
                self.0
            }
        }

        let mut tree = QuadTree::new("tile", Rect::new(0, 0, 512, 512)).unwrap();
        for row in 0..8 {
            for col in 0..8 {
                let tile = ImageTile::of(Some(Img(64)), col * 64, row * 64).unwrap();
                tree.insert(tile).unwrap();
            }
        }
        let viewport = Rect::covering(kurbo::Rect::new(10.0, 10.0, 130.5, 70.0));
        let visible: Vec<_> = tree
            .search_overlapping(viewport)
            .into_iter()
            .map(|t| (t.x(), t.y()))
            .collect();
        assert_eq!(visible.len(), 6);
        assert!(visible.contains(&(128, 64)));
        assert!(!visible.contains(&(192, 0)));
    }
}
