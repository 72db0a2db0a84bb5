// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport culling for a tiled map with tokens on top.
//!
//! Plays the role of a renderer: index image tiles and tokens once, then for each
//! scroll/zoom step ask the quadtree for candidates and cull them exactly.
//!
//! Run:
//! - `cargo run -p understory_demos --example viewport_cull`

use std::rc::Rc;

use kurbo::{Affine, Rect as ViewRect, Vec2};
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{
    ImageExtent, ImageTile, QuadTree, QuadTreeConfig, QuadTreeError, Rect, SpatialObject,
};

const TILE: i32 = 256;
const MAP_TILES: i32 = 16;

struct Texture {
    size: i32,
}

impl ImageExtent for Texture {
    fn width(&self) -> i32 {
        self.size
    }
    fn height(&self) -> i32 {
        self.size
    }
}

struct Token {
    name: String,
    footprint: Rect,
}

impl SpatialObject for Token {
    fn x(&self) -> i32 {
        self.footprint.x
    }
    fn y(&self) -> i32 {
        self.footprint.y
    }
    fn width(&self) -> i32 {
        self.footprint.width
    }
    fn height(&self) -> i32 {
        self.footprint.height
    }
}

fn main() -> Result<(), QuadTreeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let world = Rect::new(0, 0, TILE * MAP_TILES, TILE * MAP_TILES);

    // Tiles share one texture; the tree borrows nothing and owns cheap handles.
    let texture = Rc::new(Texture { size: TILE });
    let mut tiles = QuadTree::new("tile", world)?;
    for row in 0..MAP_TILES {
        for col in 0..MAP_TILES {
            if let Some(tile) = ImageTile::of(Some(Rc::clone(&texture)), col * TILE, row * TILE)
            {
                tiles.insert(tile)?;
            }
        }
    }

    // Tokens are owned by the scene; the tree only holds references.
    let tokens: Vec<Token> = (0..200)
        .map(|i| Token {
            name: format!("token-{i}"),
            footprint: Rect::new((i * 97) % 4000, (i * 53) % 4000, 50, 50),
        })
        .collect();
    let mut index = QuadTree::with_config("token", world, QuadTreeConfig::default())?;
    for token in &tokens {
        index.insert(token)?;
    }

    let screen = ViewRect::new(0.0, 0.0, 1280.0, 720.0);
    for (scroll, zoom) in [(0.0, 1.0), (900.5, 1.0), (1800.0, 0.5), (3000.25, 2.0)] {
        // Screen to world: undo zoom, then scroll.
        let to_world = Affine::translate(Vec2::new(scroll, scroll)) * Affine::scale(1.0 / zoom);
        let view = Rect::covering(to_world.transform_rect_bbox(screen));

        let tile_candidates = tiles.search_rect(view).len();
        let visible_tiles = tiles.search_overlapping(view).len();
        let visible_tokens: Vec<&str> = index
            .search_overlapping(view)
            .into_iter()
            .map(|t| t.name.as_str())
            .collect();

        info!(
            ?view,
            tile_candidates,
            visible_tiles,
            tokens = visible_tokens.len(),
            "frame at scroll {scroll} zoom {zoom}"
        );
        if let Some(first) = visible_tokens.first() {
            info!("first visible token: {first}");
        }
    }
    Ok(())
}
