// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for invalid arguments passed to the quadtree.

use thiserror::Error;

/// Errors raised synchronously by tree construction and insertion.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum QuadTreeError {
    /// The bounds handed to a new tree have no area.
    #[error("quadtree bounds must have positive extent, got {width}x{height}")]
    DegenerateBounds {
        /// Offending width.
        width: i32,
        /// Offending height.
        height: i32,
    },

    /// The bounds handed to a new tree reach past `i32::MAX` on the right or bottom.
    #[error("quadtree bounds ({x}, {y}, {width}x{height}) extend past the i32 range")]
    UnrepresentableBounds {
        /// Offending origin x.
        x: i32,
        /// Offending origin y.
        y: i32,
        /// Offending width.
        width: i32,
        /// Offending height.
        height: i32,
    },

    /// An object footprint reported a negative width or height.
    #[error("footprint extent must be non-negative, got {width}x{height}")]
    NegativeExtent {
        /// Offending width.
        width: i32,
        /// Offending height.
        height: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_extent() {
        let e = QuadTreeError::DegenerateBounds {
            width: 0,
            height: 12,
        };
        assert_eq!(
            e.to_string(),
            "quadtree bounds must have positive extent, got 0x12"
        );
        let e = QuadTreeError::UnrepresentableBounds {
            x: 2_147_483_600,
            y: 0,
            width: 100,
            height: 100,
        };
        assert_eq!(
            e.to_string(),
            "quadtree bounds (2147483600, 0, 100x100) extend past the i32 range"
        );
        let e = QuadTreeError::NegativeExtent {
            width: 3,
            height: -1,
        };
        assert_eq!(
            e.to_string(),
            "footprint extent must be non-negative, got 3x-1"
        );
    }
}
