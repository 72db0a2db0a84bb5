// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: the integer [`Rect`] and the [`Quadrant`] labels.

use core::fmt;

use crate::error::QuadTreeError;

/// Integer axis-aligned rectangle in world (pixel) coordinates.
///
/// The rectangle covers the half-open region `[x, x + width) × [y, y + height)`.
/// Width and height are expected to be non-negative; use [`Rect::try_new`] when the
/// values come from untrusted input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from origin and size without validation.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle, rejecting negative extents.
    pub const fn try_new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, QuadTreeError> {
        if width < 0 || height < 0 {
            return Err(QuadTreeError::NegativeExtent { width, height });
        }
        Ok(Self::new(x, y, width, height))
    }

    /// Exclusive right edge (`x + width`), saturating at `i32::MAX`.
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge (`y + height`), saturating at `i32::MAX`.
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// True if either extent is zero or negative.
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the two rectangles share any interior area.
    ///
    /// Edges that merely touch do not count, and an empty rectangle never overlaps anything.
    pub fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub fn contains(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Smallest integer rectangle covering a floating-point rectangle.
    ///
    /// The input is normalized and rounded outward, so a viewport expressed in
    /// fractional units never loses its partially covered edge pixels.
    pub fn covering(rect: kurbo::Rect) -> Self {
        let r = rect.abs().expand();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Float to int casts saturate; world coordinates are expected to fit in i32."
        )]
        let (x0, y0, x1, y1) = (r.x0 as i32, r.y0 as i32, r.x1 as i32, r.y1 as i32);
        Self::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }
}

impl From<Rect> for kurbo::Rect {
    fn from(r: Rect) -> Self {
        Self::new(
            f64::from(r.x),
            f64::from(r.y),
            f64::from(r.x) + f64::from(r.width),
            f64::from(r.y) + f64::from(r.height),
        )
    }
}

/// One of the four equal sub-rectangles of a node.
///
/// The discriminants are the child slot indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Top-right quadrant, slot 0.
    RightTop = 0,
    /// Top-left quadrant, slot 1.
    LeftTop = 1,
    /// Bottom-left quadrant, slot 2.
    LeftBottom = 2,
    /// Bottom-right quadrant, slot 3.
    RightBottom = 3,
}

impl Quadrant {
    /// All quadrants in child slot order.
    pub const ALL: [Self; 4] = [
        Self::RightTop,
        Self::LeftTop,
        Self::LeftBottom,
        Self::RightBottom,
    ];

    /// Child slot index.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RightTop => "right top",
            Self::LeftTop => "left top",
            Self::LeftBottom => "left bottom",
            Self::RightBottom => "right bottom",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
