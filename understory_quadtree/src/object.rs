// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`SpatialObject`] capability that tree payloads provide.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;

use crate::types::Rect;

/// A value with an integer, axis-aligned footprint in world space.
///
/// The footprint must stay fixed while the value lives in a
/// [`QuadTree`](crate::QuadTree); the tree does not observe moves.
///
/// Implemented for references and shared handles of any implementor, so a tree can
/// index objects it does not own:
///
/// ```
/// use understory_quadtree::{QuadTree, Rect};
///
/// let sprites = [Rect::new(10, 10, 5, 5), Rect::new(70, 70, 5, 5)];
/// let mut tree = QuadTree::new("sprite", Rect::new(0, 0, 100, 100)).unwrap();
/// for s in &sprites {
///     tree.insert(s).unwrap();
/// }
/// assert_eq!(tree.len(), 2);
/// ```
pub trait SpatialObject {
    /// Left edge of the footprint.
    fn x(&self) -> i32;

    /// Top edge of the footprint.
    fn y(&self) -> i32;

    /// Horizontal extent; expected to be non-negative.
    fn width(&self) -> i32;

    /// Vertical extent; expected to be non-negative.
    fn height(&self) -> i32;

    /// The footprint as a [`Rect`].
    fn footprint(&self) -> Rect {
        Rect::new(self.x(), self.y(), self.width(), self.height())
    }
}

impl SpatialObject for Rect {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn footprint(&self) -> Rect {
        *self
    }
}

macro_rules! forward_spatial_object {
    ($($ty:ty),*) => {
        $(
            impl<T: SpatialObject + ?Sized> SpatialObject for $ty {
                #[inline]
                fn x(&self) -> i32 {
                    (**self).x()
                }

                #[inline]
                fn y(&self) -> i32 {
                    (**self).y()
                }

                #[inline]
                fn width(&self) -> i32 {
                    (**self).width()
                }

                #[inline]
                fn height(&self) -> i32 {
                    (**self).height()
                }

                #[inline]
                fn footprint(&self) -> Rect {
                    (**self).footprint()
                }
            }
        )*
    };
}

forward_spatial_object!(&T, Box<T>, Rc<T>, Arc<T>);
