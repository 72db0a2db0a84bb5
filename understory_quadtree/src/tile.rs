// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioned image payloads.
//!
//! Map layers are often cut into pre-rendered image tiles. [`ImageTile`] pairs such an
//! image with its world origin so tiles can be indexed and culled like any other
//! [`SpatialObject`]; the footprint size comes from the image itself.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;

use crate::object::SpatialObject;

/// Anything that knows its pixel dimensions.
pub trait ImageExtent {
    /// Width in pixels.
    fn width(&self) -> i32;

    /// Height in pixels.
    fn height(&self) -> i32;
}

macro_rules! forward_image_extent {
    ($($ty:ty),*) => {
        $(
            impl<I: ImageExtent + ?Sized> ImageExtent for $ty {
                fn width(&self) -> i32 {
                    (**self).width()
                }

                fn height(&self) -> i32 {
                    (**self).height()
                }
            }
        )*
    };
}

// Decoded images are usually shared between tiles.
forward_image_extent!(&I, Box<I>, Rc<I>, Arc<I>);

/// An image placed at an integer world origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageTile<I> {
    x: i32,
    y: i32,
    image: I,
}

impl<I: ImageExtent> ImageTile<I> {
    /// Place `image` with its top-left corner at `(x, y)`.
    ///
    /// Returns `None` when there is no image, so callers can map optional
    /// decode results straight into tiles.
    pub fn of(image: Option<I>, x: i32, y: i32) -> Option<Self> {
        image.map(|image| Self { x, y, image })
    }

    /// The wrapped image.
    pub fn image(&self) -> &I {
        &self.image
    }

    /// Unwrap into the image.
    pub fn into_image(self) -> I {
        self.image
    }
}

impl<I: ImageExtent> SpatialObject for ImageTile<I> {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }

    fn width(&self) -> i32 {
        self.image.width()
    }

    fn height(&self) -> i32 {
        self.image.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    #[derive(Debug, PartialEq, Eq)]
    struct Pixmap {
        w: i32,
        h: i32,
    }

    impl ImageExtent for Pixmap {
        fn width(&self) -> i32 {
            self.w
        }
        fn height(&self) -> i32 {
            self.h
        }
    }

    #[test]
    fn missing_image_yields_no_tile() {
        assert!(ImageTile::<Pixmap>::of(None, 0, 0).is_none());
    }

    #[test]
    fn footprint_comes_from_image() {
        let tile = ImageTile::of(Some(Pixmap { w: 64, h: 32 }), 128, 256).unwrap();
        assert_eq!(tile.footprint(), Rect::new(128, 256, 64, 32));
        assert_eq!(tile.image(), &Pixmap { w: 64, h: 32 });
    }

    #[test]
    fn shared_images_size_every_tile() {
        let shared = Rc::new(Pixmap { w: 16, h: 16 });
        let a = ImageTile::of(Some(Rc::clone(&shared)), 0, 0).unwrap();
        let b = ImageTile::of(Some(Rc::clone(&shared)), 16, 0).unwrap();
        assert_eq!(a.footprint(), Rect::new(0, 0, 16, 16));
        assert_eq!(b.footprint(), Rect::new(16, 0, 16, 16));
        assert_eq!(Rc::strong_count(&a.into_image()), 3);
    }
}
