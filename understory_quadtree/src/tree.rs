// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region quadtree: structure, insertion, range search, and diagnostics.
//!
//! Every node covers a [`Rect`] and holds the objects that do not fit inside a single
//! child quadrant. Leaves subdivide into four children once they hold more than
//! [`QuadTreeConfig::max_objects`] objects, until [`QuadTreeConfig::max_levels`] is
//! reached. Searches descend into the one quadrant that fully contains the query when
//! there is one, and into all four otherwise, collecting every object held along the
//! way. Results are therefore a superset of the true overlappers; see
//! [`QuadTree::search_overlapping`] for the exact filter.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use tracing::{debug, trace};

use crate::config::{Placement, QuadTreeConfig};
use crate::error::QuadTreeError;
use crate::object::SpatialObject;
use crate::types::{Quadrant, Rect};

/// A node of a region quadtree; the value returned by [`QuadTree::new`] is the root.
///
/// Payloads are stored by value. Store references, [`Rc`](alloc::rc::Rc) or
/// [`Arc`](alloc::sync::Arc) handles when the caller keeps ownership; results are
/// references into the tree, so identity is preserved either way.
pub struct QuadTree<T> {
    tag: &'static str,
    level: u32,
    quadrant: Option<Quadrant>,
    bounds: Rect,
    config: QuadTreeConfig,
    objects: Vec<T>,
    children: Option<Box<[Self; 4]>>,
}

impl<T> QuadTree<T> {
    /// Create an empty root with default limits.
    ///
    /// `tag` labels the payload domain in diagnostics only.
    pub fn new(tag: &'static str, bounds: Rect) -> Result<Self, QuadTreeError> {
        Self::with_config(tag, bounds, QuadTreeConfig::default())
    }

    /// Create an empty root with explicit limits and placement rules.
    pub fn with_config(
        tag: &'static str,
        bounds: Rect,
        config: QuadTreeConfig,
    ) -> Result<Self, QuadTreeError> {
        if bounds.width <= 0 || bounds.height <= 0 {
            return Err(QuadTreeError::DegenerateBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }
        if bounds.x.checked_add(bounds.width).is_none()
            || bounds.y.checked_add(bounds.height).is_none()
        {
            return Err(QuadTreeError::UnrepresentableBounds {
                x: bounds.x,
                y: bounds.y,
                width: bounds.width,
                height: bounds.height,
            });
        }
        Ok(Self::node(tag, 0, None, bounds, config))
    }

    fn node(
        tag: &'static str,
        level: u32,
        quadrant: Option<Quadrant>,
        bounds: Rect,
        config: QuadTreeConfig,
    ) -> Self {
        Self {
            tag,
            level,
            quadrant,
            bounds,
            config,
            objects: Vec::new(),
            children: None,
        }
    }

    /// Diagnostic payload label.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Depth of this node; the root is level 0.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Area covered by this node.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Slot this node occupies in its parent, `None` for the root.
    pub fn quadrant(&self) -> Option<Quadrant> {
        self.quadrant
    }

    /// Limits and placement rules shared by the whole tree.
    pub fn config(&self) -> &QuadTreeConfig {
        &self.config
    }

    /// Objects held at this node, in insertion order.
    pub fn objects(&self) -> &[T] {
        &self.objects
    }

    /// The four children in slot order, or `None` for a leaf.
    pub fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }

    /// The child covering `quadrant`, if this node has subdivided.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children().map(|c| &c[quadrant.index()])
    }

    /// True if this node has not subdivided.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Number of objects in this subtree.
    pub fn len(&self) -> usize {
        self.nodes().map(|n| n.objects.len()).sum()
    }

    /// True if no node in this subtree holds an object.
    pub fn is_empty(&self) -> bool {
        self.nodes().all(|n| n.objects.is_empty())
    }

    /// Deepest level reached in this subtree.
    pub fn depth(&self) -> u32 {
        self.nodes().map(|n| n.level).max().unwrap_or(self.level)
    }

    /// Pre-order walk over this node and all of its descendants.
    ///
    /// Children are visited in slot order (right top, left top, left bottom, right bottom).
    pub fn nodes(&self) -> Nodes<'_, T> {
        let mut stack = Vec::with_capacity(1 + 3 * self.config.max_levels as usize);
        stack.push(self);
        Nodes { stack }
    }

    /// Multi-line rendering of the whole subtree, one [`Display`](fmt::Display) line
    /// per node, indented by level.
    pub fn outline(&self) -> Outline<'_, T> {
        Outline(self)
    }

    /// Empty this subtree, returning every node to a fresh leaf.
    pub fn clear(&mut self) {
        self.objects.clear();
        if let Some(children) = self.children.as_deref_mut() {
            for child in children.iter_mut() {
                child.clear();
            }
        }
        self.children = None;
    }
}

impl<T: SpatialObject> QuadTree<T> {
    /// Insert an object.
    ///
    /// Objects outside the tree bounds are accepted and kept; queries are clamped, the
    /// stored footprints are not. Fails only if the footprint has a negative extent.
    pub fn insert(&mut self, object: T) -> Result<(), QuadTreeError> {
        let footprint = object.footprint();
        if footprint.width < 0 || footprint.height < 0 {
            return Err(QuadTreeError::NegativeExtent {
                width: footprint.width,
                height: footprint.height,
            });
        }
        self.place(object, &footprint);
        Ok(())
    }

    fn place(&mut self, object: T, footprint: &Rect) {
        let target = if self.children.is_some() {
            quadrant_for(&self.bounds, self.config.placement, footprint)
        } else {
            None
        };
        if let (Some(q), Some(children)) = (target, self.children.as_deref_mut()) {
            children[q.index()].place(object, footprint);
            return;
        }

        self.objects.push(object);

        if self.objects.len() > self.config.max_objects && self.can_split() {
            if self.children.is_none() {
                self.split();
            }
            self.rehome();
        }
    }

    fn can_split(&self) -> bool {
        if self.level >= self.config.max_levels {
            return false;
        }
        match self.config.placement {
            Placement::Legacy => true,
            // Halving a 1-unit side puts the midpoint on the origin.
            Placement::Repaired => self.bounds.width >= 2 && self.bounds.height >= 2,
        }
    }

    fn split(&mut self) {
        let level = self.level + 1;
        let [rt, lt, lb, rb] = child_bounds(&self.bounds, self.config.placement);
        self.children = Some(Box::new([
            Self::node(self.tag, level, Some(Quadrant::RightTop), rt, self.config),
            Self::node(self.tag, level, Some(Quadrant::LeftTop), lt, self.config),
            Self::node(self.tag, level, Some(Quadrant::LeftBottom), lb, self.config),
            Self::node(self.tag, level, Some(Quadrant::RightBottom), rb, self.config),
        ]));
        debug!(
            tag = self.tag,
            x = self.bounds.x,
            y = self.bounds.y,
            width = self.bounds.width,
            height = self.bounds.height,
            "split quadtree node at level {}",
            self.level
        );
    }

    /// Push every held object that now fits a single quadrant down into that child.
    fn rehome(&mut self) {
        let Some(children) = self.children.as_deref_mut() else {
            return;
        };
        let held = core::mem::take(&mut self.objects);
        let total = held.len();
        for object in held {
            let footprint = object.footprint();
            match quadrant_for(&self.bounds, self.config.placement, &footprint) {
                Some(q) => children[q.index()].place(object, &footprint),
                None => self.objects.push(object),
            }
        }
        trace!(
            moved = total - self.objects.len(),
            kept = self.objects.len(),
            "rehomed objects from level {}",
            self.level
        );
    }

    /// Every object that may overlap the rectangle `(x, y, width, height)`.
    ///
    /// The result is a superset of the true overlappers: objects held at each visited
    /// node are returned whether or not they touch the query.
    pub fn search(&self, x: i32, y: i32, width: i32, height: i32) -> Vec<&T> {
        let mut out = Vec::new();
        self.search_into(x, y, width, height, &mut out);
        out
    }

    /// Accumulating form of [`search`](Self::search); results are appended to `out`.
    pub fn search_into<'a>(
        &'a self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        out: &mut Vec<&'a T>,
    ) {
        trace!(x, y, width, height, tag = self.tag, "searching quadtree");
        self.collect(Rect::new(x, y, width, height), out);
    }

    /// [`search`](Self::search) with the query given as a [`Rect`].
    pub fn search_rect(&self, query: Rect) -> Vec<&T> {
        self.search(query.x, query.y, query.width, query.height)
    }

    /// Objects whose footprint truly overlaps `query`.
    ///
    /// This is the search superset narrowed with [`Rect::intersects`], the exact cull a
    /// renderer would otherwise do itself.
    pub fn search_overlapping(&self, query: Rect) -> Vec<&T> {
        let mut out = self.search_rect(query);
        out.retain(|o| o.footprint().intersects(&query));
        out
    }

    fn collect<'a>(&'a self, query: Rect, out: &mut Vec<&'a T>) {
        let query = clamp_query(&self.bounds, self.config.placement, query);
        if let Some(children) = self.children.as_deref() {
            match quadrant_for(&self.bounds, self.config.placement, &query) {
                Some(q) => children[q.index()].collect(query, out),
                None => {
                    for child in children {
                        child.collect(query, out);
                    }
                }
            }
        }
        trace!(
            objects = self.objects.len(),
            "returned objects from level {}",
            self.level
        );
        out.extend(self.objects.iter());
    }
}

/// Which single child quadrant fully holds `r`, if any.
fn quadrant_for(bounds: &Rect, placement: Placement, r: &Rect) -> Option<Quadrant> {
    let (x, y) = (i64::from(r.x), i64::from(r.y));
    let (right, bottom) = (x + i64::from(r.width), y + i64::from(r.height));

    let (left, right, top, bottom) = match placement {
        Placement::Legacy => {
            // Midpoints at half-unit precision: compare everything doubled.
            let mx2 = 2 * i64::from(bounds.x) + i64::from(bounds.width);
            let my2 = 2 * i64::from(bounds.y) + i64::from(bounds.height);
            (
                2 * x < mx2 && 2 * right < mx2,
                2 * x > mx2,
                2 * y < my2 && 2 * bottom < my2,
                2 * y > my2,
            )
        }
        Placement::Repaired => {
            let mx = i64::from(bounds.x) + i64::from(bounds.width / 2);
            let my = i64::from(bounds.y) + i64::from(bounds.height / 2);
            (
                x < mx && right <= mx,
                x >= mx,
                y < my && bottom <= my,
                y >= my,
            )
        }
    };

    match (left, right, top, bottom) {
        (true, _, true, _) => Some(Quadrant::LeftTop),
        (true, _, _, true) => Some(Quadrant::LeftBottom),
        (_, true, true, _) => Some(Quadrant::RightTop),
        (_, true, _, true) => Some(Quadrant::RightBottom),
        _ => None,
    }
}

/// Child rectangles in slot order.
fn child_bounds(b: &Rect, placement: Placement) -> [Rect; 4] {
    let (lw, th) = (b.width / 2, b.height / 2);
    let (rw, bh) = match placement {
        Placement::Legacy => (lw, th),
        Placement::Repaired => (b.width - lw, b.height - th),
    };
    [
        Rect::new(b.x + lw, b.y, rw, th),
        Rect::new(b.x, b.y, lw, th),
        Rect::new(b.x, b.y + th, lw, bh),
        Rect::new(b.x + lw, b.y + th, rw, bh),
    ]
}

fn clamp_query(b: &Rect, placement: Placement, q: Rect) -> Rect {
    match placement {
        Placement::Legacy => Rect::new(
            q.x.max(b.x),
            q.y.max(b.y),
            q.width.min(b.width),
            q.height.min(b.height),
        ),
        Placement::Repaired => {
            let (x0, y0) = (q.x.max(b.x), q.y.max(b.y));
            let x1 = q.right().min(b.right());
            let y1 = q.bottom().min(b.bottom());
            Rect::new(
                x0,
                y0,
                x1.saturating_sub(x0).max(0),
                y1.saturating_sub(y0).max(0),
            )
        }
    }
}

/// Pre-order iterator over the nodes of a subtree. See [`QuadTree::nodes`].
pub struct Nodes<'a, T> {
    stack: Vec<&'a QuadTree<T>>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a QuadTree<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(children) = node.children() {
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}

impl<T> fmt::Debug for Nodes<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nodes")
            .field("pending", &self.stack.len())
            .finish()
    }
}

/// Indented rendering of a subtree. See [`QuadTree::outline`].
pub struct Outline<'a, T>(&'a QuadTree<T>);

impl<T> fmt::Display for Outline<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.0.level;
        for node in self.0.nodes() {
            let indent = 2 * (node.level - base) as usize;
            writeln!(f, "{:indent$}{node}", "")?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for Outline<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Outline").field(self.0).finish()
    }
}

impl<T> fmt::Display for QuadTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.objects.len();
        let noun = if count == 1 { "object" } else { "objects" };
        let kind = if self.is_leaf() { "leaf" } else { "branch" };
        match self.quadrant {
            None => write!(f, "{} root ({kind})", self.tag)?,
            Some(q) => write!(f, "{} {kind} ({q})", self.tag)?,
        }
        write!(f, " [level {}, {count} {noun}]", self.level)
    }
}

impl<T> fmt::Debug for QuadTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadTree")
            .field("tag", &self.tag)
            .field("level", &self.level)
            .field("quadrant", &self.quadrant)
            .field("bounds", &self.bounds)
            .field("objects", &self.objects.len())
            .field("subdivided", &self.children.is_some())
            .finish_non_exhaustive()
    }
}
