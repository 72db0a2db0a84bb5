// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subdivision limits and placement policy.

/// Objects a node may hold before it tries to subdivide.
pub const DEFAULT_MAX_OBJECTS: usize = 10;

/// Deepest level a node may be created at; nodes at this level never subdivide.
pub const DEFAULT_MAX_LEVELS: u32 = 5;

/// Geometry rules used for quadrant selection, query clamping and splitting.
///
/// ## `Legacy`
///
/// Matches the long-standing behaviour bit for bit, including three known quirks:
///
/// - Quadrant fit is asymmetric. A footprint is top (left) only if both its near and far
///   edges lie strictly before the midpoint, but bottom (right) as soon as its origin lies
///   strictly after it. A footprint whose origin sits exactly on a midpoint never
///   descends.
/// - Queries are clamped by raising the origin to the node's origin and capping the extent
///   at the node's full extent, which can overestimate the reachable area near the far
///   edges.
/// - Children get `width / 2` by `height / 2`, so odd dimensions leave a one-unit strip
///   along the right or bottom edge that no child covers.
///
/// Midpoints are compared at half-unit precision, so a node 101 wide splits its fit test
/// at `x + 50.5`.
///
/// ## `Repaired`
///
/// - Quadrant fit is half-open on both axes around an integer midpoint
///   `bounds.x + bounds.width / 2`.
/// - Queries are clamped to their intersection with the node.
/// - Right and bottom children receive the remainder of odd dimensions.
/// - Nodes narrower or shorter than two units never subdivide.
///
/// Both modes return a superset of the true overlappers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Behaviour-parity rules.
    #[default]
    Legacy,
    /// Symmetric, gap-free rules.
    Repaired,
}

/// Tuning knobs shared by every node of one tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuadTreeConfig {
    /// A leaf subdivides once it holds more than this many objects.
    pub max_objects: usize,
    /// Nodes at this level never subdivide.
    pub max_levels: u32,
    /// Geometry rules.
    pub placement: Placement,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_objects: DEFAULT_MAX_OBJECTS,
            max_levels: DEFAULT_MAX_LEVELS,
            placement: Placement::Legacy,
        }
    }
}

impl QuadTreeConfig {
    /// Set the per-node object threshold.
    pub const fn with_max_objects(mut self, max_objects: usize) -> Self {
        self.max_objects = max_objects;
        self
    }

    /// Set the maximum subdivision level.
    pub const fn with_max_levels(mut self, max_levels: u32) -> Self {
        self.max_levels = max_levels;
        self
    }

    /// Set the geometry rules.
    pub const fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_limits() {
        let c = QuadTreeConfig::default();
        assert_eq!(c.max_objects, 10);
        assert_eq!(c.max_levels, 5);
        assert_eq!(c.placement, Placement::Legacy);
    }

    #[test]
    fn builders_override_fields() {
        let c = QuadTreeConfig::default()
            .with_max_objects(2)
            .with_max_levels(8)
            .with_placement(Placement::Repaired);
        assert_eq!(
            c,
            QuadTreeConfig {
                max_objects: 2,
                max_levels: 8,
                placement: Placement::Repaired,
            }
        );
    }
}
