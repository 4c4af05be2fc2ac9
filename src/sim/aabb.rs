//! Axis-aligned bounding box geometry
//!
//! Every collidable entity is a box defined by:
//! - center: position in screen space (origin top-left, +y downward)
//! - half: half-extents (left = center.x - half.x, bottom = center.y + half.y)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Center of the box
    pub center: Vec2,
    /// Half-extents (always positive)
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Left edge x
    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    /// Right edge x
    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    /// Top edge y (smaller y is higher on screen)
    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half.y
    }

    /// Bottom edge y
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Overlap test. Boxes that merely touch edge-to-edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Clamp a center x so a box with these half-extents stays within [min_x, max_x].
    ///
    /// If the box is wider than the span, returns the span midpoint.
    pub fn clamp_center_x(center_x: f32, half_x: f32, min_x: f32, max_x: f32) -> f32 {
        let lo = min_x + half_x;
        let hi = max_x - half_x;
        if lo >= hi {
            (min_x + max_x) / 2.0
        } else {
            center_x.clamp(lo, hi)
        }
    }
}
