//! Axis-aligned rectangles in playfield space
//!
//! Every collidable entity is a center-origin AABB; no rotation is ever
//! applied for collision purposes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A center-origin axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    /// Half extents on each axis
    pub half: Vec2,
}

impl Rect {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size * 0.5,
        }
    }

    /// Lower-left corner
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    /// Upper-right corner
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    /// AABB overlap test. Touching edges do not count as an intersection.
    pub fn intersects(&self, other: &Rect) -> bool {
        let gap = (self.center - other.center).abs();
        let reach = self.half + other.half;
        gap.x < reach.x && gap.y < reach.y
    }
}
