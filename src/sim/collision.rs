//! Axis-aligned collision primitives
//!
//! Everything in the play field is either a circle (balls) or an
//! axis-aligned rectangle (paddle, bricks, pickup boxes), so two overlap
//! tests cover all of it. Both treat touching edges as overlapping:
//! bricks and the paddle must register a hit at first contact.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height, both non-negative
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Circle vs rectangle overlap, inclusive bounds
///
/// Standard closest-point test: clamp the circle center into the
/// rectangle and compare the remaining distance against the radius.
#[inline]
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = center.clamp(rect.pos, rect.max());
    (center - closest).length_squared() <= radius * radius
}

/// Rectangle vs rectangle overlap, inclusive bounds
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    let a_max = a.max();
    let b_max = b.max();
    a.pos.x <= b_max.x && b.pos.x <= a_max.x && a.pos.y <= b_max.y && b.pos.y <= a_max.y
}
