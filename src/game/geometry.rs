//! Axis-aligned collision helpers
//!
//! Everything here works one axis at a time. The ball is treated as its
//! bounding square, so a ball near a rectangle corner can register a hit
//! even though the circle itself does not touch it.

use glam::Vec2;

/// Axis-aligned rectangle in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }
}

/// 1-D overlap of `[center - half, center + half]` with `[min, max]`, edges inclusive
pub fn spans_overlap(center: f32, half_extent: f32, min: f32, max: f32) -> bool {
    center + half_extent >= min && center - half_extent <= max
}

/// Circle-vs-rectangle test using separate axis checks (no corner distance)
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Aabb) -> bool {
    spans_overlap(center.x, radius, rect.min.x, rect.max.x)
        && spans_overlap(center.y, radius, rect.min.y, rect.max.y)
}

/// Ball coming at the rectangle from above or below: centre inside the x span,
/// vertical extent touching the y span.
pub fn vertical_approach(center: Vec2, radius: f32, rect: &Aabb) -> bool {
    spans_overlap(center.x, 0.0, rect.min.x, rect.max.x)
        && spans_overlap(center.y, radius, rect.min.y, rect.max.y)
}

/// Ball coming at the rectangle from the side: centre inside the y span,
/// horizontal extent touching the x span.
pub fn horizontal_approach(center: Vec2, radius: f32, rect: &Aabb) -> bool {
    spans_overlap(center.y, 0.0, rect.min.y, rect.max.y)
        && spans_overlap(center.x, radius, rect.min.x, rect.max.x)
}

/// Elastic reflection of a single velocity component
pub fn reflect(component: f32) -> f32 {
    -component
}
