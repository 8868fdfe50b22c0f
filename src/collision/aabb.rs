// Axis-aligned bounding boxes behind the body extent queries.

use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    /// Builds a box from two corners, normalising so `min <= max` per axis.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        AABB {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Square box enclosing the circle of `radius` around `center`.
    pub fn around_circle(center: Vec2, radius: f64) -> Self {
        let half = Vec2::new(radius, radius);
        AABB::new(center - half, center + half)
    }

    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest.iter().fold((*first, *first), |(min, max), p| {
            (
                Vec2::new(min.x.min(p.x), min.y.min(p.y)),
                Vec2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(AABB { min, max })
    }
}
