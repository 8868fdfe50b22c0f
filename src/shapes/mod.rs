pub mod circle;
pub mod polygon;

pub use circle::Circle;
pub use polygon::Polygon;

use crate::math::vec2::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometric shape of a single rigid body.
///
/// All quantities are measured in the shape's local frame. Mass-dependent
/// values (inertia) are derived by the body from the unit-density figures
/// reported here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle(circle) => circle.area(),
            Shape::Polygon(polygon) => polygon.calculate_area(),
        }
    }

    /// Center of area in local coordinates.
    pub fn centroid(&self) -> Vec2 {
        match self {
            Shape::Circle(_) => Vec2::ZERO,
            Shape::Polygon(polygon) => polygon.calculate_centroid(),
        }
    }

    /// Second moment of area about the centroid (inertia at unit density).
    /// Zero for degenerate polygons, which behave as point masses.
    pub fn second_moment_of_area(&self) -> f64 {
        match self {
            Shape::Circle(circle) => circle.second_moment_of_area(),
            Shape::Polygon(polygon) => {
                let inertia = polygon.calculate_inertia(Some(1.0));
                if inertia.is_finite() {
                    inertia
                } else {
                    0.0
                }
            }
        }
    }

    /// Radius of the smallest circle about the centroid enclosing the shape.
    pub fn bounding_radius(&self) -> f64 {
        match self {
            Shape::Circle(circle) => circle.radius,
            Shape::Polygon(polygon) => polygon.bounding_radius(),
        }
    }
}
