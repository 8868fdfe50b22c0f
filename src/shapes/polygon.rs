use crate::math::vec2::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Convex polygon given by its vertices in local space, wound consistently.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    /// Panics if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Vec2>) -> Self {
        assert!(vertices.len() >= 3, "Polygon must have at least 3 vertices.");
        Polygon { vertices }
    }

    /// Axis-aligned rectangle centered on the local origin.
    pub fn rectangle(width: f64, height: f64) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Polygon::new(vec![
            Vec2::new(-hw, -hh),
            Vec2::new(hw, -hh),
            Vec2::new(hw, hh),
            Vec2::new(-hw, hh),
        ])
    }

    /// Shoelace area. Always non-negative, whatever the winding.
    pub fn calculate_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let twice_area: f64 = (0..n)
            .map(|i| self.vertices[i].cross(self.vertices[(i + 1) % n]))
            .sum();
        (twice_area / 2.0).abs()
    }

    /// Centroid of the enclosed area. Falls back to the vertex mean for
    /// collinear input.
    pub fn calculate_centroid(&self) -> Vec2 {
        let n = self.vertices.len();
        if n < 3 {
            return Vec2::ZERO;
        }
        let origin = self.vertices[0];

        let mut weighted = Vec2::ZERO;
        let mut signed_area_sum = 0.0;
        for i in 1..(n - 1) {
            let v2 = self.vertices[i];
            let v3 = self.vertices[i + 1];
            let signed_area = (v2 - origin).cross(v3 - origin) / 2.0;
            signed_area_sum += signed_area;
            weighted += (origin + v2 + v3) / 3.0 * signed_area;
        }

        if signed_area_sum.abs() < 1e-10 {
            self.vertices.iter().sum::<Vec2>() / n as f64
        } else {
            weighted / signed_area_sum
        }
    }

    // Unit density, about the local origin.
    fn calculate_inertia_about_origin(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let sum: f64 = (0..n)
            .map(|i| {
                let v1 = self.vertices[i];
                let v2 = self.vertices[(i + 1) % n];
                v1.cross(v2) * (v1.magnitude_squared() + v1.dot(v2) + v2.magnitude_squared())
            })
            .sum();
        (sum / 12.0).abs()
    }

    /// Moment of inertia about the centroid for the given density (1.0 if
    /// `None`). Returns `f64::INFINITY` for a non-positive density or a
    /// degenerate polygon.
    pub fn calculate_inertia(&self, density: Option<f64>) -> f64 {
        let density = density.unwrap_or(1.0);
        if density <= 0.0 {
            return f64::INFINITY;
        }

        let area = self.calculate_area();
        if area < 1e-10 {
            return f64::INFINITY;
        }

        let mass = area * density;
        let about_origin = self.calculate_inertia_about_origin() * density;
        let shift = mass * self.calculate_centroid().magnitude_squared();
        (about_origin - shift).max(0.0)
    }

    /// Farthest vertex distance from the centroid.
    pub fn bounding_radius(&self) -> f64 {
        let centroid = self.calculate_centroid();
        self.vertices
            .iter()
            .map(|v| v.distance(centroid))
            .fold(0.0, f64::max)
    }
}
