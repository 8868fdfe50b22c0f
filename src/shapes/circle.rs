use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        assert!(radius >= 0.0, "Circle radius cannot be negative");
        Self { radius }
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Polar second moment of area about the center, `pi r^4 / 2`.
    pub fn second_moment_of_area(&self) -> f64 {
        0.5 * self.area() * self.radius * self.radius
    }
}
