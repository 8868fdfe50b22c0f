use crate::common::BodyError;
use crate::math::vec2::Vec2;
use crate::objects::mass::is_valid_finite_mass;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Construction parameters for a [`CompositeBody`](crate::CompositeBody).
///
/// `density` and `inertia` exist so scene descriptions that carry them
/// are rejected loudly instead of being silently ignored: a composite's
/// density lives on its members and its inertia is always derived.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CompositeOptions {
    /// Reference point of the composite, and center of its bounding circle.
    pub position: Vec2,
    pub velocity: Vec2,
    /// Added to every member's rotation.
    pub angle: f64,
    /// Rescales the members so their masses add up to this value.
    pub mass: Option<f64>,
    pub density: Option<f64>,
    /// Only `+inf` is accepted, and only for immovable composites.
    pub inertia: Option<f64>,
}

impl CompositeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn moving(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn rotated(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    pub fn with_inertia(mut self, inertia: f64) -> Self {
        self.inertia = Some(inertia);
        self
    }

    /// Checks the overrides that can be rejected without looking at the
    /// members.
    pub(crate) fn check_overrides(&self) -> Result<(), BodyError> {
        if self.density.is_some() {
            return Err(BodyError::DensityOverride);
        }
        if let Some(inertia) = self.inertia {
            if inertia != f64::INFINITY {
                return Err(BodyError::InertiaOverride(inertia));
            }
        }
        if let Some(mass) = self.mass {
            if mass != f64::INFINITY && !is_valid_finite_mass(mass) {
                return Err(BodyError::InvalidMass(mass));
            }
        }
        Ok(())
    }
}
