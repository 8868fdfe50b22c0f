use crate::collision::AABB;
use crate::common::BodyError;
use crate::math::vec2::Vec2;
use crate::objects::mass::Mass;
use crate::shapes::Shape;

/// Interface shared by single rigid bodies and composites, as seen by the
/// broad phase and the solver.
pub trait Body {
    /// World position of the body's reference point.
    fn position(&self) -> Vec2;

    fn rotation(&self) -> f64;

    fn linear_velocity(&self) -> Vec2;

    fn mass(&self) -> Mass;

    /// Moment of inertia about the center of mass. Infinite for immovable
    /// bodies.
    fn inertia(&self) -> f64;

    /// Radius of a circle around `position()` enclosing the whole body.
    fn bounding_radius(&self) -> f64;

    /// `None` for bodies without a single convex shape.
    fn shape(&self) -> Option<&Shape>;

    fn aabb(&self) -> AABB;

    /// Changes the body's mass. Implementations decide how the change is
    /// distributed over their internal state.
    fn set_mass(&mut self, value: f64) -> Result<(), BodyError>;

    fn inverse_mass(&self) -> f64 {
        self.mass().inverse()
    }

    fn inverse_inertia(&self) -> f64 {
        let inertia = self.inertia();
        if inertia.is_finite() && inertia > 0.0 {
            1.0 / inertia
        } else {
            0.0
        }
    }

    fn x_min(&self) -> f64 {
        self.aabb().min.x
    }

    fn x_max(&self) -> f64 {
        self.aabb().max.x
    }

    fn y_min(&self) -> f64 {
        self.aabb().min.y
    }

    fn y_max(&self) -> f64 {
        self.aabb().max.y
    }
}
