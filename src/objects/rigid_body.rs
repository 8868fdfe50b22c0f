use crate::collision::AABB;
use crate::common::BodyError;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::objects::mass::{is_valid_finite_mass, Mass};
use crate::shapes::Shape;

#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    // Geometry
    pub shape: Shape,
    pub local_center_of_mass: Vec2, // Offset from the shape's origin to its centroid

    // Primary state
    pub position: Vec2, // World position of the center of mass
    pub rotation: f64,  // Radians
    pub linear_velocity: Vec2,
    pub angular_velocity: f64,

    // Physical properties, kept consistent by `set_mass`
    mass: Mass,
    inertia: f64, // About the center of mass, infinite for static bodies
}

impl RigidBody {
    /// Creates a body of the given mass centered on the origin. A mass that
    /// is not finite and positive makes the body static.
    pub fn new(mass: f64, shape: Shape) -> Self {
        let mass = Mass::from_value(mass);
        let local_com = shape.centroid();
        Self {
            inertia: derived_inertia(mass, &shape),
            shape,
            local_center_of_mass: local_com,
            position: Vec2::ZERO,
            rotation: 0.0,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            mass,
        }
    }

    /// Creates a body whose mass is `density * area`.
    pub fn from_density(density: f64, shape: Shape) -> Self {
        let mass = density * shape.area();
        Self::new(mass, shape)
    }

    /// Creates a static body. `position` is the world location of the
    /// shape's local origin; the stored position is the resulting world
    /// center of mass.
    pub fn new_static(shape: Shape, position: Vec2, rotation: f64) -> Self {
        let mut body = Self::new(0.0, shape);
        body.position = position + body.local_center_of_mass.rotate(rotation);
        body.rotation = rotation;
        body
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.linear_velocity = velocity;
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn area(&self) -> f64 {
        self.shape.area()
    }

    /// Mass per unit area. Infinite for static bodies.
    pub fn density(&self) -> f64 {
        self.mass.value() / self.area()
    }

    pub fn set_density(&mut self, density: f64) -> Result<(), BodyError> {
        let mass = density * self.area();
        if !is_valid_finite_mass(mass) {
            return Err(BodyError::InvalidMass(mass));
        }
        self.set_mass(mass)
    }
}

// Inertia scales linearly with mass for a fixed shape.
fn derived_inertia(mass: Mass, shape: &Shape) -> f64 {
    match mass {
        Mass::Infinite => f64::INFINITY,
        Mass::Finite(m) => {
            let area = shape.area();
            if area > 0.0 {
                m * shape.second_moment_of_area() / area
            } else {
                0.0
            }
        }
    }
}

impl Body for RigidBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn linear_velocity(&self) -> Vec2 {
        self.linear_velocity
    }

    fn mass(&self) -> Mass {
        self.mass
    }

    fn inertia(&self) -> f64 {
        self.inertia
    }

    fn bounding_radius(&self) -> f64 {
        self.shape.bounding_radius()
    }

    fn shape(&self) -> Option<&Shape> {
        Some(&self.shape)
    }

    /// World-space box of the transformed shape.
    fn aabb(&self) -> AABB {
        match &self.shape {
            Shape::Circle(circle) => AABB::around_circle(self.position, circle.radius),
            Shape::Polygon(polygon) => {
                let world_origin = self.position - self.local_center_of_mass.rotate(self.rotation);
                let world_vertices: Vec<Vec2> = polygon
                    .vertices
                    .iter()
                    .map(|&v| world_origin + v.rotate(self.rotation))
                    .collect();
                AABB::from_points(&world_vertices)
                    .unwrap_or_else(|| AABB::new(self.position, self.position))
            }
        }
    }

    /// `+inf` makes the body static. Inertia is re-derived from the shape.
    fn set_mass(&mut self, value: f64) -> Result<(), BodyError> {
        self.mass = if value == f64::INFINITY {
            Mass::Infinite
        } else if is_valid_finite_mass(value) {
            Mass::Finite(value)
        } else {
            return Err(BodyError::InvalidMass(value));
        };
        self.inertia = derived_inertia(self.mass, &self.shape);
        Ok(())
    }
}
