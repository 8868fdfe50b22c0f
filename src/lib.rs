//! Rigid bodies and the rigid composites built from them.
//!
//! The entry point is [`CompositeBody`], which fuses a set of [`RigidBody`]
//! members into one body with derived mass, inertia and bounding circle.

pub mod collision;
pub mod common;
pub mod math;
pub mod objects;
pub mod shapes;

// Re-export key types for easier use
pub use collision::AABB;
pub use common::{BodyError, ErrorKind};
pub use math::vec2::Vec2;
pub use objects::{Body, CompositeBody, CompositeOptions, Mass, RigidBody};
pub use shapes::{Circle, Polygon, Shape};
