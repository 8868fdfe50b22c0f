pub mod body;
pub mod composite;
pub mod composite_options;
pub mod mass;
pub mod rigid_body;

pub use body::Body;
pub use composite::CompositeBody;
pub use composite_options::CompositeOptions;
pub use mass::Mass;
pub use rigid_body::RigidBody;
