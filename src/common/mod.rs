pub mod error;

pub use error::{BodyError, ErrorKind};
