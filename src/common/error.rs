//! Errors raised while building or mutating bodies.

use std::fmt;

/// Broad category of a [`BodyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid or contradictory construction arguments, or an operation
    /// that is undefined for the body's current state.
    Configuration,
    /// A member index outside the composite.
    Index,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyError {
    /// A composite was built from zero members.
    EmptyComposite,
    /// A density was given for the composite as a whole.
    DensityOverride,
    /// An inertia was given for a composite; it is always derived.
    InertiaOverride(f64),
    /// A mass that is neither finite and positive nor `+inf`.
    InvalidMass(f64),
    /// A mass override that contradicts the derived finite/infinite state.
    MassOverrideConflict,
    /// A member without positive area in an area-weighted composite.
    DegenerateArea { index: usize, area: f64 },
    /// Rescaling the mass of an immovable body.
    InfiniteMassRescale,
    IndexOutOfRange { index: usize, len: usize },
}

impl BodyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BodyError::IndexOutOfRange { .. } => ErrorKind::Index,
            _ => ErrorKind::Configuration,
        }
    }
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyError::EmptyComposite => {
                write!(f, "cannot build a composite body from zero members")
            }
            BodyError::DensityOverride => {
                write!(f, "density must be set on each member separately")
            }
            BodyError::InertiaOverride(value) => {
                write!(f, "cannot set the inertia of a composite body (got {})", value)
            }
            BodyError::InvalidMass(value) => {
                write!(f, "mass must be finite and positive (got {})", value)
            }
            BodyError::MassOverrideConflict => write!(
                f,
                "mass override cannot turn a finite composite infinite or the reverse"
            ),
            BodyError::DegenerateArea { index, area } => write!(
                f,
                "member {} has non-positive area {} and cannot weight an immovable composite",
                index, area
            ),
            BodyError::InfiniteMassRescale => {
                write!(f, "cannot rescale the mass of an immovable body")
            }
            BodyError::IndexOutOfRange { index, len } => {
                write!(f, "member index {} out of range for composite of {} members", index, len)
            }
        }
    }
}

impl std::error::Error for BodyError {}
