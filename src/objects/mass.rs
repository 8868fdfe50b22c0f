use std::ops::Add;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mass of a body. Immovable bodies carry `Infinite` instead of an IEEE
/// infinity so sums and ratios never see `inf - inf` or `0 * inf`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mass {
    /// Always finite and strictly positive.
    Finite(f64),
    Infinite,
}

impl Mass {
    /// Engine convention: anything that is not a finite positive number
    /// (zero, negative, NaN, +inf) makes the body static.
    pub fn from_value(value: f64) -> Self {
        if is_valid_finite_mass(value) {
            Mass::Finite(value)
        } else {
            Mass::Infinite
        }
    }

    /// `f64::INFINITY` for immovable bodies.
    pub fn value(self) -> f64 {
        match self {
            Mass::Finite(m) => m,
            Mass::Infinite => f64::INFINITY,
        }
    }

    /// Inverse mass, `0.0` for immovable bodies.
    pub fn inverse(self) -> f64 {
        match self {
            Mass::Finite(m) => 1.0 / m,
            Mass::Infinite => 0.0,
        }
    }

    pub fn finite(self) -> Option<f64> {
        match self {
            Mass::Finite(m) => Some(m),
            Mass::Infinite => None,
        }
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, Mass::Infinite)
    }

    /// Sum of `masses`, `Infinite` as soon as one of them is or the finite
    /// sum overflows. `None` for an empty input since there is no zero mass.
    pub fn total<I: IntoIterator<Item = Mass>>(masses: I) -> Option<Mass> {
        masses.into_iter().reduce(Add::add)
    }
}

pub(crate) fn is_valid_finite_mass(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, other: Mass) -> Mass {
        match (self, other) {
            (Mass::Finite(a), Mass::Finite(b)) => Mass::from_value(a + b),
            _ => Mass::Infinite,
        }
    }
}
