//! Basic 2D types and the collinearity tolerance.
//!
//! - `Point`, `Vector`: nalgebra aliases; `Point - Point` yields a `Vector`.
//! - `Orientation`: tri-state rotational sense of three ordered points.
//! - `GeomCfg`: centralizes the epsilon used to call a cross product zero.

use nalgebra::{Point2, Vector2};

/// A location in the plane.
pub type Point = Point2<f64>;

/// Directed difference between two points.
pub type Vector = Vector2<f64>;

/// Rotational sense of an ordered point triple (or of a whole vertex loop).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

impl Orientation {
    /// Classify a signed turn value. Values inside `[-eps, eps]` are collinear.
    ///
    /// This is the single tie-break rule; NaN also lands on `Collinear`.
    #[inline]
    pub fn from_signed(value: f64, eps: f64) -> Self {
        if value > eps {
            Orientation::CounterClockwise
        } else if value < -eps {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    /// Same classification seen with the last two points swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }

    #[inline]
    pub fn is_collinear(self) -> bool {
        self == Orientation::Collinear
    }
}

/// Geometry configuration (tolerances).
///
/// `eps_collinear = 0.0` (the default) keeps predicates exact. A positive value
/// widens the collinear band, which turns near-touching edges into collisions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_collinear: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_collinear: 0.0 }
    }
}

impl GeomCfg {
    /// Config with a non-negative collinearity tolerance.
    #[inline]
    pub fn with_eps(eps_collinear: f64) -> Self {
        Self {
            eps_collinear: eps_collinear.max(0.0),
        }
    }
}
