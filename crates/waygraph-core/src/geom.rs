//! Planar vertex coordinates.
//!
//! Coordinates carry no meaning for the graph structure itself; they only
//! feed distance estimates used by heuristic searches.

use std::fmt;
use std::ops::Sub;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A 2D floating-point position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line (L2) distance to `other`.
    #[inline]
    pub fn euclidean(self, other: Coord) -> f64 {
        let d = other - self;
        (d.x * d.x + d.y * d.y).sqrt()
    }

    /// Taxicab (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Coord) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chessboard (L∞) distance to `other`.
    #[inline]
    pub fn chebyshev(self, other: Coord) -> f64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Whether both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
