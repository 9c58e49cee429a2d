//! Fantasy points with fractional-point support
//!
//! Points are tenths of a point stored in an i64, so half-point weights
//! (receptions) and negative totals (hits, turnovers) stay exact and every
//! recomputation is bit-identical.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A fantasy point total in tenths of a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Points {
    /// Amount in tenths of a point
    pub tenths: i64,
}

impl Points {
    pub const ZERO: Points = Points { tenths: 0 };

    /// Create from whole points
    pub fn from_points(points: i64) -> Self {
        Self { tenths: points * 10 }
    }

    /// Create from tenths of a point
    pub fn from_tenths(tenths: i64) -> Self {
        Self { tenths }
    }

    /// Check if the total is zero
    pub fn is_zero(self) -> bool {
        self.tenths == 0
    }

    /// Check if the total is negative
    pub fn is_negative(self) -> bool {
        self.tenths < 0
    }
}

impl Add for Points {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self { tenths: self.tenths + other.tenths }
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, other: Self) {
        self.tenths += other.tenths;
    }
}

impl Sub for Points {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self { tenths: self.tenths - other.tenths }
    }
}

impl Mul<i64> for Points {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self { tenths: self.tenths * rhs }
    }
}

impl Neg for Points {
    type Output = Self;

    fn neg(self) -> Self {
        Self { tenths: -self.tenths }
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Points {
        iter.fold(Points::ZERO, Add::add)
    }
}

impl std::fmt::Display for Points {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.tenths < 0 { "-" } else { "" };
        let magnitude = self.tenths.abs();
        write!(f, "{}{}.{}", sign, magnitude / 10, magnitude % 10)
    }
}
