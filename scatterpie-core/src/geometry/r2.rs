use std::fmt::{self, Display, Formatter};

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use tsify::Tsify;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct R2<D> {
    pub x: D,
    pub y: D,
}

impl<D: Display> Display for R2<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

impl R2<f64> {
    pub fn origin() -> Self {
        R2 { x: 0., y: 0. }
    }

    /// Point on the unit circle at angle `theta` (radians).
    pub fn unit(theta: f64) -> Self {
        R2 { x: theta.cos(), y: theta.sin() }
    }

    /// Largest absolute coordinate (Chebyshev norm).
    pub fn abs_max(&self) -> f64 {
        self.x.abs().max(self.y.abs())
    }
}

impl From<(f64, f64)> for R2<f64> {
    fn from((x, y): (f64, f64)) -> Self {
        R2 { x, y }
    }
}

impl AbsDiffEq for R2<f64> {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for R2<f64> {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative) && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn unit_points() {
        assert_abs_diff_eq!(R2::unit(0.), R2 { x: 1., y: 0. }, epsilon = 1e-15);
        assert_abs_diff_eq!(R2::unit(FRAC_PI_2), R2 { x: 0., y: 1. }, epsilon = 1e-15);
        assert_abs_diff_eq!(R2::unit(PI), R2 { x: -1., y: 0. }, epsilon = 1e-15);
    }

    #[test]
    fn abs_max() {
        assert_eq!(R2::origin().abs_max(), 0.);
        assert_eq!(R2 { x: -0.75, y: 0.5 }.abs_max(), 0.75);
        assert_eq!(R2::from((0.25, -1.)).abs_max(), 1.);
    }

    #[test]
    fn display() {
        assert_eq!(R2 { x: 1., y: -0.5 }.to_string(), "(1.000, -0.500)");
    }
}
