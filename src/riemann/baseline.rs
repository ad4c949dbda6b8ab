use std::fmt::Display;

use crate::algebra_error::{AlgebraError, AlgebraResult};
use crate::primitives::{point::Point, tolerance::approx_eq};

/// The horizontal segment the rectangles stand on.
///
/// Both endpoints share y and z. Rectangles are laid out in increasing x
/// regardless of the segment's direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    start: Point,
    end: Point,
}

impl Baseline {
    pub fn try_new(start: Point, end: Point) -> AlgebraResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(AlgebraError::invalid_argument(format!(
                "Baseline endpoints must be finite, got {} and {}",
                start, end
            )));
        }
        if !approx_eq(start.y, end.y) || !approx_eq(start.z, end.z) {
            return Err(AlgebraError::invalid_argument(format!(
                "Baseline must be horizontal, got {} and {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Left end of the baseline, where the first rectangle starts.
    pub fn x0(&self) -> f64 {
        self.start.x.min(self.end.x)
    }

    pub fn y(&self) -> f64 {
        self.start.y
    }

    pub fn z(&self) -> f64 {
        self.start.z
    }

    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).abs()
    }

    /// The point on the baseline's line at `x`.
    pub fn point_at(&self, x: f64) -> Point {
        Point::from_f64(x, self.y(), self.z())
    }
}

impl Display for Baseline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Baseline({} -> {})", self.start, self.end)
    }
}
