use std::fmt::Display;

use super::point::Point;
use super::tolerance::approx_eq;

/// A directed line segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    /// Creates a segment. Degenerate segments are allowed.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// True if the segment runs parallel to the y axis.
    pub fn is_vertical(&self) -> bool {
        approx_eq(self.start.x, self.end.x) && approx_eq(self.start.z, self.end.z)
    }

    pub fn min_y(&self) -> f64 {
        self.start.y.min(self.end.y)
    }

    pub fn max_y(&self) -> f64 {
        self.start.y.max(self.end.y)
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line({} -> {})", self.start, self.end)
    }
}
