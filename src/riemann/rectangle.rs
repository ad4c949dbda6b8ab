use std::fmt::Display;

use serde::Serialize;

use crate::primitives::point::Point;

/// One Riemann strip.
///
/// Corners are p1 bottom-left, p2 top-left, p3 top-right and p4 bottom-right.
/// The left corners share x, the right corners share x, the bottom corners lie
/// on the baseline and all four share z. The top edge lies below the bottom
/// edge where the curve dips under the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    p1: Point,
    p2: Point,
    p3: Point,
    p4: Point,
}

impl Rectangle {
    /// Raises the bottom edge `p1`–`p4` to height `top`.
    pub fn from_bottom_edge(p1: Point, p4: Point, top: f64) -> Self {
        Self {
            p1,
            p2: p1.with_y(top),
            p3: p4.with_y(top),
            p4,
        }
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    pub fn p2(&self) -> Point {
        self.p2
    }

    pub fn p3(&self) -> Point {
        self.p3
    }

    pub fn p4(&self) -> Point {
        self.p4
    }

    /// Corners in drawing order p1, p2, p3, p4.
    pub fn corners(&self) -> [Point; 4] {
        [self.p1, self.p2, self.p3, self.p4]
    }

    pub fn top(&self) -> f64 {
        self.p2.y
    }

    pub fn width(&self) -> f64 {
        self.p4.x - self.p1.x
    }

    /// Signed height, negative where the top edge is below the baseline.
    pub fn height(&self) -> f64 {
        self.p2.y - self.p1.y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn translate(&self, offset: Point) -> Self {
        Self {
            p1: self.p1 + offset,
            p2: self.p2 + offset,
            p3: self.p3 + offset,
            p4: self.p4 + offset,
        }
    }
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rectangle: p1={}, p2={}, p3={}, p4={}",
            self.p1, self.p2, self.p3, self.p4
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_corners() {
        let rect = Rectangle::from_bottom_edge(
            Point::from_f64(2.0, 1.0, 5.0),
            Point::from_f64(4.0, 1.0, 5.0),
            4.0,
        );
        assert_eq!(rect.p2(), Point::from_f64(2.0, 4.0, 5.0));
        assert_eq!(rect.p3(), Point::from_f64(4.0, 4.0, 5.0));
        assert_eq!(rect.p1().x, rect.p2().x);
        assert_eq!(rect.p4().x, rect.p3().x);
        assert_eq!(rect.p1().y, rect.p4().y);
        assert_eq!(rect.width(), 2.0);
        assert_eq!(rect.height(), 3.0);
        assert_eq!(rect.area(), 6.0);
    }

    #[test]
    fn test_rectangle_serializes_corners() -> Result<(), serde_json::Error> {
        let rect = Rectangle::from_bottom_edge(Point::zero(), Point::unit_x(), 2.0);
        let json = serde_json::to_value(rect)?;
        assert_eq!(json["p2"]["y"], 2.0);
        assert_eq!(json["p4"]["x"], 1.0);
        Ok(())
    }

    #[test]
    fn test_rectangle_below_baseline() {
        let rect = Rectangle::from_bottom_edge(Point::zero(), Point::unit_x(), -2.0);
        assert_eq!(rect.top(), -2.0);
        assert_eq!(rect.area(), -2.0);
        assert_eq!(rect.translate(Point::unit_y()).top(), -1.0);
    }
}
