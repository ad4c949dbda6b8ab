use std::fmt::Display;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A position in 3D space. Planar algorithms read x and y and carry z through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn from_f64(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::from_f64(0.0, 0.0, 0.0)
    }

    pub fn unit_x() -> Self {
        Self::from_f64(1.0, 0.0, 0.0)
    }

    pub fn unit_y() -> Self {
        Self::from_f64(0.0, 1.0, 0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn with_y(&self, y: f64) -> Self {
        Self::from_f64(self.x, y, self.z)
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::from_f64(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::from_f64(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self::from_f64(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;
    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

impl Neg for Point {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_f64(-self.x, -self.y, -self.z)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::from_f64(1.0, 2.0, 3.0);
        let b = Point::from_f64(0.5, -1.0, 0.0);

        assert_eq!(a + b, Point::from_f64(1.5, 1.0, 3.0));
        assert_eq!(a - b, Point::from_f64(0.5, 3.0, 3.0));
        assert_eq!(2.0 * b, Point::from_f64(1.0, -2.0, 0.0));
        assert_eq!(-a, Point::from_f64(-1.0, -2.0, -3.0));
        assert_eq!(Point::unit_x() + Point::unit_y() * 4.0, Point::from_f64(1.0, 4.0, 0.0));
        assert_eq!(a.with_y(0.0), Point::from_f64(1.0, 0.0, 3.0));
    }

    #[test]
    fn test_point_serde() -> Result<(), serde_json::Error> {
        let p: Point = serde_json::from_str(r#"{ "x": 1.0, "y": -2.0, "z": 0.5 }"#)?;
        assert_eq!(p, Point::from_f64(1.0, -2.0, 0.5));
        Ok(())
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::from_f64(1.0, 2.5, 0.0).to_string(), "(1, 2.5, 0)");
    }
}
