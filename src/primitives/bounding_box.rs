use std::fmt::Display;

use crate::algebra_error::{AlgebraError, AlgebraResult};

use super::point::Point;

/// An axis-aligned box that contains a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// The smallest box containing all finite `points`.
    pub fn try_from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> AlgebraResult<Self> {
        let mut points = points.into_iter().filter(|p| p.is_finite());
        let first = match points.next() {
            Some(p) => *p,
            None => {
                return Err(AlgebraError::invalid_argument(
                    "Cannot create bounding box from empty set of points",
                ));
            }
        };
        Ok(points.fold(Self::new(first, first), |bbox, p| bbox.expand(p)))
    }

    pub fn expand(&self, p: &Point) -> Self {
        Self {
            min: Point::from_f64(self.min.x.min(p.x), self.min.y.min(p.y), self.min.z.min(p.z)),
            max: Point::from_f64(self.max.x.max(p.x), self.max.y.max(p.y), self.max.z.max(p.z)),
        }
    }

    pub fn translate(&self, offset: Point) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BoundingBox({} .. {})", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_from_points() -> AlgebraResult<()> {
        let points = vec![
            Point::from_f64(0.0, 2.0, 0.0),
            Point::from_f64(3.0, -1.0, 0.0),
            Point::from_f64(f64::NAN, 100.0, 0.0),
            Point::from_f64(1.0, 4.0, 1.0),
        ];
        let bbox = BoundingBox::try_from_points(&points)?;
        assert_eq!(bbox.min, Point::from_f64(0.0, -1.0, 0.0));
        assert_eq!(bbox.max, Point::from_f64(3.0, 4.0, 1.0));
        assert_eq!(bbox.width(), 3.0);
        assert_eq!(bbox.height(), 5.0);

        let moved = bbox.translate(Point::unit_y() * 2.0);
        assert_eq!(moved.max.y, 6.0);
        Ok(())
    }

    #[test]
    fn test_bounding_box_empty() {
        let err = BoundingBox::try_from_points(&Vec::<Point>::new()).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
