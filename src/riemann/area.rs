use super::rectangle::Rectangle;

/// Signed sum of the rectangles' areas, the Riemann-sum estimate of the area
/// between the curve and the baseline.
pub fn total_area(rectangles: &[Rectangle]) -> f64 {
    rectangles.iter().map(Rectangle::area).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::point::Point;

    #[test]
    fn test_total_area() {
        let rects = [
            Rectangle::from_bottom_edge(Point::zero(), Point::unit_x(), 2.0),
            Rectangle::from_bottom_edge(Point::unit_x(), Point::unit_x() * 3.0, -0.5),
        ];
        assert_eq!(total_area(&rects), 1.0);
        assert_eq!(total_area(&[]), 0.0);
    }
}
