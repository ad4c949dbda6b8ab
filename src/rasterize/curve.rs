use crate::curves::curve_like::CurveLike;
use crate::primitives::{line::Line, point::Point};

/// Samples the curve at `n + 1` evenly spaced x-positions across its bounding
/// box. Positions where the curve does not exist are skipped.
pub fn rasterize_curve(curve: &impl CurveLike, n: usize) -> Vec<Point> {
    let bbox = curve.bounding_box();
    let n = n.max(1);
    let mut points = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let x = bbox.min.x + bbox.width() * i as f64 / n as f64;
        let probe = Line::new(
            Point::from_f64(x, bbox.min.y - 1.0, bbox.min.z),
            Point::from_f64(x, bbox.max.y + 1.0, bbox.min.z),
        );
        if let Some(point) = curve.intersect_line(&probe, false).first() {
            points.push(*point);
        }
    }
    points
}
