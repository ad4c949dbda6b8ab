use crate::primitives::{line::Line, point::Point, tolerance};

/// Intersects a vertical probe with a graph curve y = f(x).
///
/// `height_at` returns the curve's height at the probe's x, or `None` where
/// the curve (including any extension it allows) does not exist. Without
/// `extend` the hit must also lie within the probe's y range.
pub fn vertical_probe_intersection<F>(probe: &Line, extend: bool, height_at: F) -> Vec<Point>
where
    F: FnOnce(f64) -> Option<f64>,
{
    if !probe.is_vertical() {
        return Vec::new();
    }

    let x = probe.start().x;
    let y = match height_at(x) {
        Some(y) if y.is_finite() => y,
        _ => return Vec::new(),
    };

    if !extend && !tolerance::contains(probe.min_y(), probe.max_y(), y) {
        return Vec::new();
    }

    vec![Point::from_f64(x, y, probe.start().z)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(x: f64, y0: f64, y1: f64) -> Line {
        Line::new(Point::from_f64(x, y0, 0.5), Point::from_f64(x, y1, 0.5))
    }

    #[test]
    fn test_probe_hits_within_range() {
        let hits = vertical_probe_intersection(&probe(2.0, 0.0, 5.0), false, |x| Some(x * x));
        assert_eq!(hits, vec![Point::from_f64(2.0, 4.0, 0.5)]);
    }

    #[test]
    fn test_probe_beyond_range_needs_extend() {
        let short = probe(3.0, 0.0, 5.0);
        assert!(vertical_probe_intersection(&short, false, |x| Some(x * x)).is_empty());
        assert_eq!(
            vertical_probe_intersection(&short, true, |x| Some(x * x)),
            vec![Point::from_f64(3.0, 9.0, 0.5)]
        );
    }

    #[test]
    fn test_probe_misses() {
        assert!(vertical_probe_intersection(&probe(1.0, 0.0, 5.0), true, |_| None).is_empty());
        assert!(
            vertical_probe_intersection(&probe(1.0, 0.0, 5.0), true, |_| Some(f64::NAN)).is_empty()
        );

        let slanted = Line::new(Point::zero(), Point::from_f64(1.0, 1.0, 0.0));
        assert!(vertical_probe_intersection(&slanted, true, |_| Some(0.0)).is_empty());
    }
}
