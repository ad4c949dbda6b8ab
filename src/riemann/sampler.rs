use crate::algebra_error::{AlgebraError, AlgebraResult};
use crate::curves::curve_like::CurveLike;
use crate::primitives::{line::Line, point::Point};

use super::baseline::Baseline;

/// Finds the curve's height above baseline positions by casting vertical probes.
pub struct HeightSampler<'a, C: CurveLike> {
    curve: &'a C,
    baseline: &'a Baseline,
    probe_top: f64,
}

impl<'a, C: CurveLike> HeightSampler<'a, C> {
    pub fn new(curve: &'a C, baseline: &'a Baseline) -> Self {
        // One unit above the curve, so the probe spans its full height.
        let probe_top = curve.bounding_box().max.y + 1.0;
        Self {
            curve,
            baseline,
            probe_top,
        }
    }

    /// The first intersection of the curve with the vertical probe at `x`.
    pub fn sample(&self, x: f64) -> AlgebraResult<Point> {
        let start = self.baseline.point_at(x);
        let probe = Line::new(start, start.with_y(self.probe_top));
        match self.curve.intersect_line(&probe, true).first() {
            Some(hit) => {
                tracing::trace!(x, y = hit.y, "Probe hit curve");
                Ok(*hit)
            }
            None => {
                tracing::trace!(x, "Probe missed curve");
                Err(AlgebraError::no_intersection(x))
            }
        }
    }
}
