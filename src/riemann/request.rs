use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algebra_error::{AlgebraError, AlgebraResult, WithContext};
use crate::curves::curve_like::CurveLike;

use super::baseline::Baseline;
use super::rectangle::Rectangle;
use super::riemann_sum_rectangles;
use super::sampling_rule::SamplingRule;

/// The sampling parameters of one rectangle generation, loadable from JSON.
///
/// ```json
/// { "rule": "middle", "interval_width": 0.5, "vertical_offset": 2.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiemannRequest {
    pub rule: SamplingRule,
    #[serde(default)]
    pub intervals: Option<usize>,
    #[serde(default)]
    pub interval_width: Option<f64>,
    #[serde(default)]
    pub vertical_offset: Option<f64>,
}

impl RiemannRequest {
    pub fn from_json_str(json: &str) -> AlgebraResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> AlgebraResult<Self> {
        let file_path = file_path.as_ref();
        let context = |err: AlgebraError| {
            err.with_context(format!("Reading request from {}", file_path.display()))
        };

        let file = File::open(file_path)
            .map_err(AlgebraError::from)
            .with_context(&context)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(AlgebraError::from)
            .with_context(&context)
    }

    pub fn rectangles<C: CurveLike + Clone>(
        &self,
        upper_curve: &C,
        baseline: &Baseline,
    ) -> AlgebraResult<Vec<Rectangle>> {
        riemann_sum_rectangles(
            upper_curve,
            baseline,
            self.rule,
            self.intervals,
            self.interval_width,
            self.vertical_offset,
        )
    }
}
