pub mod area;
pub mod baseline;
pub mod builder;
pub mod offset;
pub mod partition;
pub mod rectangle;
pub mod request;
pub mod sampler;
pub mod sampling_rule;

use crate::algebra_error::{AlgebraError, AlgebraResult, WithContext};
use crate::curves::curve_like::CurveLike;

use baseline::Baseline;
use builder::build_rectangle;
use offset::offset_curve;
use partition::partition;
use rectangle::Rectangle;
use sampler::HeightSampler;
use sampling_rule::SamplingRule;

/// Generates the Riemann rectangles between `baseline` and `upper_curve`.
///
/// The baseline is split into `intervals` pieces, or into pieces of
/// `interval_width` when no count is given (see [`partition::partition`]).
/// Each rectangle stands on the baseline and reaches up to the curve's height
/// at the position `rule` picks. With a `vertical_offset` the curve is moved
/// up by that amount first, which raises every rectangle's top edge by it.
///
/// Rectangles are returned in increasing x. Any failing probe aborts the
/// whole generation.
pub fn riemann_sum_rectangles<C: CurveLike + Clone>(
    upper_curve: &C,
    baseline: &Baseline,
    rule: SamplingRule,
    intervals: Option<usize>,
    interval_width: Option<f64>,
    vertical_offset: Option<f64>,
) -> AlgebraResult<Vec<Rectangle>> {
    let context = |err: AlgebraError| {
        err.with_context(format!(
            "Generating {} rectangles over {}",
            rule, baseline
        ))
    };

    let offset = vertical_offset.unwrap_or(0.0);
    if !offset.is_finite() {
        return Err(AlgebraError::invalid_argument(format!(
            "Vertical offset must be finite, got {}",
            offset
        )))
        .with_context(&context);
    }

    let partition = partition(baseline.length(), intervals, interval_width).with_context(&context)?;
    let curve = offset_curve(upper_curve, offset);
    let sampler = HeightSampler::new(&*curve, baseline);

    (0..partition.count)
        .map(|k| build_rectangle(&sampler, baseline, &partition, k, rule))
        .collect::<AlgebraResult<Vec<_>>>()
        .with_context(&context)
}
