use crate::algebra_error::AlgebraResult;
use crate::curves::curve_like::CurveLike;

use super::baseline::Baseline;
use super::partition::Partition;
use super::rectangle::Rectangle;
use super::sampler::HeightSampler;
use super::sampling_rule::SamplingRule;

/// Builds the rectangle over sub-interval `k`.
///
/// Both interval ends are always probed, so the curve has to cover the whole
/// interval even when the rule only uses one of them. Errors from the sampler
/// are returned as they are.
pub fn build_rectangle<C: CurveLike>(
    sampler: &HeightSampler<'_, C>,
    baseline: &Baseline,
    partition: &Partition,
    k: usize,
    rule: SamplingRule,
) -> AlgebraResult<Rectangle> {
    let x0 = baseline.x0();
    let p1 = baseline.point_at(x0 + k as f64 * partition.width);
    let p4 = baseline.point_at(x0 + (k + 1) as f64 * partition.width);

    let q_left = sampler.sample(p1.x)?;
    let q_right = sampler.sample(p4.x)?;

    let top = match rule {
        SamplingRule::Left => q_left.y,
        SamplingRule::Right => q_right.y,
        SamplingRule::Middle => {
            let x_mid = p1.x + (p4.x - p1.x) / 2.0;
            sampler.sample(x_mid)?.y
        }
    };

    Ok(Rectangle::from_bottom_edge(p1, p4, top))
}
