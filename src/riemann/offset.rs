use std::borrow::Cow;

use crate::curves::curve_like::CurveLike;
use crate::primitives::point::Point;

/// Offsets with a smaller magnitude leave the curve untouched.
pub const OFFSET_EPSILON: f64 = 1e-9;

/// Moves the curve up by `offset` (down if negative).
///
/// Negligible offsets return the original curve without copying it.
pub fn offset_curve<C: CurveLike + Clone>(curve: &C, offset: f64) -> Cow<'_, C> {
    if offset.abs() > OFFSET_EPSILON {
        tracing::debug!(offset, "Translating curve before sampling");
        Cow::Owned(curve.translate(Point::unit_y() * offset))
    } else {
        Cow::Borrowed(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra_error::AlgebraResult;
    use crate::curves::{extension_policy::ExtensionPolicy, polyline_curve::PolylineCurve};

    #[test]
    fn test_offset_curve() -> AlgebraResult<()> {
        let curve = PolylineCurve::try_from_xy(&[(0.0, 1.0), (1.0, 2.0)], ExtensionPolicy::None)?;

        let same = offset_curve(&curve, 1e-12);
        assert!(matches!(same, Cow::Borrowed(_)));

        let raised = offset_curve(&curve, 2.0);
        assert!(matches!(raised, Cow::Owned(_)));
        assert_eq!(raised.height_at(0.5, false), Some(3.5));

        let lowered = offset_curve(&curve, -1.0);
        assert_eq!(lowered.bounding_box().min.y, 0.0);
        Ok(())
    }
}
