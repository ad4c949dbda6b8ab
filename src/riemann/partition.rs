use crate::algebra_error::{AlgebraError, AlgebraResult};
use crate::primitives::tolerance::EPSILON;

const MISSING_PARTITION: &str =
    "Either a positive interval count or a positive interval width is required";

/// Sub-interval layout along the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition {
    pub count: usize,
    pub width: f64,
}

/// Splits a baseline of `length` into sub-intervals.
///
/// An explicit `intervals` count wins: the width is `length / intervals`.
/// Without one (`None` or zero) the width is `interval_width` and the count
/// is the number of whole widths that fit, truncated. A quotient within
/// [`EPSILON`] of an integer counts as that integer, so 0.3 / 0.1 gives 3.
/// Widths so small that the count cannot be represented are rejected.
pub fn partition(
    length: f64,
    intervals: Option<usize>,
    interval_width: Option<f64>,
) -> AlgebraResult<Partition> {
    if !length.is_finite() || length <= 0.0 {
        return Err(AlgebraError::invalid_argument(format!(
            "Baseline length must be positive, got {}",
            length
        )));
    }

    if let Some(count) = intervals.filter(|&n| n > 0) {
        let width = length / count as f64;
        tracing::debug!(count, width, "Partitioned baseline by interval count");
        return Ok(Partition { count, width });
    }

    let width = match interval_width {
        Some(w) if w.is_finite() && w > 0.0 => w,
        None => return Err(AlgebraError::invalid_argument(MISSING_PARTITION)),
        Some(w) if w == 0.0 => return Err(AlgebraError::invalid_argument(MISSING_PARTITION)),
        Some(w) => {
            return Err(AlgebraError::invalid_argument(format!(
                "Interval width must be positive and finite, got {}",
                w
            )));
        }
    };

    let ratio = length / width;
    if !ratio.is_finite() || ratio >= usize::MAX as f64 {
        return Err(AlgebraError::invalid_argument(format!(
            "Interval width {} is too small for a baseline of length {}",
            width, length
        )));
    }
    let nearest = ratio.round();
    let count = if (ratio - nearest).abs() <= EPSILON {
        nearest
    } else {
        ratio.floor()
    };
    let count = count as usize;
    tracing::debug!(count, width, "Partitioned baseline by interval width");
    Ok(Partition { count, width })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_by_count() -> AlgebraResult<()> {
        assert_eq!(
            partition(10.0, Some(5), None)?,
            Partition { count: 5, width: 2.0 }
        );
        // The count wins over a width given alongside it.
        assert_eq!(
            partition(10.0, Some(4), Some(3.0))?,
            Partition { count: 4, width: 2.5 }
        );
        Ok(())
    }

    #[test]
    fn test_partition_by_width() -> AlgebraResult<()> {
        assert_eq!(
            partition(10.0, None, Some(3.0))?,
            Partition { count: 3, width: 3.0 }
        );
        assert_eq!(
            partition(10.0, Some(0), Some(2.5))?,
            Partition { count: 4, width: 2.5 }
        );
        assert_eq!(partition(0.3, None, Some(0.1))?.count, 3);
        assert_eq!(partition(1.0, None, Some(4.0))?.count, 0);
        Ok(())
    }

    #[test]
    fn test_partition_long_baseline_truncates() -> AlgebraResult<()> {
        let length = 100000000.9;
        let partition = partition(length, None, Some(1.0))?;
        assert_eq!(partition.count, 100000000);
        assert!(partition.count as f64 * partition.width <= length);
        Ok(())
    }

    #[test]
    fn test_partition_width_too_small() {
        assert!(partition(10.0, None, Some(1e-300)).unwrap_err().is_invalid_argument());
        assert!(partition(10.0, None, Some(f64::MIN_POSITIVE)).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_partition_invalid() {
        assert!(partition(10.0, Some(0), Some(0.0)).unwrap_err().is_invalid_argument());
        assert!(partition(10.0, None, None).unwrap_err().is_invalid_argument());
        assert!(partition(10.0, None, Some(-1.0)).unwrap_err().is_invalid_argument());
        assert!(partition(10.0, None, Some(f64::NAN)).unwrap_err().is_invalid_argument());
        assert!(partition(0.0, Some(3), None).unwrap_err().is_invalid_argument());
        assert!(partition(f64::INFINITY, Some(3), None).unwrap_err().is_invalid_argument());
    }
}
