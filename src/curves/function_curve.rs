use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use crate::algebra_error::{AlgebraError, AlgebraResult, WithContext};
use crate::intersection::curve_line::vertical_probe_intersection;
use crate::primitives::{bounding_box::BoundingBox, line::Line, point::Point, tolerance};

use super::curve_like::CurveLike;
use super::extension_policy::ExtensionPolicy;

type Function = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// An analytic graph curve y = f(x) over the domain [x_min, x_max].
///
/// The bounding box is estimated once at construction by sampling `f`, so it
/// can miss narrow peaks between samples. Rectangle sampling is unaffected,
/// since its probes are intersected with extend semantics.
#[derive(Clone)]
pub struct FunctionCurve {
    function: Function,
    x_min: f64,
    x_max: f64,
    offset: Point,
    extension: ExtensionPolicy,
    bounding_box: BoundingBox,
}

impl FunctionCurve {
    pub fn try_new<F>(
        function: F,
        x_min: f64,
        x_max: f64,
        samples: usize,
        extension: ExtensionPolicy,
    ) -> AlgebraResult<Self>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        let context = |err: AlgebraError| {
            err.with_context(format!(
                "Creating function curve over [{}, {}] with {} samples",
                x_min, x_max, samples
            ))
        };

        if !x_min.is_finite() || !x_max.is_finite() || x_min >= x_max {
            return Err(AlgebraError::invalid_argument(
                "Domain bounds must be finite with x_min < x_max",
            ))
            .with_context(&context);
        }
        if samples < 2 {
            return Err(AlgebraError::invalid_argument(
                "At least 2 samples are needed to bound the curve",
            ))
            .with_context(&context);
        }

        let points: Vec<Point> = (0..samples)
            .map(|i| {
                let x = if i == samples - 1 {
                    x_max
                } else {
                    x_min + (x_max - x_min) * i as f64 / (samples - 1) as f64
                };
                Point::from_f64(x, function(x), 0.0)
            })
            .collect();
        let bounding_box = BoundingBox::try_from_points(&points)
            .map_err(|_| AlgebraError::invalid_argument("Function is not finite anywhere on its domain"))
            .with_context(&context)?;

        Ok(Self {
            function: Arc::new(function),
            x_min,
            x_max,
            offset: Point::zero(),
            extension,
            bounding_box,
        })
    }

    /// Domain of the curve after translation.
    pub fn domain(&self) -> (f64, f64) {
        (self.x_min + self.offset.x, self.x_max + self.offset.x)
    }

    pub fn extension(&self) -> ExtensionPolicy {
        self.extension
    }

    fn endpoint_slope(&self, at_start: bool) -> f64 {
        let h = (self.x_max - self.x_min) * 1e-6;
        let f = &self.function;
        if at_start {
            (f(self.x_min + h) - f(self.x_min)) / h
        } else {
            (f(self.x_max) - f(self.x_max - h)) / h
        }
    }

    /// Height of the curve at `x`. Outside the domain the extension policy
    /// applies, but only if `extend` is set.
    pub fn height_at(&self, x: f64, extend: bool) -> Option<f64> {
        let local_x = x - self.offset.x;
        let f = &self.function;

        let local_y = if tolerance::contains(self.x_min, self.x_max, local_x) {
            Some(f(local_x.clamp(self.x_min, self.x_max)))
        } else if !extend {
            None
        } else if local_x < self.x_min {
            let anchor = (self.x_min, f(self.x_min));
            self.extension.extend(anchor, self.endpoint_slope(true), local_x)
        } else {
            let anchor = (self.x_max, f(self.x_max));
            self.extension.extend(anchor, self.endpoint_slope(false), local_x)
        };

        local_y
            .filter(|y| y.is_finite())
            .map(|y| y + self.offset.y)
    }
}

impl CurveLike for FunctionCurve {
    fn bounding_box(&self) -> BoundingBox {
        self.bounding_box.translate(self.offset)
    }

    fn intersect_line(&self, line: &Line, extend: bool) -> Vec<Point> {
        vertical_probe_intersection(line, extend, |x| self.height_at(x, extend))
    }

    fn translate(&self, offset: Point) -> Self {
        Self {
            function: Arc::clone(&self.function),
            offset: self.offset + offset,
            ..*self
        }
    }
}

impl Debug for FunctionCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionCurve")
            .field("x_min", &self.x_min)
            .field("x_max", &self.x_max)
            .field("offset", &self.offset)
            .field("extension", &self.extension)
            .field("bounding_box", &self.bounding_box)
            .finish_non_exhaustive()
    }
}

impl Display for FunctionCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x_min, x_max) = self.domain();
        write!(f, "FunctionCurve([{}, {}], offset: {})", x_min, x_max, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_curve_validation() {
        let err = FunctionCurve::try_new(|x| x, 1.0, 1.0, 10, ExtensionPolicy::None).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(FunctionCurve::try_new(|x| x, 0.0, 1.0, 1, ExtensionPolicy::None).is_err());
        assert!(FunctionCurve::try_new(|_| f64::NAN, 0.0, 1.0, 8, ExtensionPolicy::None).is_err());
    }

    #[test]
    fn test_function_curve_bounding_box() -> AlgebraResult<()> {
        let curve = FunctionCurve::try_new(|x| 4.0 - x * x, -2.0, 2.0, 5, ExtensionPolicy::None)?;
        let bbox = curve.bounding_box();
        assert_eq!(bbox.min, Point::from_f64(-2.0, 0.0, 0.0));
        assert_eq!(bbox.max, Point::from_f64(2.0, 4.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_function_curve_extension() -> AlgebraResult<()> {
        let line = |policy| FunctionCurve::try_new(|x| 2.0 * x, 0.0, 10.0, 11, policy);

        assert_eq!(line(ExtensionPolicy::None)?.height_at(11.0, true), None);
        assert_eq!(line(ExtensionPolicy::Clamp)?.height_at(11.0, true), Some(20.0));
        assert_eq!(line(ExtensionPolicy::Clamp)?.height_at(-3.0, true), Some(0.0));
        assert_eq!(line(ExtensionPolicy::Linear)?.height_at(11.0, false), None);

        let linear = line(ExtensionPolicy::Linear)?;
        let y = linear.height_at(12.0, true).unwrap();
        assert!(tolerance::approx_eq(y, 24.0), "got {}", y);
        Ok(())
    }

    #[test]
    fn test_function_curve_translate() -> AlgebraResult<()> {
        let curve = FunctionCurve::try_new(|x| x * x, 0.0, 3.0, 31, ExtensionPolicy::None)?;
        let moved = curve.translate(Point::from_f64(1.0, -2.0, 0.0));

        assert_eq!(moved.domain(), (1.0, 4.0));
        assert_eq!(moved.height_at(3.0, false), Some(2.0));
        assert_eq!(moved.height_at(0.5, false), None);
        assert_eq!(moved.bounding_box().min, Point::from_f64(1.0, -2.0, 0.0));

        let probe = Line::new(Point::from_f64(2.0, -5.0, 0.0), Point::from_f64(2.0, 10.0, 0.0));
        assert_eq!(moved.intersect_line(&probe, false), vec![Point::from_f64(2.0, -1.0, 0.0)]);
        Ok(())
    }
}
