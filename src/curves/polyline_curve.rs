use std::fmt::Display;

use crate::algebra_error::{AlgebraError, AlgebraResult, WithContext};
use crate::intersection::curve_line::vertical_probe_intersection;
use crate::primitives::{bounding_box::BoundingBox, line::Line, point::Point, tolerance};

use super::curve_like::CurveLike;
use super::extension_policy::ExtensionPolicy;

/// A piecewise linear graph curve through `vertices`, whose x-coordinates
/// strictly increase.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineCurve {
    vertices: Vec<Point>,
    extension: ExtensionPolicy,
    bounding_box: BoundingBox,
}

impl PolylineCurve {
    pub fn try_new(vertices: Vec<Point>, extension: ExtensionPolicy) -> AlgebraResult<Self> {
        let context = |err: AlgebraError| {
            let mut message = "Creating polyline curve from vertices".to_string();
            for vertex in vertices.iter() {
                message.push_str(&format!(" {}", vertex));
            }
            err.with_context(message)
        };

        if vertices.len() < 2 {
            return Err(AlgebraError::invalid_argument(format!(
                "A polyline curve needs at least 2 vertices, got {}",
                vertices.len()
            )))
            .with_context(&context);
        }
        if let Some(vertex) = vertices.iter().find(|v| !v.is_finite()) {
            return Err(AlgebraError::invalid_argument(format!(
                "Vertex {} is not finite",
                vertex
            )))
            .with_context(&context);
        }
        for i in 1..vertices.len() {
            if vertices[i - 1].x >= vertices[i].x {
                return Err(AlgebraError::invalid_argument(format!(
                    "Vertex x-coordinates must strictly increase, {} is followed by {} at index {}",
                    vertices[i - 1],
                    vertices[i],
                    i
                )))
                .with_context(&context);
            }
        }

        let bounding_box = BoundingBox::try_from_points(&vertices).with_context(&context)?;
        Ok(Self {
            vertices,
            extension,
            bounding_box,
        })
    }

    /// Builds a polyline from (x, y) pairs in the z = 0 plane.
    pub fn try_from_xy(points: &[(f64, f64)], extension: ExtensionPolicy) -> AlgebraResult<Self> {
        let vertices = points
            .iter()
            .map(|&(x, y)| Point::from_f64(x, y, 0.0))
            .collect();
        Self::try_new(vertices, extension)
    }

    fn slope(a: &Point, b: &Point) -> f64 {
        (b.y - a.y) / (b.x - a.x)
    }

    /// Height of the curve at `x`. Outside the vertex range the extension
    /// policy applies, but only if `extend` is set.
    pub fn height_at(&self, x: f64, extend: bool) -> Option<f64> {
        let n = self.vertices.len();
        let first = &self.vertices[0];
        let last = &self.vertices[n - 1];

        if tolerance::contains(first.x, last.x, x) {
            // First vertex strictly right of x, kept inside 1..n so there is a segment to use.
            let i = self.vertices.partition_point(|v| v.x <= x).clamp(1, n - 1);
            let a = &self.vertices[i - 1];
            let b = &self.vertices[i];
            return Some(a.y + (x - a.x) * (b.y - a.y) / (b.x - a.x));
        }
        if !extend {
            return None;
        }
        if x < first.x {
            let slope = Self::slope(first, &self.vertices[1]);
            self.extension.extend((first.x, first.y), slope, x)
        } else {
            let slope = Self::slope(&self.vertices[n - 2], last);
            self.extension.extend((last.x, last.y), slope, x)
        }
    }
}

impl CurveLike for PolylineCurve {
    fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    fn intersect_line(&self, line: &Line, extend: bool) -> Vec<Point> {
        vertical_probe_intersection(line, extend, |x| self.height_at(x, extend))
    }

    fn translate(&self, offset: Point) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| *v + offset).collect(),
            extension: self.extension,
            bounding_box: self.bounding_box.translate(offset),
        }
    }
}

impl Display for PolylineCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PolylineCurve(")?;
        for vertex in &self.vertices {
            write!(f, "{}, ", vertex)?;
        }
        write!(f, "extension: {:?})", self.extension)
    }
}
