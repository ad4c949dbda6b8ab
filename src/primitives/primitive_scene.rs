use std::path::Path;

use crate::algebra_error::{AlgebraError, AlgebraResult, WithContext};
use crate::curves::curve_like::CurveLike;
use crate::rasterize::curve::rasterize_curve;
use crate::renderer::render_scene;
use crate::riemann::rectangle::Rectangle;

use super::{bounding_box::BoundingBox, color::Color10, line::Line, point::Point};

/// A collection of colored primitives that can be rendered to a page.
pub struct PrimitiveScene {
    pub lines: Vec<(Line, Color10)>,
    pub polylines: Vec<(Vec<Point>, Color10)>,
    pub rectangles: Vec<(Rectangle, Color10)>,
    pub debug_text: String,
}

impl PrimitiveScene {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            polylines: Vec::new(),
            rectangles: Vec::new(),
            debug_text: String::new(),
        }
    }

    pub fn add_line(&mut self, line: Line, color: Color10) {
        self.lines.push((line, color));
    }

    /// Adds the curve as a polyline through `samples + 1` points.
    pub fn add_curve(&mut self, curve: &impl CurveLike, color: Color10, samples: usize) {
        let points = rasterize_curve(curve, samples);
        if points.len() >= 2 {
            self.polylines.push((points, color));
        }
    }

    pub fn add_rectangles(&mut self, rectangles: &[Rectangle], color: Color10) {
        self.rectangles
            .extend(rectangles.iter().map(|rect| (*rect, color)));
    }

    pub fn add_debug_text(&mut self, text: String) {
        if !self.debug_text.is_empty() {
            self.debug_text.push('\n');
        }
        self.debug_text.push_str(&text);
    }

    /// Bounds of everything in the scene, or `None` for an empty scene.
    pub fn bounds(&self) -> Option<BoundingBox> {
        let points: Vec<Point> = self
            .lines
            .iter()
            .flat_map(|(line, _)| [line.start(), line.end()])
            .chain(self.polylines.iter().flat_map(|(points, _)| points.iter().copied()))
            .chain(self.rectangles.iter().flat_map(|(rect, _)| rect.corners()))
            .collect();
        BoundingBox::try_from_points(&points).ok()
    }

    pub fn save_to_file(&self, file_path: impl AsRef<Path>) -> AlgebraResult<()> {
        let file_path = file_path.as_ref();
        let context = |err: AlgebraError| {
            err.with_context(format!("Saving scene to {}", file_path.display()))
        };
        render_scene(self, file_path).with_context(&context)
    }
}

impl Default for PrimitiveScene {
    fn default() -> Self {
        Self::new()
    }
}
