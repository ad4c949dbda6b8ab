use crate::primitives::{bounding_box::BoundingBox, line::Line, point::Point};

// CurveLike is the geometry interface the rectangle sampler consumes.
// Implementations are free in how they represent the curve; only these queries are used.
pub trait CurveLike {
    // Returns a bounding box that contains the curve.
    fn bounding_box(&self) -> BoundingBox;

    // Intersection points between the curve and the line, ordered by distance from the line start.
    // With `extend` the line is treated as unbounded and the curve continues past its domain
    // according to its extension policy.
    // Graph curves y = f(x) only answer vertical lines; any other line yields no points.
    fn intersect_line(&self, line: &Line, extend: bool) -> Vec<Point>;

    // Returns a copy of the curve shifted by `offset`.
    fn translate(&self, offset: Point) -> Self
    where
        Self: Sized;
}
