pub mod algebra_error;
pub mod curves;
pub mod intersection;
pub mod primitives;
pub mod rasterize;
pub mod renderer;
pub mod riemann;

pub use riemann::riemann_sum_rectangles;
