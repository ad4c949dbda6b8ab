pub mod curve_like;
pub mod extension_policy;
pub mod function_curve;
pub mod polyline_curve;
