pub mod bounding_box;
pub mod color;
pub mod line;
pub mod point;
pub mod primitive_scene;
pub mod tolerance;
