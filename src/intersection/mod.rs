pub mod curve_line;
