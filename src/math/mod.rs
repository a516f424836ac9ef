mod color;
mod ray;
mod vec;

pub use color::RGBColor;
pub use ray::Ray;
pub use vec::Vec3;

pub use std::f32::consts::PI;
pub use std::f32::INFINITY;
