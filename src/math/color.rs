use crate::math::Vec3;

use std::ops::{Add, AddAssign, Mul};

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct RGBColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGBColor {
    pub const fn new(r: f32, g: f32, b: f32) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const BLACK: RGBColor = RGBColor::new(0.0, 0.0, 0.0);

    /// per-channel upper clamp. channels are non-negative by construction so there is no lower bound.
    pub fn min(&self, max: f32) -> RGBColor {
        RGBColor::new(self.r.min(max), self.g.min(max), self.b.min(max))
    }

    /// truncating conversion to 8 bits per channel, `(c * 255) as u8`
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for RGBColor {
    fn add_assign(&mut self, other: RGBColor) {
        *self = *self + other;
    }
}

impl Mul<f32> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f32) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl Mul<RGBColor> for f32 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        other * self
    }
}

impl From<Vec3> for RGBColor {
    fn from(v: Vec3) -> RGBColor {
        RGBColor::new(v.x, v.y, v.z)
    }
}

impl From<RGBColor> for Vec3 {
    fn from(c: RGBColor) -> Vec3 {
        Vec3::new(c.r, c.g, c.b)
    }
}

impl From<[f32; 3]> for RGBColor {
    fn from(v: [f32; 3]) -> RGBColor {
        RGBColor::new(v[0], v[1], v[2])
    }
}
