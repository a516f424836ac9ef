use crate::math::*;

/// Reflectance exactly as declared, kept in f64.
///
/// Direct lighting narrows it to an `RGBColor` before use. Reflection shading scales it
/// in f64 and narrows the product, which rounds differently.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Albedo {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Albedo {
    pub const fn new(r: f64, g: f64, b: f64) -> Albedo {
        Albedo { r, g, b }
    }

    pub fn to_rgb(&self) -> RGBColor {
        RGBColor::new(self.r as f32, self.g as f32, self.b as f32)
    }

    /// `albedo * factor` evaluated in f64, one rounding per channel.
    pub fn scaled(&self, factor: f32) -> RGBColor {
        let factor = factor as f64;
        RGBColor::new(
            (self.r * factor) as f32,
            (self.g * factor) as f32,
            (self.b * factor) as f32,
        )
    }
}

impl From<RGBColor> for Albedo {
    fn from(color: RGBColor) -> Self {
        Albedo::new(color.r as f64, color.g as f64, color.b as f64)
    }
}

/// Where the base color of a surface comes from.
#[derive(Copy, Clone, Debug)]
pub enum Surface {
    Solid(Albedo),
    /// unit tiles in the XZ plane, selected by the parity of `floor(x / scale) + floor(z / scale)`
    Checker {
        even: Albedo,
        odd: Albedo,
        scale: f32,
    },
}

impl Surface {
    pub fn albedo(&self, point: Vec3) -> Albedo {
        match *self {
            Surface::Solid(color) => color,
            Surface::Checker { even, odd, scale } => {
                let cx = (point.x / scale).floor() as i64;
                let cz = (point.z / scale).floor() as i64;
                if (cx + cz).rem_euclid(2) == 0 {
                    even
                } else {
                    odd
                }
            }
        }
    }
}

impl From<Albedo> for Surface {
    fn from(albedo: Albedo) -> Self {
        Surface::Solid(albedo)
    }
}

impl From<RGBColor> for Surface {
    fn from(color: RGBColor) -> Self {
        Surface::Solid(color.into())
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Material {
    pub surface: Surface,
    pub shininess: f32,
    pub reflectivity: f32,
}

impl Material {
    pub fn new(surface: impl Into<Surface>, shininess: f32, reflectivity: f32) -> Self {
        Material {
            surface: surface.into(),
            shininess,
            reflectivity,
        }
    }

    pub fn albedo(&self, point: Vec3) -> Albedo {
        self.surface.albedo(point)
    }
}
