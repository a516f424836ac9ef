use crate::materials::Material;
use crate::math::*;

/// ambient term. direct shading rounds it to f32 first, reflection shading does not.
pub const AMBIENT: f64 = 0.03;
pub const DIFFUSE_WEIGHT: f64 = 0.6;
pub const SPECULAR_WEIGHT: f64 = 0.8;
pub const SPECULAR_EXPONENT: f64 = 32.0;
/// what a reflection ray sees when it escapes the scene
pub const SKY: RGBColor = RGBColor::new(0.02, 0.02, 0.03);
/// what a camera ray sees when it escapes the scene
pub const BACKGROUND: RGBColor = RGBColor::BLACK;

/// Ambient + Blinn-Phong shading of a surface point, blended with an already shaded
/// reflection color. Does not trace anything itself.
///
/// `light_direction` points towards the light, `view_direction` is the direction of the
/// incoming ray. Both must be unit length.
///
/// Geometry terms are f32. The weighted sum is accumulated in f64 and narrowed once per
/// channel.
pub fn shade(
    point: Vec3,
    material: &Material,
    normal: Vec3,
    light_direction: Vec3,
    view_direction: Vec3,
    reflection: RGBColor,
    shadow: f32,
) -> RGBColor {
    let albedo = material.albedo(point).to_rgb();

    let diffuse = (normal * light_direction).max(0.0) * shadow;

    let half = (light_direction - view_direction).normalized();
    let specular = ((normal * half).max(0.0) as f64).powf(SPECULAR_EXPONENT)
        * material.shininess as f64
        * shadow as f64;
    let specular = specular as f32;

    let lit = (AMBIENT as f32) as f64 + diffuse as f64 * DIFFUSE_WEIGHT;
    let highlight = specular as f64 * SPECULAR_WEIGHT;
    let channel = |base: f32, reflected: f32| {
        (base as f64 * lit + highlight + (reflected * material.reflectivity) as f64) as f32
    };
    RGBColor::new(
        channel(albedo.r, reflection.r),
        channel(albedo.g, reflection.g),
        channel(albedo.b, reflection.b),
    )
    .min(1.0)
}

/// Cheaper shading used at the end of a reflection chain: diffuse + ambient only, no
/// highlight and no further reflection.
pub fn shade_reflection(
    point: Vec3,
    material: &Material,
    normal: Vec3,
    light_direction: Vec3,
    shadow: f32,
) -> RGBColor {
    let diffuse = ((normal * light_direction).max(0.0) * shadow) as f64 * DIFFUSE_WEIGHT + AMBIENT;
    material.albedo(point).scaled(diffuse as f32)
}
