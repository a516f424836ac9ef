use super::SDF;
use crate::math::*;

/// Capped cylinder around the local Y axis.
#[derive(Copy, Clone, Debug)]
pub struct Cylinder {
    pub radius: f32,
    pub half_height: f32,
}

impl Cylinder {
    pub const fn new(radius: f32, half_height: f32) -> Cylinder {
        Cylinder {
            radius,
            half_height,
        }
    }
}

impl SDF for Cylinder {
    fn distance(&self, p: Vec3) -> f32 {
        // radial excess is taken in f64 and rounded once
        let dx = (((p.x * p.x + p.z * p.z) as f64).sqrt() - self.radius as f64) as f32;
        let dy = p.y.abs() - self.half_height;
        let (ox, oy) = (dx.max(0.0), dy.max(0.0));
        let outside = (ox * ox + oy * oy).sqrt();
        let inside = dx.max(dy).min(0.0);
        outside + inside
    }
}
