use super::SDF;
use crate::math::*;

/// Axis aligned box centered on the local origin.
#[derive(Copy, Clone, Debug)]
pub struct Cuboid {
    pub half_extents: Vec3,
}

impl Cuboid {
    pub const fn new(half_extents: Vec3) -> Cuboid {
        Cuboid { half_extents }
    }
}

impl SDF for Cuboid {
    // exact both inside and outside.
    // the outside and inside parts are summed in f64 and rounded once.
    fn distance(&self, p: Vec3) -> f32 {
        let q = p.abs() - self.half_extents;
        let outside = (q.max(Vec3::ZERO).norm_squared() as f64).sqrt();
        (outside + q.max_component().min(0.0) as f64) as f32
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cuboid_distance() {
        let cuboid = Cuboid::new(Vec3::splat(0.85));
        // center is as deep as the nearest face
        assert!((cuboid.distance(Vec3::ZERO) + 0.85).abs() < 1e-6);
        // on a face
        assert!(cuboid.distance(Vec3::new(0.85, 0.1, -0.2)).abs() < 1e-6);
        // straight out from a face
        assert!((cuboid.distance(Vec3::new(2.0, 0.0, 0.0)) - 1.15).abs() < 1e-5);
        // diagonal from a corner
        let corner = cuboid.distance(Vec3::new(1.85, 1.85, 0.0));
        assert!((corner - 2.0f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_cuboid_single_rounding() {
        let cuboid = Cuboid::new(Vec3::splat(0.85));
        let p = Vec3::new(1.3, 0.2, 0.9);
        let q = p.abs() - cuboid.half_extents;
        let expected = ((q.max(Vec3::ZERO).norm_squared() as f64).sqrt()
            + q.max_component().min(0.0) as f64) as f32;
        assert_eq!(cuboid.distance(p), expected);
    }
}
