use super::SDF;
use crate::math::*;

#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    pub radius: f32,
}

impl Sphere {
    pub const fn new(radius: f32) -> Sphere {
        Sphere { radius }
    }
}

impl SDF for Sphere {
    fn distance(&self, p: Vec3) -> f32 {
        p.norm() - self.radius
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sphere_sign() {
        let sphere = Sphere::new(0.9);
        assert_eq!(sphere.distance(Vec3::ZERO), -0.9);
        assert!(sphere.distance(Vec3::new(0.0, 0.9, 0.0)).abs() < 1e-6);
        assert!((sphere.distance(Vec3::new(3.0, 0.0, 4.0)) - 4.1).abs() < 1e-5);
    }
}
