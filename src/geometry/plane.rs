use super::SDF;
use crate::math::*;

/// Infinite horizontal plane `y = height`, facing +Y.
///
/// Only exact directly above or below the surface, which is enough for marching
/// since the plane is flat and unbounded.
#[derive(Copy, Clone, Debug)]
pub struct Plane {
    pub height: f32,
}

impl Plane {
    pub const fn new(height: f32) -> Plane {
        Plane { height }
    }
}

impl SDF for Plane {
    fn distance(&self, p: Vec3) -> f32 {
        p.y - self.height
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_floor_plane() {
        let floor = Plane::new(-1.0);
        assert_eq!(floor.distance(Vec3::new(12.0, -1.0, -40.0)), 0.0);
        assert_eq!(floor.distance(Vec3::new(0.0, 1.0, 0.0)), 2.0);
        assert!(floor.distance(Vec3::new(0.0, -3.0, 0.0)) < 0.0);
    }
}
