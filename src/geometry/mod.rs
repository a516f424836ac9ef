mod cuboid;
mod cylinder;
mod plane;
mod sphere;

pub use cuboid::Cuboid;
pub use cylinder::Cylinder;
pub use plane::Plane;
pub use sphere::Sphere;

use crate::math::*;

/// Signed distance to a surface, evaluated in the primitive's local frame.
/// negative inside, zero on the surface, positive outside.
/// must never overestimate the distance to the surface, since marching steps by it.
pub trait SDF {
    fn distance(&self, p: Vec3) -> f32;
}

#[derive(Copy, Clone, Debug)]
pub enum Primitive {
    Sphere(Sphere),
    Cuboid(Cuboid),
    Cylinder(Cylinder),
    Plane(Plane),
}

impl From<Sphere> for Primitive {
    fn from(data: Sphere) -> Self {
        Primitive::Sphere(data)
    }
}

impl From<Cuboid> for Primitive {
    fn from(data: Cuboid) -> Self {
        Primitive::Cuboid(data)
    }
}

impl From<Cylinder> for Primitive {
    fn from(data: Cylinder) -> Self {
        Primitive::Cylinder(data)
    }
}

impl From<Plane> for Primitive {
    fn from(data: Plane) -> Self {
        Primitive::Plane(data)
    }
}

impl SDF for Primitive {
    fn distance(&self, p: Vec3) -> f32 {
        match self {
            Primitive::Sphere(inner) => inner.distance(p),
            Primitive::Cuboid(inner) => inner.distance(p),
            Primitive::Cylinder(inner) => inner.distance(p),
            Primitive::Plane(inner) => inner.distance(p),
        }
    }
}

impl Primitive {
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Cuboid(_) => "box",
            Primitive::Cylinder(_) => "cylinder",
            Primitive::Plane(_) => "plane",
        }
    }
}
