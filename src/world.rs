use crate::geometry::*;
use crate::materials::{Albedo, Material, Surface};
use crate::math::*;

use std::fmt;

use anyhow::ensure;

/// 1-based identifier of a scene object, assigned in declaration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u8);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug)]
pub struct SceneObject {
    pub primitive: Primitive,
    /// world space position of the primitive's local origin
    pub center: Vec3,
    pub material: Material,
}

impl SceneObject {
    pub fn new(primitive: impl Into<Primitive>, center: Vec3, material: Material) -> Self {
        SceneObject {
            primitive: primitive.into(),
            center,
            material,
        }
    }

    /// distance from a world space point, found by moving the point into the local frame.
    pub fn distance(&self, p: Vec3) -> f32 {
        self.primitive.distance(p - self.center)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneSample {
    pub distance: f32,
    pub object: ObjectId,
}

#[derive(Clone, Debug)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new(objects: Vec<SceneObject>) -> anyhow::Result<Self> {
        ensure!(!objects.is_empty(), "a scene needs at least one object");
        ensure!(
            objects.len() <= u8::MAX as usize,
            "too many scene objects: {}",
            objects.len()
        );
        Ok(Scene { objects })
    }

    /// The fixed scene: green cylinder on the left, red sphere in the middle behind,
    /// blue box on the right, all standing on a checkered floor at y = -1.
    pub fn default_scene() -> Self {
        let objects = vec![
            SceneObject::new(
                Cylinder::new(0.7, 1.5),
                Vec3::new(-2.0, 0.5, 1.0),
                Material::new(Albedo::new(0.2, 0.6, 0.3), 0.6, 0.4),
            ),
            SceneObject::new(
                Sphere::new(0.9),
                Vec3::new(0.3, -0.2, -1.5),
                Material::new(Albedo::new(0.7, 0.3, 0.3), 0.8, 0.5),
            ),
            SceneObject::new(
                Cuboid::new(Vec3::splat(0.85)),
                Vec3::new(2.2, -0.2, 0.5),
                Material::new(Albedo::new(0.3, 0.3, 0.7), 0.7, 0.45),
            ),
            SceneObject::new(
                Plane::new(-1.0),
                Vec3::ZERO,
                Material::new(
                    Surface::Checker {
                        even: Albedo::new(0.8, 0.8, 0.8),
                        odd: Albedo::new(0.5, 0.2, 0.2),
                        scale: 1.0,
                    },
                    0.9,
                    0.3,
                ),
            ),
        ];
        Scene { objects }
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> &SceneObject {
        &self.objects[id.0 as usize - 1]
    }

    pub fn material(&self, id: ObjectId) -> &Material {
        &self.object(id).material
    }

    /// minimum distance over all objects, along with the object that produced it.
    /// ties resolve to the earliest declared object.
    pub fn evaluate(&self, p: Vec3) -> SceneSample {
        let mut closest = SceneSample {
            distance: self.objects[0].distance(p),
            object: ObjectId(1),
        };
        for (index, object) in self.objects.iter().enumerate().skip(1) {
            let distance = object.distance(p);
            if distance < closest.distance {
                closest = SceneSample {
                    distance,
                    object: ObjectId(index as u8 + 1),
                };
            }
        }
        closest
    }

    pub fn distance(&self, p: Vec3) -> f32 {
        self.evaluate(p).distance
    }

    /// forward difference gradient. the one-sided offset biases the normal slightly,
    /// which is part of how the image looks, so don't switch this to central differences.
    pub fn normal(&self, p: Vec3, epsilon: f32) -> Vec3 {
        let d = self.distance(p);
        Vec3::new(
            self.distance(Vec3::new(p.x + epsilon, p.y, p.z)) - d,
            self.distance(Vec3::new(p.x, p.y + epsilon, p.z)) - d,
            self.distance(Vec3::new(p.x, p.y, p.z + epsilon)) - d,
        )
        .normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_ids() {
        let scene = Scene::default_scene();
        assert_eq!(scene.objects().len(), 4);
        let kinds: Vec<&str> = scene.objects().iter().map(|o| o.primitive.kind()).collect();
        assert_eq!(kinds, vec!["cylinder", "sphere", "box", "plane"]);

        // centers of each object are inside that object
        assert_eq!(scene.evaluate(Vec3::new(-2.0, 0.5, 1.0)).object, ObjectId(1));
        assert_eq!(scene.evaluate(Vec3::new(0.3, -0.2, -1.5)).object, ObjectId(2));
        assert_eq!(scene.evaluate(Vec3::new(2.2, -0.2, 0.5)).object, ObjectId(3));
        assert_eq!(scene.evaluate(Vec3::new(0.0, -5.0, 20.0)).object, ObjectId(4));
        assert!(scene.distance(Vec3::new(0.3, -0.2, -1.5)) < 0.0);
    }

    #[test]
    fn test_evaluate_is_true_minimum() {
        let scene = Scene::default_scene();
        let p = Vec3::new(0.7, 0.4, 2.0);
        let expected = scene
            .objects()
            .iter()
            .map(|o| o.distance(p))
            .fold(INFINITY, f32::min);
        assert_eq!(scene.distance(p), expected);
    }

    #[test]
    fn test_tie_goes_to_earlier_object() {
        let material = Material::new(RGBColor::new(1.0, 1.0, 1.0), 0.0, 0.0);
        // two unit spheres mirrored about the origin are equally far from it
        let scene = Scene::new(vec![
            SceneObject::new(Sphere::new(1.0), Vec3::new(3.0, 0.0, 0.0), material),
            SceneObject::new(Sphere::new(1.0), Vec3::new(-3.0, 0.0, 0.0), material),
        ])
        .unwrap();
        let sample = scene.evaluate(Vec3::ZERO);
        assert_eq!(sample.object, ObjectId(1));
        assert_eq!(sample.distance, 2.0);

        // same geometry declared the other way round still picks the first declared one
        let scene = Scene::new(vec![
            SceneObject::new(Sphere::new(1.0), Vec3::new(-3.0, 0.0, 0.0), material),
            SceneObject::new(Sphere::new(1.0), Vec3::new(3.0, 0.0, 0.0), material),
            SceneObject::new(Plane::new(-2.0), Vec3::ZERO, material),
        ])
        .unwrap();
        assert_eq!(scene.evaluate(Vec3::ZERO).object, ObjectId(1));
    }

    #[test]
    fn test_empty_scene_is_rejected() {
        assert!(Scene::new(Vec::new()).is_err());
    }

    #[test]
    fn test_plane_normal() {
        let scene = Scene::default_scene();
        for p in [
            Vec3::new(0.3, -1.0, 7.0),
            Vec3::new(-6.0, -1.0, -8.0),
            Vec3::new(9.5, -1.0, 3.25),
        ] {
            let n = scene.normal(p, 0.001);
            assert!(n.x.abs() < 1e-4, "{:?}", n);
            assert!((n.y - 1.0).abs() < 1e-4, "{:?}", n);
            assert!(n.z.abs() < 1e-4, "{:?}", n);
        }
    }

    #[test]
    fn test_sphere_normal_points_outward() {
        let scene = Scene::default_scene();
        let top = Vec3::new(0.3, 0.7, -1.5);
        let n = scene.normal(top, 0.001);
        assert!(n.y > 0.99, "{:?}", n);
    }
}
