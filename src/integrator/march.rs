use crate::math::*;
use crate::parsing::config::{MarchSettings, ShadowSettings};
use crate::world::{ObjectId, Scene};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarchResult {
    SurfaceIntersection {
        // distance along the ray
        distance: f32,
        object: ObjectId,
        steps: u16,
    },
    NoIntersection {
        steps: u16,
    },
}

impl MarchResult {
    pub fn steps(&self) -> u16 {
        match *self {
            MarchResult::SurfaceIntersection { steps, .. } => steps,
            MarchResult::NoIntersection { steps } => steps,
        }
    }

    pub fn hit(&self) -> Option<(f32, ObjectId)> {
        match *self {
            MarchResult::SurfaceIntersection {
                distance, object, ..
            } => Some((distance, object)),
            MarchResult::NoIntersection { .. } => None,
        }
    }

    /// Like `hit`, but only surfaces strictly ahead of the origin count. A march that
    /// starts within the surface threshold reports distance 0 and is treated as a miss.
    pub fn hit_ahead(&self) -> Option<(f32, ObjectId)> {
        self.hit().filter(|&(distance, _)| distance > 0.0)
    }
}

/// Sphere trace `ray` through `scene`.
///
/// Each step advances by exactly the scene distance at the current point, which is a
/// lower bound on the distance to any surface, so the march can never tunnel through
/// geometry. A miss is reported when the accumulated distance passes
/// `settings.max_distance` or the step budget runs out.
pub fn march(scene: &Scene, ray: Ray, settings: &MarchSettings) -> MarchResult {
    let mut distance = 0.0;
    for step in 0..settings.max_steps {
        let p = ray.point_at_parameter(distance);
        let sample = scene.evaluate(p);
        if sample.distance < settings.surface_distance {
            return MarchResult::SurfaceIntersection {
                distance,
                object: sample.object,
                steps: step + 1,
            };
        }
        distance += sample.distance;
        if distance > settings.max_distance {
            return MarchResult::NoIntersection { steps: step + 1 };
        }
    }
    MarchResult::NoIntersection {
        steps: settings.max_steps,
    }
}

/// Penumbra factor in [0, 1] for the segment from `origin` towards `light_direction`.
///
/// 1 is fully lit and 0 is fully occluded. In between, the factor tracks how closely the
/// shadow ray grazed geometry relative to how far along it was (`k * d / t`).
pub fn soft_shadow(
    scene: &Scene,
    origin: Vec3,
    light_direction: Vec3,
    settings: &ShadowSettings,
    surface_distance: f32,
) -> f32 {
    let mut res: f32 = 1.0;
    let mut t = settings.min_t;
    for _ in 0..settings.max_steps {
        let h = scene.distance(origin + light_direction * t);
        if h < surface_distance {
            return 0.0;
        }
        res = res.min(settings.softness * h / t);
        t += h;
        if t >= settings.max_t {
            break;
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Plane, Sphere};
    use crate::materials::Material;
    use crate::world::SceneObject;

    fn lone_sphere() -> Scene {
        Scene::new(vec![SceneObject::new(
            Sphere::new(1.0),
            Vec3::new(0.0, 0.0, -5.0),
            Material::new(RGBColor::new(1.0, 1.0, 1.0), 0.0, 0.0),
        )])
        .unwrap()
    }

    #[test]
    fn test_march_hits_sphere_head_on() {
        let scene = Scene::default_scene();
        let settings = MarchSettings::default();
        let origin = Vec3::new(0.0, 1.2, 5.0);
        let center = Vec3::new(0.3, -0.2, -1.5);
        let to_center = center - origin;
        let ray = Ray::new(origin, to_center.normalized());
        let expected = to_center.norm() - 0.9;

        match march(&scene, ray, &settings) {
            MarchResult::SurfaceIntersection {
                distance, object, ..
            } => {
                assert_eq!(object, ObjectId(2));
                assert!(
                    (distance - expected).abs() <= settings.surface_distance,
                    "{} vs {}",
                    distance,
                    expected
                );
            }
            miss => panic!("expected a hit, got {:?}", miss),
        }
    }

    #[test]
    fn test_march_misses_when_aimed_away() {
        let scene = Scene::default_scene();
        let ray = Ray::new(Vec3::new(0.0, 1.2, 5.0), Vec3::new(0.0, 1.0, 1.0).normalized());
        let result = march(&scene, ray, &MarchSettings::default());
        assert!(result.hit().is_none());
        assert!(result.steps() <= 100);
    }

    #[test]
    fn test_march_step_budget() {
        let scene = lone_sphere();
        // head on, the first step lands on the surface and the second confirms it
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
        let settings = MarchSettings {
            max_steps: 1,
            ..MarchSettings::default()
        };
        assert_eq!(
            march(&scene, ray, &settings),
            MarchResult::NoIntersection { steps: 1 }
        );
        let result = march(&scene, ray, &MarchSettings::default());
        assert_eq!(result.steps(), 2);
        let (distance, object) = result.hit().unwrap();
        assert_eq!(object, ObjectId(1));
        assert!((distance - 9.0).abs() < 0.001);
    }

    #[test]
    fn test_march_starting_on_surface() {
        let scene = lone_sphere();
        // origin on the near pole of the sphere, looking away from it
        let ray = Ray::new(Vec3::new(0.0, 0.0, -4.0), Vec3::Z);
        let result = march(&scene, ray, &MarchSettings::default());
        assert_eq!(
            result,
            MarchResult::SurfaceIntersection {
                distance: 0.0,
                object: ObjectId(1),
                steps: 1
            }
        );
        assert!(result.hit().is_some());
        assert_eq!(result.hit_ahead(), None);

        let head_on = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
        let ahead = march(&scene, head_on, &MarchSettings::default());
        assert_eq!(ahead.hit_ahead(), ahead.hit());
    }

    #[test]
    fn test_unoccluded_shadow_is_fully_lit() {
        let scene = lone_sphere();
        let origin = Vec3::new(0.0, 0.0, 10.0);
        let factor = soft_shadow(&scene, origin, Vec3::Y, &ShadowSettings::default(), 0.001);
        assert_eq!(factor, 1.0);
    }

    #[test]
    fn test_occluded_shadow_is_dark() {
        let scene = lone_sphere();
        let origin = Vec3::new(0.0, 0.0, 0.0);
        let factor = soft_shadow(&scene, origin, -Vec3::Z, &ShadowSettings::default(), 0.001);
        assert_eq!(factor, 0.0);
    }

    #[test]
    fn test_grazing_shadow_is_partial() {
        let scene = lone_sphere();
        // passes 0.05 above the top of the sphere
        let origin = Vec3::new(0.0, 1.05, 0.0);
        let factor = soft_shadow(&scene, origin, -Vec3::Z, &ShadowSettings::default(), 0.001);
        assert!(factor > 0.0 && factor < 1.0, "{}", factor);
    }

    #[test]
    fn test_floor_blocks_light_from_below() {
        let material = Material::new(RGBColor::new(1.0, 1.0, 1.0), 0.0, 0.0);
        let scene = Scene::new(vec![SceneObject::new(Plane::new(-1.0), Vec3::ZERO, material)])
            .unwrap();
        let origin = Vec3::new(0.0, -3.0, 0.0);
        let factor = soft_shadow(&scene, origin, Vec3::Y, &ShadowSettings::default(), 0.001);
        assert_eq!(factor, 0.0);
    }
}
