pub mod march;
pub mod shading;

pub use march::{march, soft_shadow, MarchResult};

use crate::math::*;
use crate::parsing::config::{MarchSettings, RenderSettings, ShadowSettings};
use crate::profile::Profile;
use crate::world::{ObjectId, Scene};

use shading::{shade, shade_reflection, BACKGROUND, SKY};

/// Direct lighting with soft shadows plus a fixed number of mirror bounces.
#[derive(Clone, Debug)]
pub struct WhittedIntegrator {
    pub scene: Scene,
    pub march: MarchSettings,
    pub shadow: ShadowSettings,
    /// unit vector towards the light
    pub light_direction: Vec3,
    /// number of reflection rays along a camera path, at least 1
    pub max_bounces: u8,
}

impl WhittedIntegrator {
    pub fn new(scene: Scene, settings: &RenderSettings) -> Self {
        WhittedIntegrator {
            scene,
            march: settings.march,
            shadow: settings.shadow,
            light_direction: settings.light_direction(),
            max_bounces: settings.max_bounces.max(1),
        }
    }

    /// color seen along a camera ray
    pub fn color(&self, ray: Ray, profile: &mut Profile) -> RGBColor {
        profile.camera_rays += 1;
        let result = march(&self.scene, ray, &self.march);
        profile.march_steps += result.steps() as usize;
        match result.hit_ahead() {
            Some((distance, object)) => {
                self.surface_color(ray, distance, object, self.max_bounces, profile)
            }
            None => {
                profile.env_hits += 1;
                BACKGROUND
            }
        }
    }

    /// Which object a camera ray hits first, without shading it.
    pub fn first_hit(&self, ray: Ray) -> Option<(f32, ObjectId)> {
        march(&self.scene, ray, &self.march).hit_ahead()
    }

    // bounces_left counts the reflection rays still allowed from this hit.
    // at zero the surface gets the cheap diffuse-only shading and nothing else is traced.
    fn surface_color(
        &self,
        ray: Ray,
        distance: f32,
        object: ObjectId,
        bounces_left: u8,
        profile: &mut Profile,
    ) -> RGBColor {
        let point = ray.point_at_parameter(distance);
        let normal = self.scene.normal(point, self.march.normal_epsilon);
        let material = self.scene.material(object);

        // lift off the surface so secondary rays don't start inside it
        let offset_origin = point + normal * (self.march.surface_distance * 2.0);

        profile.shadow_rays += 1;
        let shadow = soft_shadow(
            &self.scene,
            offset_origin,
            self.light_direction,
            &self.shadow,
            self.march.surface_distance,
        );

        if bounces_left == 0 {
            return shade_reflection(point, material, normal, self.light_direction, shadow);
        }

        profile.reflection_rays += 1;
        let reflected = Ray::new(offset_origin, ray.direction.reflect(normal));
        let result = march(&self.scene, reflected, &self.march);
        profile.march_steps += result.steps() as usize;
        let reflection = match result.hit_ahead() {
            Some((reflected_distance, reflected_object)) => self.surface_color(
                reflected,
                reflected_distance,
                reflected_object,
                bounces_left - 1,
                profile,
            ),
            None => {
                profile.env_hits += 1;
                SKY
            }
        };

        debug_assert!(reflection.is_finite(), "{:?} at {:?}", reflection, point);
        shade(
            point,
            material,
            normal,
            self.light_direction,
            ray.direction,
            reflection,
            shadow,
        )
    }
}
