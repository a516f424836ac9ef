use super::{render_pixel, Film, Renderer};

use crate::camera::PinholeCamera;
use crate::integrator::WhittedIntegrator;
use crate::math::RGBColor;
use crate::profile::Profile;

/// Single threaded, one pixel at a time in row-major order.
#[derive(Default)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }
}

impl Renderer for NaiveRenderer {
    fn render(
        &self,
        integrator: &WhittedIntegrator,
        camera: &PinholeCamera,
        film: &mut Film<RGBColor>,
    ) -> Profile {
        let mut profile = Profile::default();
        for y in 0..film.height {
            for x in 0..film.width {
                let color = render_pixel(integrator, camera, x, y, &mut profile);
                film.write_at(x, y, color);
            }
        }
        profile
    }
}
