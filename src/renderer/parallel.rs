use super::{render_pixel, Film, Renderer};

use crate::camera::PinholeCamera;
use crate::integrator::WhittedIntegrator;
use crate::math::RGBColor;
use crate::profile::Profile;

use rayon::prelude::*;

/// Splits the film into scanlines and shades them on the rayon pool.
/// each scanline is owned by exactly one task, so the film comes out identical to the
/// naive renderer's.
#[derive(Default)]
pub struct ParallelRenderer {}

impl ParallelRenderer {
    pub fn new() -> ParallelRenderer {
        ParallelRenderer {}
    }
}

impl Renderer for ParallelRenderer {
    fn render(
        &self,
        integrator: &WhittedIntegrator,
        camera: &PinholeCamera,
        film: &mut Film<RGBColor>,
    ) -> Profile {
        let width = film.width;
        film.buffer
            .par_chunks_mut(width)
            .enumerate()
            .map(|(y, row)| {
                let mut profile = Profile::default();
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = render_pixel(integrator, camera, x, y, &mut profile);
                }
                profile
            })
            .reduce(Profile::default, |a, b| a.combine(b))
    }
}
