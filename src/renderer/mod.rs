mod film;
mod naive;
mod parallel;
pub mod ppm;

pub use film::Film;
pub use naive::NaiveRenderer;
pub use parallel::ParallelRenderer;

use crate::camera::PinholeCamera;
use crate::integrator::WhittedIntegrator;
use crate::math::RGBColor;
use crate::parsing::config::{RenderSettings, RendererType};
use crate::profile::Profile;
use crate::world::Scene;

use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use anyhow::Context;

pub trait Renderer {
    /// shade every pixel of `film`, returning the ray statistics
    fn render(
        &self,
        integrator: &WhittedIntegrator,
        camera: &PinholeCamera,
        film: &mut Film<RGBColor>,
    ) -> Profile;
}

pub fn construct_renderer(renderer_type: RendererType) -> Box<dyn Renderer> {
    match renderer_type {
        RendererType::Naive => Box::new(NaiveRenderer::new()),
        RendererType::Parallel => Box::new(ParallelRenderer::new()),
    }
}

pub fn render_pixel(
    integrator: &WhittedIntegrator,
    camera: &PinholeCamera,
    x: usize,
    y: usize,
    profile: &mut Profile,
) -> RGBColor {
    let ray = camera.get_ray(x, y);
    integrator.color(ray, profile)
}

/// Render the fixed scene with `settings`.
pub fn render(settings: &RenderSettings) -> (Film<RGBColor>, Profile) {
    let (width, height) = (settings.resolution.width, settings.resolution.height);
    info!(
        "starting {:?} render with film resolution {}x{}",
        settings.renderer, width, height
    );

    let camera = PinholeCamera::from_settings(&settings.camera, settings.resolution);
    let integrator = WhittedIntegrator::new(Scene::default_scene(), settings);
    let renderer = construct_renderer(settings.renderer);

    let now = Instant::now();
    let mut film = Film::new(width, height, RGBColor::BLACK);
    let profile = renderer.render(&integrator, &camera, &mut film);
    let elapsed = now.elapsed().as_secs_f32();

    info!("took {}s", elapsed);
    let threads = match settings.renderer {
        RendererType::Naive => 1,
        RendererType::Parallel => rayon::current_num_threads(),
    };
    profile.pretty_print(elapsed, threads);
    (film, profile)
}

pub fn to_rgb_image(film: &Film<RGBColor>) -> image::RgbImage {
    let mut img: image::RgbImage = image::ImageBuffer::new(film.width as u32, film.height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = image::Rgb(film.at(x as usize, y as usize).to_rgb8());
    }
    img
}

/// Write the film as PPM, plus a PNG copy when one is configured.
pub fn output_film(settings: &RenderSettings, film: &Film<RGBColor>) -> anyhow::Result<()> {
    let now = Instant::now();
    let file = File::create(&settings.filename)
        .with_context(|| format!("failed to create output file {}", settings.filename))?;
    ppm::write_ppm(film, BufWriter::new(file))
        .with_context(|| format!("failed to write {}", settings.filename))?;
    info!("saved {}", settings.filename);

    if let Some(png_filename) = settings.png_filename.as_ref() {
        to_rgb_image(film)
            .save(png_filename)
            .with_context(|| format!("failed to write {}", png_filename))?;
        info!("saved {}", png_filename);
    }
    info!("took {}s to output", now.elapsed().as_secs_f32());
    Ok(())
}
