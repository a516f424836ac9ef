use crate::math::Vec3;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{ensure, Context};
use serde::Deserialize;

/// Upper bound on reflection recursion, regardless of what a config file asks for.
pub const MAX_BOUNCES_CAP: u8 = 4;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            width: 1920,
            height: 1080,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MarchSettings {
    pub max_steps: u16,
    pub max_distance: f32,
    pub surface_distance: f32,
    pub normal_epsilon: f32,
}

impl Default for MarchSettings {
    fn default() -> Self {
        MarchSettings {
            max_steps: 100,
            max_distance: 100.0,
            surface_distance: 0.001,
            normal_epsilon: 0.001,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ShadowSettings {
    pub min_t: f32,
    pub max_t: f32,
    // penumbra sharpness, higher is harder
    pub softness: f32,
    pub max_steps: u16,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        ShadowSettings {
            min_t: 0.02,
            max_t: 10.0,
            softness: 8.0,
            max_steps: 32,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CameraSettings {
    pub origin: [f32; 3],
    // vfov should be given in degrees
    pub vfov: f32,
    pub zoom: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        CameraSettings {
            origin: [0.0, 1.2, 5.0],
            vfov: 60.0,
            zoom: 1.4,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LightSettings {
    /// direction towards the light, normalized on use
    pub direction: [f32; 3],
}

impl Default for LightSettings {
    fn default() -> Self {
        LightSettings {
            direction: [0.5, 1.0, 0.5],
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[serde(tag = "type")]
pub enum RendererType {
    #[default]
    Naive,
    Parallel,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TOMLRenderSettings {
    pub filename: Option<String>,
    pub png_filename: Option<String>,
    pub resolution: Resolution,
    pub threads: Option<u16>,
    pub max_bounces: Option<u8>,
    pub renderer: RendererType,
    pub march: MarchSettings,
    pub shadow: ShadowSettings,
    pub camera: CameraSettings,
    pub light: LightSettings,
}

impl Default for TOMLRenderSettings {
    fn default() -> Self {
        TOMLRenderSettings {
            filename: None,
            png_filename: None,
            resolution: Resolution::default(),
            threads: None,
            max_bounces: None,
            renderer: RendererType::default(),
            march: MarchSettings::default(),
            shadow: ShadowSettings::default(),
            camera: CameraSettings::default(),
            light: LightSettings::default(),
        }
    }
}

/// Everything the frame driver needs, fixed for the whole render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub filename: String,
    pub png_filename: Option<String>,
    pub resolution: Resolution,
    pub threads: Option<u16>,
    pub max_bounces: u8,
    pub renderer: RendererType,
    pub march: MarchSettings,
    pub shadow: ShadowSettings,
    pub camera: CameraSettings,
    pub light: LightSettings,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings::from(TOMLRenderSettings::default())
    }
}

impl From<TOMLRenderSettings> for RenderSettings {
    fn from(data: TOMLRenderSettings) -> Self {
        RenderSettings {
            filename: data.filename.unwrap_or_else(|| String::from("out.ppm")),
            png_filename: data.png_filename,
            resolution: data.resolution,
            threads: data.threads,
            max_bounces: data.max_bounces.unwrap_or(1),
            renderer: data.renderer,
            march: data.march,
            shadow: data.shadow,
            camera: data.camera,
            light: data.light,
        }
    }
}

impl RenderSettings {
    pub fn light_direction(&self) -> Vec3 {
        Vec3::from(self.light.direction).normalized()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let Resolution { width, height } = self.resolution;
        ensure!(
            width > 0 && height > 0,
            "resolution must be positive, got {}x{}",
            width,
            height
        );
        ensure!(
            (1..=MAX_BOUNCES_CAP).contains(&self.max_bounces),
            "max_bounces is {}, it must be between 1 and {}",
            self.max_bounces,
            MAX_BOUNCES_CAP
        );
        ensure!(self.march.max_steps > 0, "march.max_steps must be at least 1");
        ensure!(
            self.march.surface_distance > 0.0 && self.march.surface_distance.is_finite(),
            "march.surface_distance must be positive"
        );
        ensure!(
            self.march.max_distance > self.march.surface_distance,
            "march.max_distance must exceed march.surface_distance"
        );
        ensure!(
            self.march.normal_epsilon > 0.0,
            "march.normal_epsilon must be positive"
        );
        ensure!(
            self.shadow.min_t > 0.0 && self.shadow.min_t < self.shadow.max_t,
            "shadow range must satisfy 0 < min_t < max_t, got {}..{}",
            self.shadow.min_t,
            self.shadow.max_t
        );
        ensure!(self.shadow.softness > 0.0, "shadow.softness must be positive");
        ensure!(
            self.camera.vfov > 0.0 && self.camera.vfov < 180.0,
            "camera.vfov must be within (0, 180) degrees, got {}",
            self.camera.vfov
        );
        ensure!(self.camera.zoom > 0.0, "camera.zoom must be positive");
        ensure!(
            Vec3::from(self.camera.origin).is_finite(),
            "camera.origin must be finite"
        );
        ensure!(
            Vec3::from(self.light.direction).try_normalized().is_some(),
            "light.direction must be a finite, non-zero vector"
        );
        if let Some(threads) = self.threads {
            ensure!(threads > 0, "threads must be at least 1");
        }
        Ok(())
    }
}

pub fn parse_settings(input: &str) -> anyhow::Result<RenderSettings> {
    let data: TOMLRenderSettings = toml::from_str(input).context("failed to parse settings")?;
    let mut settings = RenderSettings::from(data);
    if settings.threads.is_none() {
        settings.threads = Some(num_cpus::get() as u16);
    }
    settings.validate()?;
    Ok(settings)
}

pub fn get_settings(filepath: impl AsRef<Path>) -> anyhow::Result<RenderSettings> {
    let filepath = filepath.as_ref();
    let mut input = String::new();
    File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read {}", filepath.display()))?;
    info!("loaded settings file {}", filepath.display());
    parse_settings(&input).with_context(|| format!("in settings file {}", filepath.display()))
}
