pub use crate::camera::PinholeCamera;
pub use crate::geometry::{Cuboid, Cylinder, Plane, Primitive, Sphere, SDF};
pub use crate::integrator::{march, soft_shadow, MarchResult, WhittedIntegrator};
pub use crate::materials::{Albedo, Material, Surface};
pub use crate::math::*;
pub use crate::parsing::config::{RenderSettings, RendererType, MAX_BOUNCES_CAP};
pub use crate::profile::Profile;
pub use crate::renderer::{output_film, render, Film, Renderer};
pub use crate::world::{ObjectId, Scene, SceneObject, SceneSample};
