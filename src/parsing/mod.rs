pub mod config;

pub use config::{get_settings, parse_settings, RenderSettings};
