use crate::math::*;
use crate::parsing::config::{CameraSettings, Resolution};

/// Pinhole camera looking down -Z with no rotation.
///
/// The aspect ratio and zoom are f32 values, the projection itself is evaluated in f64
/// and each direction component is narrowed once before normalizing.
#[derive(Debug, Clone)]
pub struct PinholeCamera {
    pub origin: Vec3,
    width: usize,
    height: usize,
    // tan(vfov / 2)
    tan_half_fov: f64,
    aspect_ratio: f32,
    zoom: f32,
}

impl PinholeCamera {
    pub fn new(
        origin: Vec3,
        vertical_fov: f32, // in degrees
        zoom: f32,
        width: usize,
        height: usize,
    ) -> PinholeCamera {
        let aspect_ratio = width as f32 / height as f32;
        let tan_half_fov = ((vertical_fov / 2.0) as f64 * std::f64::consts::PI / 180.0).tan();
        debug!(
            "constructing pinhole camera at {:?}, vfov {}, zoom {}, aspect ratio {}",
            origin, vertical_fov, zoom, aspect_ratio
        );
        PinholeCamera {
            origin,
            width,
            height,
            tan_half_fov,
            aspect_ratio,
            zoom,
        }
    }

    pub fn from_settings(settings: &CameraSettings, resolution: Resolution) -> PinholeCamera {
        PinholeCamera::new(
            Vec3::from(settings.origin),
            settings.vfov,
            settings.zoom,
            resolution.width,
            resolution.height,
        )
    }

    /// ray through the center of pixel (x, y), with y = 0 at the top row.
    pub fn get_ray(&self, x: usize, y: usize) -> Ray {
        let u = (x as f64 + 0.5) / self.width as f64;
        let v = (y as f64 + 0.5) / self.height as f64;
        // left to right product order matters for the last bit
        let px = (2.0 * u - 1.0) * self.tan_half_fov * self.aspect_ratio as f64 * self.zoom as f64;
        let py = (1.0 - 2.0 * v) * self.tan_half_fov * self.zoom as f64;
        let direction = Vec3::new(px as f32, py as f32, -1.0).normalized();
        Ray::new(self.origin, direction)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn reference_camera() -> PinholeCamera {
        PinholeCamera::from_settings(&CameraSettings::default(), Resolution::default())
    }

    #[test]
    fn test_center_ray_looks_down_negative_z() {
        let camera = reference_camera();
        let ray = camera.get_ray(960, 540);
        assert_eq!(ray.origin, Vec3::new(0.0, 1.2, 5.0));
        assert!(ray.direction.z < -0.999);
        assert!((ray.direction.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_corners_are_symmetric() {
        let camera = reference_camera();
        let top_left = camera.get_ray(0, 0).direction;
        let bottom_right = camera.get_ray(1919, 1079).direction;
        assert!(top_left.x < 0.0 && top_left.y > 0.0);
        assert!((top_left.x + bottom_right.x).abs() < 1e-6);
        assert!((top_left.y + bottom_right.y).abs() < 1e-6);
        assert!((top_left.z - bottom_right.z).abs() < 1e-6);
    }

    #[test]
    fn test_direction_components() {
        let camera = reference_camera();
        let (x, y) = (1700, 130);
        let tan = (30.0f64 * std::f64::consts::PI / 180.0).tan();
        let aspect = (1920.0f32 / 1080.0) as f64;
        let zoom = 1.4f32 as f64;
        let px = ((2.0 * ((x as f64 + 0.5) / 1920.0) - 1.0) * tan * aspect * zoom) as f32;
        let py = ((1.0 - 2.0 * ((y as f64 + 0.5) / 1080.0)) * tan * zoom) as f32;
        let expected = Vec3::new(px, py, -1.0).normalized();
        assert_eq!(camera.get_ray(x, y).direction, expected);
    }

    #[test]
    fn test_zoom_widens_view() {
        let narrow = PinholeCamera::new(Vec3::ZERO, 60.0, 1.0, 100, 100);
        let wide = PinholeCamera::new(Vec3::ZERO, 60.0, 1.4, 100, 100);
        assert!(wide.get_ray(0, 50).direction.x < narrow.get_ray(0, 50).direction.x);
    }
}
