//! Pinhole camera for ray generation.
//!
//! Builds an orthonormal view basis once at construction and maps
//! normalized image-plane coordinates to world-space rays.

use glam::Vec3A;

use crate::ray::Ray;

/// Perspective camera with a precomputed view basis.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Camera position in world space (same as lookfrom)
    origin: Vec3A,
    /// World position of the viewport's lower-left corner
    lower_left_corner: Vec3A,
    /// Vector across the viewport's horizontal edge
    horizontal: Vec3A,
    /// Vector up the viewport's vertical edge
    vertical: Vec3A,
}

impl Camera {
    /// Build a camera at `lookfrom` aimed at `lookat`.
    ///
    /// `vfov` is the vertical field of view in degrees; `aspect_ratio` is
    /// width over height. `lookfrom` must differ from `lookat` and `vup`
    /// must not be parallel to the view direction; violating either is a
    /// construction bug, caught by debug assertions rather than producing
    /// NaN rays.
    pub fn new(lookfrom: Vec3A, lookat: Vec3A, vup: Vec3A, vfov: f32, aspect_ratio: f32) -> Self {
        let theta = vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        // Orthonormal view basis; the camera looks down -w.
        let view = lookfrom - lookat;
        debug_assert!(view.length_squared() > 0.0, "lookfrom equals lookat");
        let w = view.normalize();
        let u_raw = vup.cross(w);
        debug_assert!(
            u_raw.length_squared() > 1e-8,
            "vup is parallel to the view direction"
        );
        let u = u_raw.normalize();
        let v = w.cross(u);

        let origin = lookfrom;
        let horizontal = viewport_width * u;
        let vertical = viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    /// Generate the ray through image-plane coordinates `(s, t)` in [0,1]².
    ///
    /// `s` runs left to right, `t` bottom to top. The returned direction is
    /// unit length.
    pub fn get_ray(&self, s: f32, t: f32) -> Ray {
        let direction =
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin;
        Ray::new(self.origin, direction.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(
            Vec3A::ZERO,
            Vec3A::new(0.0, 0.0, -1.0),
            Vec3A::new(0.0, 1.0, 0.0),
            90.0,
            1.0,
        )
    }

    #[test]
    fn center_ray_points_at_look_target() {
        let r = camera().get_ray(0.5, 0.5);
        assert_eq!(r.origin, Vec3A::ZERO);
        assert!((r.direction - Vec3A::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn ray_directions_are_normalized() {
        let cam = camera();
        for (s, t) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.25, 0.75)] {
            let r = cam.get_ray(s, t);
            assert!((r.direction.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn corners_span_the_field_of_view() {
        // 90 degree vfov at aspect 1: the viewport corners sit one unit off
        // axis in each direction at the focal plane.
        let bottom_left = camera().get_ray(0.0, 0.0);
        let expected = Vec3A::new(-1.0, -1.0, -1.0).normalize();
        assert!((bottom_left.direction - expected).length() < 1e-5);
    }
}
