//! Recursive radiance estimator.
//!
//! Combines nearest-hit lookup, a shadow-ray direct term over the point
//! lights, and an indirect term from recursive material scattering, bounded
//! by a ray depth counter. Rays that escape the scene pick up a vertical
//! sky gradient standing in for an environment light.

use rand::Rng;

use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::light::PointLight;
use crate::material::Color;
use crate::ray::Ray;

/// Intersection epsilon shared by primary and shadow rays; keeps a bounce
/// from re-hitting the surface it just left ("shadow acne").
const T_MIN: f32 = 0.001;

/// Estimate the radiance arriving along `r`.
///
/// `depth` is the number of bounces still allowed; at zero the path is
/// truncated to black. Truncation biases the estimate, but a default of 15
/// bounces leaves the error far below sampling noise.
pub fn ray_color(
    r: &Ray,
    world: &dyn Hittable,
    lights: &[PointLight],
    depth: u32,
    rng: &mut impl Rng,
) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(r, Interval::new(T_MIN, f32::INFINITY)) else {
        return background(r);
    };

    // Direct illumination: one shadow ray per point light.
    let mut direct = Color::ZERO;
    for light in lights {
        let to_light = light.position - rec.p;
        let dist_squared = to_light.length_squared();
        let light_dir = to_light.normalize();

        let shadow_ray = Ray::new(rec.p, light_dir);
        let shadow_range = Interval::new(T_MIN, dist_squared.sqrt() - T_MIN);
        if world.hit(&shadow_ray, shadow_range).is_none() {
            // Lambert's cosine law with inverse-square falloff.
            let n_dot_l = rec.normal.dot(light_dir).max(0.0);
            direct += rec.material.albedo() * (light.intensity / dist_squared) * n_dot_l;
        }
    }

    // Indirect illumination via material scattering.
    let indirect = match rec.material.scatter(r, &rec, rng) {
        Some((scattered, attenuation)) => {
            attenuation * ray_color(&scattered, world, lights, depth - 1, rng)
        }
        None => Color::ZERO,
    };

    direct + indirect
}

/// Sky gradient for rays that leave the scene: white at the horizon
/// blending to blue overhead.
pub fn background(r: &Ray) -> Color {
    let unit_direction = r.direction.normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    (1.0 - t) * Color::new(1.0, 1.0, 1.0) + t * Color::new(0.5, 0.7, 1.0)
}
