//! Sphere primitive for ray tracing.
//!
//! Implements ray-sphere intersection via the half-b form of the quadratic
//! formula.

use std::sync::Arc;

use glam::Vec3A;

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;

/// Sphere defined by center, radius, and a shared material.
///
/// The radius may be negative: the surface is unchanged but the outward
/// normal points inward. Nesting a negative-radius sphere inside a glass
/// sphere with the same material models a hollow bubble.
#[derive(Clone)]
pub struct Sphere {
    center: Vec3A,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3A, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = self.center - r.origin;
        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = r.at(root);
        let outward_normal = (p - self.center) / self.radius;
        let mut rec = HitRecord {
            p,
            normal: outward_normal,
            t: root,
            front_face: true,
            material: Arc::clone(&self.material),
        };
        rec.set_face_normal(r, outward_normal);

        Some(rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glass() -> Arc<Material> {
        Arc::new(Material::Dielectric {
            refraction_index: 1.5,
        })
    }

    #[test]
    fn center_shot_hits_at_distance_minus_radius() {
        let sphere = Sphere::new(Vec3A::new(0.0, 0.0, -3.0), 0.5, glass());
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));

        let rec = sphere
            .hit(&r, Interval::new(0.001, f32::INFINITY))
            .expect("ray aimed at center");
        assert!((rec.t - 2.5).abs() < 1e-5);
        assert!(rec.front_face);
        assert!((rec.normal - Vec3A::new(0.0, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn ray_pointing_away_misses() {
        let sphere = Sphere::new(Vec3A::new(0.0, 0.0, -3.0), 0.5, glass());
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, 1.0));
        assert!(sphere.hit(&r, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn hit_from_inside_takes_far_root() {
        let sphere = Sphere::new(Vec3A::ZERO, 2.0, glass());
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, 1.0));

        let rec = sphere
            .hit(&r, Interval::new(0.001, f32::INFINITY))
            .expect("origin is inside the sphere");
        assert!((rec.t - 2.0).abs() < 1e-5);
        // Struck from inside: the stored normal opposes the ray.
        assert!(!rec.front_face);
        assert!((rec.normal - Vec3A::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn negative_radius_flips_face_orientation() {
        // Entering a hollow shell from outside looks like exiting glass.
        let shell = Sphere::new(Vec3A::ZERO, -0.45, glass());
        let r = Ray::new(Vec3A::new(0.0, 0.0, -2.0), Vec3A::new(0.0, 0.0, 1.0));

        let rec = shell
            .hit(&r, Interval::new(0.001, f32::INFINITY))
            .expect("ray aimed at shell");
        assert!((rec.t - 1.55).abs() < 1e-5);
        assert!(!rec.front_face);
        assert!((rec.normal - Vec3A::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn interval_upper_bound_rejects_far_hit() {
        let sphere = Sphere::new(Vec3A::new(0.0, 0.0, -3.0), 0.5, glass());
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&r, Interval::new(0.001, 2.0)).is_none());
    }
}
