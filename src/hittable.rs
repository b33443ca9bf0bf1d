//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives, the HitRecord
//! handed to shading code, and the flat scene aggregate that resolves the
//! nearest hit among many objects.

use std::sync::Arc;

use glam::Vec3A;

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;

/// Ray-object intersection information.
///
/// Contains the intersection point, oriented surface normal, ray parameter,
/// and the material needed for shading.
#[derive(Debug, Clone)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Vec3A,
    /// Unit surface normal, oriented against the incident ray
    pub normal: Vec3A,
    /// Ray parameter of the intersection
    pub t: f32,
    /// True if the ray struck the geometric front face
    pub front_face: bool,
    /// Material at the hit point. Materials are scene-lifetime singletons
    /// shared between objects, so this clones a pointer, never the data.
    pub material: Arc<Material>,
}

impl HitRecord {
    /// Set the surface normal, orienting it against the incident ray.
    ///
    /// `outward_normal` must be unit length.
    pub fn set_face_normal(&mut self, r: &Ray, outward_normal: Vec3A) {
        self.front_face = r.direction.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so the scene can be shared across
/// render threads without locking.
pub trait Hittable: Sync + Send {
    /// Nearest intersection with `r` strictly inside `ray_t`, if any.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// Collection of objects forming a scene, resolved by linear scan.
///
/// Insertion order is irrelevant to the result: only the closest
/// qualifying hit is returned.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        // Narrow the search interval to the closest t found so far, so a
        // later object can only replace the record with a strictly nearer
        // hit.
        for object in &self.objects {
            if let Some(rec) = object.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::sphere::Sphere;

    fn diffuse() -> Arc<Material> {
        Arc::new(Material::Lambertian {
            albedo: Vec3A::splat(0.5),
        })
    }

    #[test]
    fn face_normal_opposes_incident_ray() {
        let mut rec = HitRecord {
            p: Vec3A::ZERO,
            normal: Vec3A::ZERO,
            t: 1.0,
            front_face: false,
            material: diffuse(),
        };

        let outward = Vec3A::new(0.0, 0.0, 1.0);
        let from_front = Ray::new(Vec3A::new(0.0, 0.0, 2.0), Vec3A::new(0.0, 0.0, -1.0));
        rec.set_face_normal(&from_front, outward);
        assert!(rec.front_face);
        assert_eq!(rec.normal, outward);

        let from_behind = Ray::new(Vec3A::new(0.0, 0.0, -2.0), Vec3A::new(0.0, 0.0, 1.0));
        rec.set_face_normal(&from_behind, outward);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, -outward);
    }

    #[test]
    fn closest_hit_wins_regardless_of_order() {
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let near = Vec3A::new(0.0, 0.0, -2.0);
        let far = Vec3A::new(0.0, 0.0, -5.0);

        for centers in [[near, far], [far, near]] {
            let mut list = HittableList::new();
            for center in centers {
                list.add(Box::new(Sphere::new(center, 0.5, diffuse())));
            }
            let rec = list
                .hit(&r, Interval::new(0.001, f32::INFINITY))
                .expect("ray aimed at both spheres");
            assert!((rec.t - 1.5).abs() < 1e-5);
        }
    }

    #[test]
    fn empty_list_reports_no_hit() {
        let list = HittableList::new();
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(list.hit(&r, Interval::new(0.001, f32::INFINITY)).is_none());
    }
}
