//! Scene assembly: geometry, materials, and lights bundled for rendering.
//!
//! A scene is built once before rendering and never mutated afterwards,
//! which is what lets the renderer share it lock-free across threads.

use std::sync::Arc;

use glam::Vec3A;

use crate::hittable::HittableList;
use crate::light::PointLight;
use crate::material::Material;
use crate::sphere::Sphere;

/// Read-only scene handed to the renderer.
pub struct Scene {
    /// Intersectable geometry.
    pub world: HittableList,
    /// Point lights sampled by the direct-illumination term.
    pub lights: Vec<PointLight>,
}

/// Build the reference scene: a yellow ground sphere, a blue diffuse
/// sphere, a hollow glass sphere, and a polished metal sphere, lit by a
/// single point light above and to the right.
pub fn simple_scene() -> Scene {
    let mut world = HittableList::new();

    let material_ground = Arc::new(Material::Lambertian {
        albedo: Vec3A::new(0.8, 0.8, 0.0),
    });
    let material_center = Arc::new(Material::Lambertian {
        albedo: Vec3A::new(0.1, 0.2, 0.5),
    });
    let material_left = Arc::new(Material::Dielectric {
        refraction_index: 1.5,
    });
    let material_right = Arc::new(Material::Metal {
        albedo: Vec3A::new(0.8, 0.6, 0.2),
        fuzz: 0.0,
    });

    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, -100.5, -1.0),
        100.0,
        material_ground,
    )));
    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, 0.0, -1.0),
        0.5,
        material_center,
    )));
    // Outer glass surface plus an inner negative-radius shell sharing the
    // same material: a hollow bubble.
    world.add(Box::new(Sphere::new(
        Vec3A::new(-1.0, 0.0, -1.0),
        0.5,
        Arc::clone(&material_left),
    )));
    world.add(Box::new(Sphere::new(
        Vec3A::new(-1.0, 0.0, -1.0),
        -0.45,
        material_left,
    )));
    world.add(Box::new(Sphere::new(
        Vec3A::new(1.0, 0.0, -1.0),
        0.5,
        material_right,
    )));

    let lights = vec![PointLight::new(
        Vec3A::new(5.0, 5.0, -2.0),
        Vec3A::new(6.0, 6.0, 6.0),
    )];

    Scene { world, lights }
}
