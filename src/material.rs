//! Material system for ray tracing.
//!
//! A closed set of three scattering models: Lambertian (diffuse), Metal
//! (specular with roughness), and Dielectric (refractive glass). Scattering
//! maps an incoming ray and hit record to an outgoing ray plus a color
//! attenuation, or signals absorption by returning `None`.

use glam::Vec3A;
use rand::Rng;

use crate::hittable::HitRecord;
use crate::random;
use crate::ray::Ray;

/// RGB color in linear light.
pub type Color = Vec3A;

/// Surface material variants.
#[derive(Debug, Clone, Copy)]
pub enum Material {
    /// Lambertian diffuse material for matte surfaces.
    Lambertian {
        /// Fractional reflectance per color channel.
        albedo: Color,
    },

    /// Metallic material with specular reflection.
    Metal {
        /// Tint applied to reflected light.
        albedo: Color,
        /// Surface roughness in [0, 1] (0.0 = perfect mirror).
        fuzz: f32,
    },

    /// Dielectric (transparent) material with refraction.
    Dielectric {
        /// Index of refraction (1.5 for common glass).
        refraction_index: f32,
    },
}

impl Material {
    /// Compute ray scattering for this material.
    ///
    /// Returns the scattered ray and its attenuation, or `None` if the ray
    /// was absorbed.
    pub fn scatter(
        &self,
        r_in: &Ray,
        rec: &HitRecord,
        rng: &mut impl Rng,
    ) -> Option<(Ray, Color)> {
        match *self {
            Material::Lambertian { albedo } => Some(scatter_lambertian(albedo, rec, rng)),
            Material::Metal { albedo, fuzz } => scatter_metal(albedo, fuzz, r_in, rec, rng),
            Material::Dielectric { refraction_index } => {
                Some(scatter_dielectric(refraction_index, r_in, rec, rng))
            }
        }
    }

    /// Reflectance used by the direct-lighting term.
    ///
    /// Materials without a meaningful albedo report white.
    pub fn albedo(&self) -> Color {
        match *self {
            Material::Lambertian { albedo } | Material::Metal { albedo, .. } => albedo,
            Material::Dielectric { .. } => Color::ONE,
        }
    }
}

/// Cosine-weighted diffuse scattering through a tangent-space basis.
fn scatter_lambertian(albedo: Color, rec: &HitRecord, rng: &mut impl Rng) -> (Ray, Color) {
    let local = random::random_cosine_direction(rng);
    let (u, v, w) = orthonormal_basis(rec.normal);
    let scatter_direction = (local.x * u + local.y * v + local.z * w).normalize();

    (Ray::new(rec.p, scatter_direction), albedo)
}

/// Mirror reflection perturbed by a point in the unit ball.
///
/// Absorbs the ray when the perturbed direction falls at or below the
/// surface, which is how rough metal self-shadows.
fn scatter_metal(
    albedo: Color,
    fuzz: f32,
    r_in: &Ray,
    rec: &HitRecord,
    rng: &mut impl Rng,
) -> Option<(Ray, Color)> {
    let reflected = reflect(r_in.direction.normalize(), rec.normal);
    let scattered = reflected + fuzz.clamp(0.0, 1.0) * random::random_in_unit_sphere(rng);

    if scattered.dot(rec.normal) > 0.0 {
        Some((Ray::new(rec.p, scattered), albedo))
    } else {
        None
    }
}

/// Glass scattering: refract where Snell's law allows it, reflect on total
/// internal reflection, and choose stochastically by Fresnel reflectance in
/// between. Ideal glass absorbs nothing.
fn scatter_dielectric(
    refraction_index: f32,
    r_in: &Ray,
    rec: &HitRecord,
    rng: &mut impl Rng,
) -> (Ray, Color) {
    let eta_ratio = if rec.front_face {
        1.0 / refraction_index
    } else {
        refraction_index
    };

    let unit_direction = r_in.direction.normalize();
    let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);

    let direction = match refract(unit_direction, rec.normal, eta_ratio) {
        // Total internal reflection
        None => reflect(unit_direction, rec.normal),
        Some(refracted) => {
            if schlick(cos_theta, eta_ratio) > rng.random::<f32>() {
                reflect(unit_direction, rec.normal)
            } else {
                refracted
            }
        }
    };

    (Ray::new(rec.p, direction), Color::ONE)
}

/// Orthonormal basis (u, v, w) with w = n, stable for any unit n.
fn orthonormal_basis(n: Vec3A) -> (Vec3A, Vec3A, Vec3A) {
    // Helper axis not parallel to n: world X, or world Y when n is nearly
    // aligned with X.
    let helper = if n.x.abs() > 0.9 { Vec3A::Y } else { Vec3A::X };
    let mut v = n.cross(helper);
    if v.length_squared() < 1e-8 {
        v = n.cross(Vec3A::X);
    }
    let v = v.normalize();
    let u = v.cross(n);
    (u, v, n)
}

/// Reflect a vector off a surface with unit normal `n`.
pub fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// Refract unit vector `uv` through a surface with unit normal `n` using
/// Snell's law. Returns `None` on total internal reflection.
pub fn refract(uv: Vec3A, n: Vec3A, eta_ratio: f32) -> Option<Vec3A> {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = eta_ratio * (uv + cos_theta * n);
    let k = 1.0 - r_out_perp.length_squared();
    if k < 0.0 {
        return None;
    }
    Some(r_out_perp - k.sqrt() * n)
}

/// Fresnel reflectance via Schlick's approximation.
pub fn schlick(cosine: f32, refraction_index: f32) -> f32 {
    let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
