//! Point light sources for direct illumination.

use glam::Vec3A;

use crate::material::Color;

/// Isotropic point emitter.
///
/// The integrator samples each light with one shadow ray per shading point;
/// received power falls off with the square of the distance.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    /// World-space position of the emitter.
    pub position: Vec3A,
    /// Radiant intensity per color channel.
    pub intensity: Color,
}

impl PointLight {
    /// Create a new point light.
    pub fn new(position: Vec3A, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}
