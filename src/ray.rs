//! Ray representation for 3D ray tracing.
//!
//! A ray is the semi-infinite line r(t) = origin + t * direction, the unit
//! of work for every intersection and shading query in the tracer.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, a surface point for scattered
    /// and shadow rays.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Not required to be unit length at construction; callers normalize
    /// where a consistent parametrization matters (the camera and the
    /// shadow-ray code always hand out unit directions).
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute the point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_at_parameter() {
        let r = Ray::new(Vec3A::new(1.0, 2.0, 3.0), Vec3A::new(0.0, 1.0, -2.0));
        assert_eq!(r.at(0.0), r.origin);
        assert_eq!(r.at(2.0), Vec3A::new(1.0, 4.0, -1.0));
    }
}
