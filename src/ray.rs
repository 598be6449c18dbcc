//! Ray representation for intersection testing.
//!
//! A ray is the parametric half-line r(t) = origin + t * direction.

use glam::Vec3A;

/// Ray in world space, immutable once constructed.
///
/// The direction is not required to be unit length; intersection code works
/// purely in terms of the parameter `t` and shading normalizes where needed.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray: the camera lens for primary rays, a surface
    /// point for scattered rays.
    pub origin: Vec3A,
    /// Direction the ray travels in.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Point reached after travelling `t` along the ray: r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_walks_along_direction() {
        let r = Ray::new(Vec3A::new(1.0, 2.0, 3.0), Vec3A::new(0.0, 0.0, -2.0));
        assert_eq!(r.at(0.0), r.origin);
        assert_eq!(r.at(1.5), Vec3A::new(1.0, 2.0, 0.0));
        assert_eq!(r.at(-1.0), Vec3A::new(1.0, 2.0, 5.0));
    }
}
