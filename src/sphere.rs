//! Sphere primitive with quadratic ray intersection.

use glam::Vec3A;

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;

/// Sphere defined by center, signed radius and material.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point in world coordinates.
    pub center: Vec3A,
    /// Signed radius. A negative radius leaves the geometry unchanged but
    /// flips the outward normal, which turns a sphere nested inside another
    /// into a hollow shell (used for thin glass bubbles).
    pub radius: f32,
    /// Material at every point of the surface.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius keeps its sign; see [`Sphere::radius`].
    pub fn new(center: Vec3A, radius: f32, material: Material) -> Self {
        Self { center, radius, material }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = self.center - r.origin;

        // Half-b form of the quadratic |r(t) - center|^2 = radius^2.
        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Prefer the near root, fall back to the far one.
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = r.at(root);
        // Dividing by the signed radius is what flips the normal for
        // negative-radius shells.
        let outward_normal = (p - self.center) / self.radius;
        Some(HitRecord::new(r, root, p, outward_normal, self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn unit_sphere_at(z: f32, radius: f32) -> Sphere {
        Sphere::new(
            Vec3A::new(0.0, 0.0, z),
            radius,
            Material::Lambertian { albedo: Color::new(0.8, 0.8, 0.8) },
        )
    }

    fn full_range() -> Interval {
        Interval::new(0.001, f32::INFINITY)
    }

    #[test]
    fn head_on_ray_hits_near_surface() {
        let s = unit_sphere_at(-2.0, 0.5);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let rec = s.hit(&r, full_range()).unwrap();
        assert!((rec.t - 1.5).abs() < 1e-5);
        assert!(rec.front_face);
        assert!((rec.normal - Vec3A::new(0.0, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn ray_pointing_away_misses() {
        let s = unit_sphere_at(-2.0, 0.5);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 1.0, 0.0));
        assert!(s.hit(&r, full_range()).is_none());
    }

    #[test]
    fn negative_discriminant_is_a_miss() {
        let s = unit_sphere_at(-2.0, 0.5);
        // Parallel to -z but offset past the radius.
        let r = Ray::new(Vec3A::new(0.8, 0.0, 0.0), Vec3A::new(0.0, 0.0, -1.0));
        assert!(s.hit(&r, full_range()).is_none());
    }

    #[test]
    fn origin_inside_takes_far_root() {
        let s = unit_sphere_at(0.0, 1.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let rec = s.hit(&r, full_range()).unwrap();
        // Near root is t = -1, out of range; the far root at t = 1 qualifies.
        assert!((rec.t - 1.0).abs() < 1e-5);
        assert!(!rec.front_face);
        assert!(rec.normal.dot(r.direction) <= 0.0);
    }

    #[test]
    fn hit_respects_upper_bound() {
        let s = unit_sphere_at(-2.0, 0.5);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(s.hit(&r, Interval::new(0.001, 1.0)).is_none());
        assert!(s.hit(&r, Interval::new(0.001, 2.0)).is_some());
    }

    #[test]
    fn negative_radius_flips_front_face() {
        let solid = unit_sphere_at(-2.0, 0.5);
        let shell = unit_sphere_at(-2.0, -0.5);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));

        let rec_solid = solid.hit(&r, full_range()).unwrap();
        let rec_shell = shell.hit(&r, full_range()).unwrap();

        // Same geometry, same t, opposite facing.
        assert!((rec_solid.t - rec_shell.t).abs() < 1e-6);
        assert!(rec_solid.front_face);
        assert!(!rec_shell.front_face);
        // The stored normal still opposes the ray in both cases.
        assert!(rec_shell.normal.dot(r.direction) <= 0.0);
    }
}
