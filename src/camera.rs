//! Camera: maps normalized image-plane coordinates to world-space rays.
//!
//! Supports configurable field of view, aspect ratio, orientation and a thin
//! lens aperture for depth of field.

use glam::Vec3A;

use crate::random;
use crate::ray::Ray;

/// A positioned thin-lens camera, immutable after construction and shared
/// read-only across render threads.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Vec3A,
    lower_left_corner: Vec3A,
    horizontal: Vec3A,
    vertical: Vec3A,
    /// Camera frame basis vector pointing right.
    u: Vec3A,
    /// Camera frame basis vector pointing up.
    v: Vec3A,
    /// Half the aperture diameter. Zero collapses to a pinhole.
    lens_radius: f32,
}

impl Camera {
    /// Build a camera from a viewing configuration.
    ///
    /// `vfov` is the vertical field of view in degrees; `aperture` is the
    /// lens diameter; `focus_dist` places the plane of perfect focus. The
    /// viewport is scaled by `focus_dist` so that plane is sampled exactly.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        look_from: Vec3A,
        look_at: Vec3A,
        vup: Vec3A,
        vfov: f32,
        aspect_ratio: f32,
        aperture: f32,
        focus_dist: f32,
    ) -> Self {
        let theta = vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let viewport_height = 2.0 * half_height;
        let viewport_width = aspect_ratio * viewport_height;

        // Orthonormal frame: w points opposite the view direction.
        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let origin = look_from;
        let horizontal = focus_dist * viewport_width * u;
        let vertical = focus_dist * viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - focus_dist * w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: aperture / 2.0,
        }
    }

    /// Generate the ray through normalized image coordinates `(s, t)`,
    /// both in [0, 1] with `t = 1` at the top of the frame.
    ///
    /// With a non-zero aperture the origin is jittered on the lens disk,
    /// which defocuses everything off the focal plane.
    pub fn get_ray(&self, s: f32, t: f32) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random::random_in_unit_disk();
            self.u * rd.x + self.v * rd.y
        } else {
            Vec3A::ZERO
        };

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin - offset,
        )
    }
}
