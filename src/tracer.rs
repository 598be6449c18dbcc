//! Recursive ray-color evaluation.
//!
//! Resolves the radiance along a ray by combining material scatter with the
//! scene's hit tests, bottoming out at the sky gradient or at the bounce
//! budget.

use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::ray::Ray;
use crate::Color;

/// Smallest accepted hit distance. Keeps scattered rays from re-hitting the
/// surface they just left ("shadow acne").
const T_MIN: f32 = 0.001;

/// Evaluate the color carried by `r` with at most `depth` scatter events.
///
/// Each bounce multiplies the recursive result by the material's attenuation;
/// absorption and an exhausted budget both contribute black. Recursion depth
/// is bounded by `depth`, so stack usage is predictable.
pub fn ray_color(r: &Ray, world: &dyn Hittable, depth: u32) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    if let Some(rec) = world.hit(r, Interval::new(T_MIN, f32::INFINITY)) {
        return match rec.material.scatter(r, &rec) {
            Some((attenuation, scattered)) => attenuation * ray_color(&scattered, world, depth - 1),
            None => Color::ZERO,
        };
    }

    background(r)
}

/// Sky gradient for rays that escape the scene: white at the horizon blending
/// to light blue at the zenith, keyed on the ray direction's vertical
/// component.
pub fn background(r: &Ray) -> Color {
    let unit_direction = r.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
}
