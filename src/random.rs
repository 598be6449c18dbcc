//! Random sampling helpers for the renderer.
//!
//! Each thread owns its own ChaCha20 generator, so render workers never
//! contend on a shared stream. The streams are entropy-seeded per thread,
//! which means two runs produce different images; see DESIGN.md for the
//! reproducibility trade-off.

use glam::Vec3A;
use rand::{rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::cell::RefCell;

thread_local! {
    /// Thread-local ChaCha20 PRNG.
    static RNG: RefCell<ChaCha20Rng> = RefCell::new(ChaCha20Rng::from_rng(&mut rng()));
}

/// Uniform f32 in [0.0, 1.0).
pub fn random_f32() -> f32 {
    RNG.with(|rng| rng.borrow_mut().random())
}

/// Uniform f32 in [min, max).
pub fn random_f32_range(min: f32, max: f32) -> f32 {
    min + (max - min) * random_f32()
}

/// Unit vector uniformly distributed over the sphere.
pub fn random_unit_vector() -> Vec3A {
    RNG.with(|rng| {
        let mut rng = rng.borrow_mut();

        // Uniform azimuth, uniform cos(polar): uniform over the sphere.
        let theta = 2.0 * std::f32::consts::PI * rng.random::<f32>();
        let cos_phi = 2.0 * rng.random::<f32>() - 1.0;
        let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();

        Vec3A::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi)
    })
}

/// Point inside the unit disk (z = 0), by rejection sampling.
pub fn random_in_unit_disk() -> Vec3A {
    loop {
        let p = Vec3A::new(
            random_f32_range(-1.0, 1.0),
            random_f32_range(-1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Random RGB color with channels in [0.0, 1.0).
pub fn random_color() -> Vec3A {
    Vec3A::new(random_f32(), random_f32(), random_f32())
}

/// Random RGB color with channels in [min, max).
pub fn random_color_range(min: f32, max: f32) -> Vec3A {
    Vec3A::new(
        random_f32_range(min, max),
        random_f32_range(min, max),
        random_f32_range(min, max),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_vectors_have_unit_length() {
        for _ in 0..1000 {
            let v = random_unit_vector();
            assert!((v.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn disk_samples_stay_inside() {
        for _ in 0..1000 {
            let p = random_in_unit_disk();
            assert!(p.length_squared() < 1.0);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn ranges_are_respected() {
        for _ in 0..1000 {
            let x = random_f32_range(-2.0, 3.0);
            assert!((-2.0..3.0).contains(&x));
            let x = random_f32();
            assert!((0.0..1.0).contains(&x));
        }
    }
}
