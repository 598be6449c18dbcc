//! Material scattering models.
//!
//! Three closed variants: Lambertian (diffuse), Metal (specular with fuzz)
//! and Dielectric (refractive). Scatter returns `None` only when a ray is
//! absorbed; absorption contributes black, never an error.

use glam::Vec3A;

use crate::hittable::HitRecord;
use crate::random;
use crate::ray::Ray;
use crate::Color;

/// Surface material, immutable after construction.
///
/// A plain `Copy` value: spheres sharing a material hold equal records, and
/// since materials never mutate the value semantics are indistinguishable
/// from shared references.
#[derive(Debug, Clone, Copy)]
pub enum Material {
    /// Diffuse matte surface.
    Lambertian {
        /// Fractional reflectance per channel.
        albedo: Color,
    },
    /// Specular reflector with optional roughness.
    Metal {
        /// Reflectance tint.
        albedo: Color,
        /// Roughness in [0, 1]: 0 is a perfect mirror. Values above 1 are
        /// treated as 1.
        fuzz: f32,
    },
    /// Clear refractive material such as glass or water.
    Dielectric {
        /// Index of refraction (1.5 for glass).
        refraction_index: f32,
    },
}

impl Material {
    /// Scatter an incoming ray at the given hit.
    ///
    /// Returns the attenuation color and the outgoing ray, or `None` when
    /// the ray is absorbed.
    pub fn scatter(&self, r_in: &Ray, rec: &HitRecord) -> Option<(Color, Ray)> {
        match *self {
            Material::Lambertian { albedo } => scatter_lambertian(albedo, rec),
            Material::Metal { albedo, fuzz } => scatter_metal(albedo, fuzz, r_in, rec),
            Material::Dielectric { refraction_index } => {
                Some(scatter_dielectric(refraction_index, r_in, rec))
            }
        }
    }
}

/// Diffuse scatter: offset the normal by a random unit vector. Never absorbs.
fn scatter_lambertian(albedo: Color, rec: &HitRecord) -> Option<(Color, Ray)> {
    let mut scatter_direction = rec.normal + random::random_unit_vector();

    // Degenerate case: the random vector nearly cancelled the normal.
    if scatter_direction.length_squared() < 1e-8 {
        scatter_direction = rec.normal;
    }

    Some((albedo, Ray::new(rec.p, scatter_direction)))
}

/// Mirror reflection perturbed by `fuzz`. Absorbs when the perturbed
/// direction ends up under the surface.
fn scatter_metal(albedo: Color, fuzz: f32, r_in: &Ray, rec: &HitRecord) -> Option<(Color, Ray)> {
    let reflected = reflect(r_in.direction.normalize(), rec.normal);
    let direction = reflected + fuzz.min(1.0) * random::random_unit_vector();

    if direction.dot(rec.normal) > 0.0 {
        Some((albedo, Ray::new(rec.p, direction)))
    } else {
        None
    }
}

/// Refraction with Schlick-weighted reflection. Lossless: attenuation is
/// always white and the ray always continues.
fn scatter_dielectric(refraction_index: f32, r_in: &Ray, rec: &HitRecord) -> (Color, Ray) {
    let ri = if rec.front_face { 1.0 / refraction_index } else { refraction_index };

    let unit_direction = r_in.direction.normalize();
    let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

    let cannot_refract = ri * sin_theta > 1.0;
    let direction = if cannot_refract || reflectance(cos_theta, ri) > random::random_f32() {
        reflect(unit_direction, rec.normal)
    } else {
        refract(unit_direction, rec.normal, ri)
    };

    (Color::ONE, Ray::new(rec.p, direction))
}

/// Reflect `v` about the unit normal `n`.
fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit vector `uv` through an interface with relative index
/// `etai_over_etat` (Snell's law).
fn refract(uv: Vec3A, n: Vec3A, etai_over_etat: f32) -> Vec3A {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Schlick's polynomial approximation of Fresnel reflectance.
fn reflectance(cosine: f32, refraction_index: f32) -> f32 {
    let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::HitRecord;

    fn hit_at_origin(r: &Ray, outward_normal: Vec3A, material: Material) -> HitRecord {
        HitRecord::new(r, 1.0, Vec3A::ZERO, outward_normal, material)
    }

    #[test]
    fn lambertian_never_absorbs() {
        let mat = Material::Lambertian { albedo: Color::new(0.1, 0.2, 0.5) };
        let r = Ray::new(Vec3A::new(0.0, 1.0, 0.0), Vec3A::new(0.0, -1.0, 0.0));
        let rec = hit_at_origin(&r, Vec3A::new(0.0, 1.0, 0.0), mat);

        for _ in 0..200 {
            let (attenuation, scattered) = mat.scatter(&r, &rec).unwrap();
            assert_eq!(attenuation, Color::new(0.1, 0.2, 0.5));
            // The fallback guarantees a usable direction even when the random
            // vector cancels the normal.
            assert!(scattered.direction.length_squared() >= 1e-8);
        }
    }

    #[test]
    fn mirror_metal_reflects_across_normal() {
        let mat = Material::Metal { albedo: Color::ONE, fuzz: 0.0 };
        let r = Ray::new(Vec3A::new(-1.0, 1.0, 0.0), Vec3A::new(1.0, -1.0, 0.0));
        let rec = hit_at_origin(&r, Vec3A::new(0.0, 1.0, 0.0), mat);

        let (_, scattered) = mat.scatter(&r, &rec).unwrap();
        let expected = Vec3A::new(1.0, 1.0, 0.0).normalize();
        assert!((scattered.direction.normalize() - expected).length() < 1e-5);
    }

    #[test]
    fn grazing_metal_is_absorbed() {
        let mat = Material::Metal { albedo: Color::ONE, fuzz: 0.0 };
        // Incoming parallel to the surface reflects to a tangent direction,
        // which counts as going into the surface.
        let r = Ray::new(Vec3A::new(-1.0, 0.0, 0.0), Vec3A::new(1.0, 0.0, 0.0));
        let rec = HitRecord {
            p: Vec3A::ZERO,
            normal: Vec3A::new(0.0, 1.0, 0.0),
            t: 1.0,
            front_face: true,
            material: mat,
        };
        assert!(mat.scatter(&r, &rec).is_none());
    }

    #[test]
    fn dielectric_never_absorbs_and_is_lossless() {
        let mat = Material::Dielectric { refraction_index: 1.5 };
        let r = Ray::new(Vec3A::new(0.0, 1.0, 0.0), Vec3A::new(0.0, -1.0, 0.0));
        let rec = hit_at_origin(&r, Vec3A::new(0.0, 1.0, 0.0), mat);

        for _ in 0..200 {
            let (attenuation, _) = mat.scatter(&r, &rec).unwrap();
            assert_eq!(attenuation, Color::ONE);
        }
    }

    #[test]
    fn total_internal_reflection_reflects_deterministically() {
        let mat = Material::Dielectric { refraction_index: 1.5 };
        // Leaving glass at 45 degrees: 1.5 * sin(45) > 1, so refraction is
        // impossible and the branch is deterministic.
        let incoming = Vec3A::new(1.0, 1.0, 0.0).normalize();
        let r = Ray::new(-incoming, incoming);
        // Back face: outward normal agrees with the ray.
        let rec = hit_at_origin(&r, Vec3A::new(0.0, 1.0, 0.0), mat);
        assert!(!rec.front_face);

        let (_, scattered) = mat.scatter(&r, &rec).unwrap();
        let expected = reflect(incoming, rec.normal);
        assert!((scattered.direction - expected).length() < 1e-6);
    }

    #[test]
    fn refract_obeys_snell_at_normal_incidence() {
        let d = refract(Vec3A::new(0.0, -1.0, 0.0), Vec3A::new(0.0, 1.0, 0.0), 1.0 / 1.5);
        assert!((d.normalize() - Vec3A::new(0.0, -1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn schlick_matches_normal_incidence_fresnel() {
        // At cos = 1 the approximation reduces to ((1-n)/(1+n))^2.
        let r = reflectance(1.0, 1.5);
        assert!((r - 0.04).abs() < 1e-3);
        // Grazing incidence approaches full reflection.
        assert!(reflectance(0.0, 1.5) > 0.9);
    }
}
