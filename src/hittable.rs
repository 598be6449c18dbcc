//! Ray-object intersection layer.
//!
//! Defines the [`Hittable`] trait implemented by geometric primitives and the
//! [`HittableList`] scene container that reports the nearest hit.

use glam::Vec3A;

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;

/// Everything shading needs to know about one ray-surface intersection.
///
/// Created fresh per intersection test and never persisted.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point where the ray meets the surface.
    pub p: Vec3A,
    /// Unit surface normal at `p`, always oriented against the incident ray.
    pub normal: Vec3A,
    /// Ray parameter of the intersection.
    pub t: f32,
    /// True if the ray struck the outer surface, false if it hit from inside.
    pub front_face: bool,
    /// Material at the hit point.
    pub material: Material,
}

impl HitRecord {
    /// Build a record from an outward-pointing geometric normal.
    ///
    /// `front_face` is the sign of `dot(ray, outward_normal)`; the stored
    /// normal is flipped so it always opposes the incident ray. Refraction
    /// and scatter logic both rely on that orientation.
    pub fn new(r: &Ray, t: f32, p: Vec3A, outward_normal: Vec3A, material: Material) -> Self {
        let front_face = r.direction.dot(outward_normal) < 0.0;
        let normal = if front_face { outward_normal } else { -outward_normal };
        Self { p, normal, t, front_face, material }
    }
}

/// Trait for objects a ray can intersect.
///
/// `Sync + Send` because the scene is shared read-only across render threads.
pub trait Hittable: Sync + Send {
    /// Test for intersection with `r` inside the parameter range `ray_t`.
    ///
    /// Returns the nearest qualifying intersection, or `None` on a miss.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// An ordered collection of hittables forming a scene.
///
/// Intersection is a linear scan; insertion order affects only iteration
/// cost, never the result. The list grows during scene setup and is
/// read-only while rendering.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the scene holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest_so_far = ray_t.max;
        let mut nearest = None;

        // Shrinking the upper bound as we go rejects farther objects early.
        for object in &self.objects {
            if let Some(rec) = object.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                nearest = Some(rec);
            }
        }

        nearest
    }
}
