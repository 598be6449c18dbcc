//! Demo scene presets.
//!
//! Each preset carries a preferred aspect ratio and builds a matching world
//! and camera. Scene construction is the only place materials and spheres are
//! created; the world is read-only once rendering starts.

use clap::ValueEnum;
use glam::Vec3A;

use crate::camera::Camera;
use crate::hittable::HittableList;
use crate::material::Material;
use crate::random;
use crate::sphere::Sphere;
use crate::Color;

/// Selectable demo scenes.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScenePreset {
    /// Two touching colored diffuse spheres, wide field of view.
    TwoBalls,
    /// Ground plus a lambertian/glass/metal trio, with a hollow glass shell.
    ThreeBalls,
    /// The book-cover scene: a large random field of small spheres.
    RandomBalls,
}

impl ScenePreset {
    /// Aspect ratio the preset was composed for.
    pub fn aspect_ratio(&self) -> f32 {
        match self {
            ScenePreset::TwoBalls | ScenePreset::ThreeBalls => 16.0 / 9.0,
            ScenePreset::RandomBalls => 3.0 / 2.0,
        }
    }

    /// Build the world and a camera framed at the given aspect ratio.
    pub fn build(&self, aspect_ratio: f32) -> (HittableList, Camera) {
        match self {
            ScenePreset::TwoBalls => two_balls(aspect_ratio),
            ScenePreset::ThreeBalls => three_balls(aspect_ratio),
            ScenePreset::RandomBalls => random_balls(aspect_ratio),
        }
    }
}

fn two_balls(aspect_ratio: f32) -> (HittableList, Camera) {
    let r = (std::f32::consts::PI / 4.0).cos();
    let mut world = HittableList::new();

    let blue = Material::Lambertian { albedo: Color::new(0.0, 0.0, 1.0) };
    let red = Material::Lambertian { albedo: Color::new(1.0, 0.0, 0.0) };
    world.add(Box::new(Sphere::new(Vec3A::new(-r, 0.0, -1.0), r, blue)));
    world.add(Box::new(Sphere::new(Vec3A::new(r, 0.0, -1.0), r, red)));

    let look_from = Vec3A::ZERO;
    let look_at = Vec3A::new(0.0, 0.0, -1.0);
    let camera = Camera::new(
        look_from,
        look_at,
        Vec3A::new(0.0, 1.0, 0.0),
        90.0,
        aspect_ratio,
        0.0,
        (look_from - look_at).length(),
    );
    (world, camera)
}

fn three_balls(aspect_ratio: f32) -> (HittableList, Camera) {
    let mut world = HittableList::new();

    let ground = Material::Lambertian { albedo: Color::new(0.8, 0.8, 0.0) };
    let center = Material::Lambertian { albedo: Color::new(0.1, 0.2, 0.5) };
    let glass = Material::Dielectric { refraction_index: 1.5 };
    let metal = Material::Metal { albedo: Color::new(0.8, 0.6, 0.2), fuzz: 0.0 };

    world.add(Box::new(Sphere::new(Vec3A::new(0.0, -100.5, -1.0), 100.0, ground)));
    world.add(Box::new(Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5, center)));
    // Outer glass sphere plus a negative-radius inner sphere of the same
    // material makes a hollow shell.
    world.add(Box::new(Sphere::new(Vec3A::new(-1.0, 0.0, -1.0), 0.5, glass)));
    world.add(Box::new(Sphere::new(Vec3A::new(-1.0, 0.0, -1.0), -0.4, glass)));
    world.add(Box::new(Sphere::new(Vec3A::new(1.0, 0.0, -1.0), 0.5, metal)));

    let look_from = Vec3A::new(3.0, 3.0, 2.0);
    let look_at = Vec3A::new(0.0, 0.0, -1.0);
    let camera = Camera::new(
        look_from,
        look_at,
        Vec3A::new(0.0, 1.0, 0.0),
        20.0,
        aspect_ratio,
        2.0,
        (look_from - look_at).length(),
    );
    (world, camera)
}

fn random_balls(aspect_ratio: f32) -> (HittableList, Camera) {
    let mut world = HittableList::new();

    let ground = Material::Lambertian { albedo: Color::new(0.2, 0.6, 0.7) };
    world.add(Box::new(Sphere::new(Vec3A::new(0.0, -1000.0, 0.0), 1000.0, ground)));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = random::random_f32();
            let center = Vec3A::new(
                a as f32 + 0.9 * random::random_f32(),
                0.2,
                b as f32 + 0.9 * random::random_f32(),
            );

            // Keep the small spheres clear of the big metal ball.
            if (center - Vec3A::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                let albedo = random::random_color() * random::random_color();
                Material::Lambertian { albedo }
            } else if choose_mat < 0.95 {
                let albedo = random::random_color_range(0.5, 1.0);
                let fuzz = random::random_f32_range(0.0, 0.5);
                Material::Metal { albedo, fuzz }
            } else {
                Material::Dielectric { refraction_index: 1.5 }
            };
            world.add(Box::new(Sphere::new(center, 0.2, material)));
        }
    }

    let glass = Material::Dielectric { refraction_index: 1.5 };
    world.add(Box::new(Sphere::new(Vec3A::new(0.0, 1.0, 0.0), 1.0, glass)));

    let brown = Material::Lambertian { albedo: Color::new(0.4, 0.2, 0.1) };
    world.add(Box::new(Sphere::new(Vec3A::new(-4.0, 1.0, 0.0), 1.0, brown)));

    let steel = Material::Metal { albedo: Color::new(0.7, 0.6, 0.5), fuzz: 0.0 };
    world.add(Box::new(Sphere::new(Vec3A::new(4.0, 1.0, 0.0), 1.0, steel)));

    let camera = Camera::new(
        Vec3A::new(12.0, 2.0, 3.0),
        Vec3A::ZERO,
        Vec3A::new(0.0, 1.0, 0.0),
        20.0,
        aspect_ratio,
        0.1,
        10.0,
    );
    (world, camera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_build_non_empty_worlds() {
        for preset in [ScenePreset::TwoBalls, ScenePreset::ThreeBalls, ScenePreset::RandomBalls] {
            let (world, _camera) = preset.build(preset.aspect_ratio());
            assert!(!world.is_empty());
        }
    }

    #[test]
    fn three_balls_contains_the_hollow_shell() {
        // Five spheres: ground, center, outer glass, inner shell, metal.
        let (world, _) = ScenePreset::ThreeBalls.build(16.0 / 9.0);
        assert_eq!(world.len(), 5);
    }

    #[test]
    fn random_balls_has_ground_and_feature_spheres() {
        let (world, _) = ScenePreset::RandomBalls.build(1.5);
        // Ground + 3 feature spheres + a random field that cannot be empty.
        assert!(world.len() > 4);
    }
}
