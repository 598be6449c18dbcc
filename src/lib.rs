//! tilepath — a tile-parallel CPU path tracer for sphere scenes.
//!
//! For every pixel the renderer casts many randomly-jittered rays, scatters
//! them recursively off Lambertian, metal and dielectric spheres, averages the
//! samples and gamma-corrects the result. Worker threads claim rectangular
//! tiles from a shared atomic counter, so no two threads ever write the same
//! pixel. Output is plain-text PPM or 8-bit PNG.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod cli;
pub mod hittable;
pub mod interval;
pub mod logger;
pub mod material;
pub mod output;
pub mod random;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod sphere;
pub mod tracer;

/// Linear RGB color. `Vec3A` keeps the per-sample arithmetic SIMD-friendly.
pub type Color = glam::Vec3A;
