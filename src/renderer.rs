//! Tile-parallel render scheduler.
//!
//! The image is partitioned into a fixed grid of rectangular tiles. A pool of
//! scoped worker threads repeatedly claims the next tile index from a shared
//! atomic counter, renders every pixel in the tile, and writes the averaged
//! colors straight into the shared image buffer. Tiles are disjoint, so the
//! counter is the only synchronization point in a render pass.

use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::camera::Camera;
use crate::hittable::Hittable;
use crate::random;
use crate::tracer;
use crate::Color;

/// Nominal tile edge length in pixels.
pub const TILE_SIZE: u32 = 32;

/// One rectangular unit of render work: the pixel range
/// `[start_x, end_x) x [start_y, end_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// First pixel column of the tile.
    pub start_x: u32,
    /// One past the last pixel column.
    pub end_x: u32,
    /// First pixel row of the tile.
    pub start_y: u32,
    /// One past the last pixel row.
    pub end_y: u32,
}

impl Tile {
    /// Number of pixels covered by the tile.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.end_x - self.start_x) * u64::from(self.end_y - self.start_y)
    }
}

/// Fixed partition of an image into tiles.
///
/// The grid dimensions come from dividing the image by the nominal tile edge;
/// the actual tile edges are then stretched (`width / tiles_x`, a non-integer)
/// and truncated per tile, so the grid covers the image exactly with no
/// remainder strip. Every pixel belongs to exactly one tile.
#[derive(Debug, Clone, Copy)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles_x: u32,
    tiles_y: u32,
    stretch_x: f64,
    stretch_y: f64,
}

impl TileGrid {
    /// Partition a `width` x `height` image with the given nominal tile edge.
    ///
    /// Images smaller than one tile along an axis become a single stretched
    /// tile along that axis.
    pub fn new(width: u32, height: u32, tile_size: u32) -> Self {
        let tiles_x = (width / tile_size).max(1);
        let tiles_y = (height / tile_size).max(1);
        Self {
            width,
            height,
            tiles_x,
            tiles_y,
            stretch_x: f64::from(width) / f64::from(tiles_x),
            stretch_y: f64::from(height) / f64::from(tiles_y),
        }
    }

    /// Total number of tiles in the grid.
    pub fn tile_count(&self) -> usize {
        self.tiles_x as usize * self.tiles_y as usize
    }

    /// Pixel bounds of the tile at `index`, in row-major tile order.
    ///
    /// Interior edges truncate the stretched tile size; the last tile along
    /// each axis ends exactly at the image border. `width / tiles_x` can
    /// round below the true quotient in f64 (e.g. 230/7*7 = 229.999...), and
    /// truncating that would leave the final column unclaimed.
    pub fn tile(&self, index: usize) -> Tile {
        debug_assert!(index < self.tile_count());
        let tx = (index as u32) % self.tiles_x;
        let ty = (index as u32) / self.tiles_x;
        let end_x = if tx + 1 == self.tiles_x {
            self.width
        } else {
            (self.stretch_x * f64::from(tx + 1)) as u32
        };
        let end_y = if ty + 1 == self.tiles_y {
            self.height
        } else {
            (self.stretch_y * f64::from(ty + 1)) as u32
        };
        Tile {
            start_x: (self.stretch_x * f64::from(tx)) as u32,
            end_x,
            start_y: (self.stretch_y * f64::from(ty)) as u32,
            end_y,
        }
    }
}

/// Image buffer shared by all render workers.
///
/// Plain `UnsafeCell` storage: the tile grid hands every pixel index to
/// exactly one worker, so concurrent writes never alias. The buffer is only
/// read back after the worker threads have been joined.
struct TileBuffer {
    pixels: UnsafeCell<Box<[Color]>>,
}

// Workers write disjoint tiles; see `write` for the aliasing invariant.
unsafe impl Sync for TileBuffer {}

impl TileBuffer {
    fn new(len: usize) -> Self {
        Self {
            pixels: UnsafeCell::new(vec![Color::ZERO; len].into_boxed_slice()),
        }
    }

    /// Store one pixel.
    ///
    /// # Safety
    /// No two threads may write the same `index` during a render pass, and
    /// nothing may read the buffer until the writers are joined.
    unsafe fn write(&self, index: usize, color: Color) {
        (*self.pixels.get())[index] = color;
    }

    fn into_pixels(self) -> Vec<Color> {
        self.pixels.into_inner().into_vec()
    }
}

/// Render-pass configuration and entry point.
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Jittered camera rays accumulated per pixel.
    pub samples_per_pixel: u32,
    /// Bounce budget handed to the path tracer for each ray.
    pub max_depth: u32,
    /// Nominal tile edge length.
    pub tile_size: u32,
    /// Worker thread count.
    pub threads: usize,
    /// Sleep each worker a random 0-200 ms before it claims its first tile,
    /// so a large pool does not start on the same cache-hot region at once.
    pub stagger_workers: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            samples_per_pixel: 100,
            max_depth: 50,
            tile_size: TILE_SIZE,
            threads: num_cpus::get(),
            stagger_workers: true,
        }
    }
}

impl Renderer {
    /// Render the scene into a row-major linear-color buffer of
    /// `width * height` pixels.
    ///
    /// Spawns the worker pool, waits for every tile to complete, and returns
    /// the finished buffer. Pixel completion order across tiles is
    /// unspecified; pixel values do not depend on it.
    pub fn render(
        &self,
        camera: &Camera,
        world: &dyn Hittable,
        width: u32,
        height: u32,
    ) -> Vec<Color> {
        assert!(width >= 2 && height >= 2, "image too small to render");
        assert!(self.samples_per_pixel > 0, "sample count must be positive");

        let grid = TileGrid::new(width, height, self.tile_size);
        let buffer = TileBuffer::new(width as usize * height as usize);
        // The claim counter lives exactly as long as this render pass.
        let next_tile = AtomicUsize::new(0);

        let threads = self.threads.max(1);
        info!(
            "Rendering {}x{} pixels, {} samples per pixel, {} tiles on {} threads",
            width,
            height,
            self.samples_per_pixel,
            grid.tile_count(),
            threads
        );

        let progress = ProgressBar::new(grid.tile_count() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} tiles ETA: {eta}")
                .unwrap(),
        );

        let start = Instant::now();
        thread::scope(|s| {
            for _ in 0..threads {
                s.spawn(|| {
                    self.run_worker(camera, world, width, height, &grid, &buffer, &next_tile, &progress)
                });
            }
        });
        progress.finish_and_clear();

        let elapsed = start.elapsed();
        let total_rays =
            u64::from(width) * u64::from(height) * u64::from(self.samples_per_pixel);
        let krps = total_rays as f64 / 1000.0 / elapsed.as_secs_f64();
        info!("Render finished in {:.2?} [{:.0} krays/s]", elapsed, krps);

        buffer.into_pixels()
    }

    /// Worker loop: claim tiles until the counter runs past the grid.
    #[allow(clippy::too_many_arguments)]
    fn run_worker(
        &self,
        camera: &Camera,
        world: &dyn Hittable,
        width: u32,
        height: u32,
        grid: &TileGrid,
        buffer: &TileBuffer,
        next_tile: &AtomicUsize,
        progress: &ProgressBar,
    ) {
        if self.stagger_workers {
            let delay = random::random_f32_range(0.0, 200.0) as u64;
            thread::sleep(Duration::from_millis(delay));
        }

        loop {
            let index = next_tile.fetch_add(1, Ordering::Relaxed);
            if index >= grid.tile_count() {
                break;
            }
            let tile = grid.tile(index);
            self.render_tile(camera, world, width, height, tile, buffer);
            progress.inc(1);
            debug!("tile {} of {} done", index + 1, grid.tile_count());
        }
    }

    /// Render every pixel of one tile sequentially.
    fn render_tile(
        &self,
        camera: &Camera,
        world: &dyn Hittable,
        width: u32,
        height: u32,
        tile: Tile,
        buffer: &TileBuffer,
    ) {
        let sample_scale = 1.0 / self.samples_per_pixel as f32;

        for y in tile.start_y..tile.end_y {
            for x in tile.start_x..tile.end_x {
                let mut pixel_color = Color::ZERO;
                for _ in 0..self.samples_per_pixel {
                    let u = (x as f32 + random::random_f32()) / (width - 1) as f32;
                    let v = 1.0 - (y as f32 + random::random_f32()) / (height - 1) as f32;
                    let ray = camera.get_ray(u, v);
                    pixel_color += tracer::ray_color(&ray, world, self.max_depth);
                }

                let index = (y * width + x) as usize;
                // Safety: this tile is claimed by exactly one worker and the
                // grid assigns each pixel to exactly one tile.
                unsafe { buffer.write(index, pixel_color * sample_scale) };
            }
        }
    }
}
