//! Command-line interface.

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::scene::ScenePreset;

/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default samples per pixel.
pub const DEFAULT_SAMPLES: u32 = 100;
/// Default maximum bounce depth.
pub const DEFAULT_DEPTH: u32 = 50;

/// Log levels selectable from the command line.
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Informational messages (default).
    Info,
    /// Per-tile debug output.
    Debug,
    /// Everything.
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments.
#[derive(Parser)]
#[command(name = "tilepath")]
#[command(about = "A tile-parallel path tracer for sphere scenes")]
pub struct Args {
    /// Image width in pixels (0 selects the default)
    #[arg(default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Number of samples per pixel (0 selects the default)
    #[arg(default_value_t = DEFAULT_SAMPLES)]
    pub samples_per_pixel: u32,

    /// Maximum ray bounce depth (0 selects the default)
    #[arg(default_value_t = DEFAULT_DEPTH)]
    pub max_depth: u32,

    /// Scene preset to render
    #[arg(long, value_enum, default_value = "random-balls")]
    pub scene: ScenePreset,

    /// Output file path (.ppm or .png), or "-" for PPM on stdout
    #[arg(short, long, default_value = "output.ppm")]
    pub output: String,

    /// Nominal tile edge length in pixels
    #[arg(long, default_value_t = 32)]
    pub tile_size: u32,

    /// Worker thread count (defaults to the logical CPU count)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,
}

impl Args {
    /// Replace zero-valued numeric arguments with their defaults.
    ///
    /// A width, sample count or depth of 0 would be meaningless; falling
    /// back keeps the tool usable instead of failing.
    pub fn apply_defaults(&mut self) {
        if self.width == 0 {
            self.width = DEFAULT_WIDTH;
        }
        if self.samples_per_pixel == 0 {
            self.samples_per_pixel = DEFAULT_SAMPLES;
        }
        if self.max_depth == 0 {
            self.max_depth = DEFAULT_DEPTH;
        }
        if self.tile_size == 0 {
            self.tile_size = crate::renderer::TILE_SIZE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_arguments_fall_back_to_defaults() {
        let mut args = Args::parse_from(["tilepath", "0", "0", "0"]);
        args.apply_defaults();
        assert_eq!(args.width, DEFAULT_WIDTH);
        assert_eq!(args.samples_per_pixel, DEFAULT_SAMPLES);
        assert_eq!(args.max_depth, DEFAULT_DEPTH);
    }

    #[test]
    fn positional_arguments_configure_the_render() {
        let mut args = Args::parse_from(["tilepath", "400", "25", "8"]);
        args.apply_defaults();
        assert_eq!(args.width, 400);
        assert_eq!(args.samples_per_pixel, 25);
        assert_eq!(args.max_depth, 8);
    }

    #[test]
    fn defaults_apply_with_no_arguments() {
        let args = Args::parse_from(["tilepath"]);
        assert_eq!(args.width, DEFAULT_WIDTH);
        assert_eq!(args.output, "output.ppm");
        assert_eq!(args.tile_size, 32);
        assert!(args.threads.is_none());
    }
}
