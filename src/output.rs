//! Image serialization: plain-text PPM and 8-bit PNG.
//!
//! Both formats share the same gamma-2 channel encoding. The encoding is
//! one-way: square root, clamp, scale, truncate. Decoding and re-encoding is
//! not expected to round-trip.

use std::io::{self, Write};
use std::path::Path;

use image::{Rgb, RgbImage};
use log::info;

use crate::interval::Interval;
use crate::Color;

/// Convert one linear channel to an 8-bit value.
///
/// Applies gamma-2 encoding (square root), clamps to [0, 0.999], scales by
/// 256 and truncates, yielding [0, 255]. Monotonic in the input.
pub fn encode_channel(linear: f32) -> u8 {
    let intensity = Interval::new(0.0, 0.999);
    let gamma = linear.max(0.0).sqrt();
    (256.0 * intensity.clamp(gamma)) as u8
}

/// Write the buffer as a `P3` plain-text PPM image.
///
/// Header: format tag, dimensions, max channel value. Body: one line per
/// pixel in row-major order with three space-separated channels.
pub fn write_ppm<W: Write>(out: &mut W, pixels: &[Color], width: u32, height: u32) -> io::Result<()> {
    debug_assert_eq!(pixels.len(), width as usize * height as usize);

    writeln!(out, "P3\n{} {}\n255", width, height)?;
    for pixel in pixels {
        writeln!(
            out,
            "{} {} {}",
            encode_channel(pixel.x),
            encode_channel(pixel.y),
            encode_channel(pixel.z)
        )?;
    }
    Ok(())
}

/// Save the buffer as an 8-bit PNG using the same gamma-2 conversion.
pub fn save_png<P: AsRef<Path>>(
    path: P,
    pixels: &[Color],
    width: u32,
    height: u32,
) -> image::ImageResult<()> {
    debug_assert_eq!(pixels.len(), width as usize * height as usize);

    let mut image = RgbImage::new(width, height);
    for (index, rgb) in image.pixels_mut().enumerate() {
        let pixel = pixels[index];
        *rgb = Rgb([
            encode_channel(pixel.x),
            encode_channel(pixel.y),
            encode_channel(pixel.z),
        ]);
    }
    image.save(&path)?;
    info!("Image saved to {}", path.as_ref().display());
    Ok(())
}
