use std::fs::File;
use std::io::{self, BufWriter, Write};

use clap::Parser;
use log::info;

use tilepath::cli::Args;
use tilepath::logger::init_logger;
use tilepath::output::{save_png, write_ppm};
use tilepath::renderer::Renderer;

fn main() {
    let mut args = Args::parse();
    args.apply_defaults();

    init_logger(args.debug_level.clone().into());
    info!("tilepath - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    // The preset decides the framing; height follows from width.
    let aspect_ratio = args.scene.aspect_ratio();
    let width = args.width;
    let height = ((width as f32 / aspect_ratio) as u32).max(2);
    let (world, camera) = args.scene.build(width as f32 / height as f32);

    // The renderer logs the resolution and tile setup itself.
    let total_rays = u64::from(width) * u64::from(height) * u64::from(args.samples_per_pixel);
    info!("{} rays to cast", total_rays);

    let mut renderer = Renderer {
        samples_per_pixel: args.samples_per_pixel,
        max_depth: args.max_depth,
        tile_size: args.tile_size,
        ..Renderer::default()
    };
    if let Some(threads) = args.threads {
        renderer.threads = threads;
    }

    let image = renderer.render(&camera, &world, width, height);

    let result = if args.output == "-" {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        write_ppm(&mut out, &image, width, height).and_then(|()| out.flush())
    } else if args.output.ends_with(".png") {
        save_png(&args.output, &image, width, height).map_err(io::Error::other)
    } else if args.output.ends_with(".ppm") {
        File::create(&args.output).map(BufWriter::new).and_then(|mut out| {
            write_ppm(&mut out, &image, width, height)?;
            out.flush()?;
            info!("Image saved to {}", args.output);
            Ok(())
        })
    } else {
        log::error!(
            "Unsupported file extension '{}'. Only .ppm and .png formats are supported.",
            std::path::Path::new(&args.output)
                .extension()
                .unwrap_or_default()
                .to_string_lossy()
        );
        std::process::exit(1);
    };

    if let Err(e) = result {
        log::error!("Failed to write {}: {}", args.output, e);
        std::process::exit(1);
    }
}
