use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;

use clap::Parser;
use colorgrad::Gradient;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;

use emberwood_world::creature::navigation::{tick, NavConfig};
use emberwood_world::creature::spawn;
use emberwood_world::creature::state::{AnimalState, Archetype};
use emberwood_world::terrain::coords::WORLD_RADIUS;
use emberwood_world::terrain::generator::{WorldGenerator, WorldVoxels};
use emberwood_world::terrain::heightfield::height_at;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Column radius of the generated world
    #[arg(short, long, default_value_t = WORLD_RADIUS)]
    radius: i32,

    /// Seed for cosmetic shades and creature wandering
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// The output PNG file path
    #[arg(short, long, default_value = "target/emberwood.png")]
    output: String,

    /// Pixels per column when rendering the map
    #[arg(long, default_value_t = 10)]
    scale: u32,

    /// Render a height-shaded relief instead of the voxel palette
    #[arg(long)]
    shaded: bool,

    /// Extra creatures scattered on top of the default herd
    #[arg(long, default_value_t = 0)]
    creatures: usize,

    /// Seconds of simulated wandering traced onto the map (0 disables)
    #[arg(long, default_value_t = 12.0)]
    wander_seconds: f32,

    /// Also dump the renderer-facing voxel lists as JSON
    #[arg(long)]
    json: Option<String>,
}

#[derive(Debug, Error)]
enum GeneratorError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("gradient construction failed: {0}")]
    Gradient(#[from] colorgrad::CustomGradientError),
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn hex_rgb(hex: &str) -> Rgb<u8> {
    let raw = hex.trim_start_matches('#');
    let channel = |at: usize| {
        raw.get(at..at + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0xFF)
    };
    Rgb([channel(0), channel(2), channel(4)])
}

/// Highest voxel color per column, water surfaces and tree crowns included.
fn column_colors(world: &WorldVoxels) -> HashMap<(i32, i32), (i32, Rgb<u8>)> {
    let mut tops = HashMap::new();
    for voxel in world
        .terrain
        .iter()
        .chain(world.trees.iter())
        .chain(world.water.iter())
    {
        let entry = tops
            .entry((voxel.x, voxel.z))
            .or_insert((voxel.y, hex_rgb(voxel.color)));
        if voxel.y >= entry.0 {
            *entry = (voxel.y, hex_rgb(voxel.color));
        }
    }
    tops
}

/// Top-down map in the actual voxel palette.
fn palette_map(world: &WorldVoxels, radius: i32, scale: u32) -> RgbImage {
    let tops = column_colors(world);
    let side = (radius * 2 + 1) as u32 * scale;
    let mut img = RgbImage::new(side, side);

    for x in -radius..=radius {
        for z in -radius..=radius {
            let color = tops
                .get(&(x, z))
                .map(|&(_, color)| color)
                .unwrap_or(Rgb([0, 0, 0]));
            let px = (x + radius) as u32 * scale;
            let pz = (z + radius) as u32 * scale;
            for dz in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(px + dx, pz + dz, color);
                }
            }
        }
    }
    img
}

fn relief_gradient() -> Result<Gradient, colorgrad::CustomGradientError> {
    colorgrad::CustomGradient::new()
        .colors(&[
            colorgrad::Color::new(0.10, 0.25, 0.55, 1.0), // river
            colorgrad::Color::new(0.30, 0.75, 0.94, 1.0), // shallows
            colorgrad::Color::new(0.55, 0.64, 0.30, 1.0), // valley grass
            colorgrad::Color::new(0.44, 0.37, 0.33, 1.0), // high rock
            colorgrad::Color::new(0.95, 0.98, 0.93, 1.0), // snow caps
        ])
        .domain(&[0.0, 0.25, 0.45, 0.8, 1.0])
        .build()
}

/// Top-down relief shaded by column height.
fn shaded_map(radius: i32, scale: u32) -> Result<RgbImage, GeneratorError> {
    let gradient = relief_gradient()?;
    let side = (radius * 2 + 1) as u32 * scale;
    let mut img = RgbImage::new(side, side);

    // Heights inside the profile span roughly [-3, 12].
    for x in -radius..=radius {
        for z in -radius..=radius {
            let normalized = ((height_at(x, z) + 3) as f64 / 15.0).clamp(0.0, 1.0);
            let color = gradient.at(normalized);
            let pixel = Rgb([
                (color.r * 255.0) as u8,
                (color.g * 255.0) as u8,
                (color.b * 255.0) as u8,
            ]);
            let px = (x + radius) as u32 * scale;
            let pz = (z + radius) as u32 * scale;
            for dz in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(px + dx, pz + dz, pixel);
                }
            }
        }
    }
    Ok(img)
}

fn path_color(archetype: Archetype) -> Rgb<u8> {
    match archetype {
        Archetype::Fox => Rgb([227, 100, 20]),
        Archetype::Bear => Rgb([74, 55, 40]),
        Archetype::Deer => Rgb([193, 154, 107]),
        Archetype::Fish => Rgb([76, 201, 240]),
    }
}

/// Run the navigation state machine at 60 Hz and record each planar position.
fn simulate_paths(
    herd: &mut [AnimalState],
    cfg: &NavConfig,
    rng: &mut SmallRng,
    seconds: f32,
) -> Vec<Vec<(f32, f32)>> {
    let dt = 1.0 / 60.0;
    let steps = (seconds / dt).ceil() as u32;
    let mut paths: Vec<Vec<(f32, f32)>> = herd
        .iter()
        .map(|animal| vec![(animal.position.x, animal.position.z)])
        .collect();

    let mut elapsed = 0.0;
    for _ in 0..steps {
        elapsed += dt;
        for (animal, path) in herd.iter_mut().zip(paths.iter_mut()) {
            tick(animal, cfg, rng, dt, elapsed);
            path.push((animal.position.x, animal.position.z));
        }
    }
    paths
}

fn draw_paths(
    img: &mut RgbImage,
    herd: &[AnimalState],
    paths: &[Vec<(f32, f32)>],
    radius: i32,
    scale: u32,
) {
    let (width, height) = img.dimensions();
    let to_px = |(x, z): (f32, f32)| {
        (
            ((x + radius as f32 + 0.5) * scale as f32).clamp(0.0, width as f32 - 1.0),
            ((z + radius as f32 + 0.5) * scale as f32).clamp(0.0, height as f32 - 1.0),
        )
    };

    for (animal, path) in herd.iter().zip(paths.iter()) {
        let color = path_color(animal.archetype);
        for pair in path.windows(2) {
            draw_line_segment_mut(img, to_px(pair[0]), to_px(pair[1]), color);
        }
        let (px, pz) = to_px((animal.position.x, animal.position.z));
        draw_filled_circle_mut(
            img,
            (px as i32, pz as i32),
            (scale / 3).max(1) as i32,
            color,
        );
    }
}

fn main() -> Result<(), GeneratorError> {
    env_logger::init();
    let args = Args::parse();

    let mut generator = WorldGenerator::new(args.seed);
    let world = generator.generate(args.radius);
    info!(
        "generated {} terrain, {} water, {} tree voxels",
        world.terrain.len(),
        world.water.len(),
        world.trees.len()
    );

    let mut img = if args.shaded {
        shaded_map(args.radius, args.scale)?
    } else {
        palette_map(&world, args.radius, args.scale)
    };

    if args.wander_seconds > 0.0 {
        let mut rng = SmallRng::seed_from_u64(args.seed);
        let mut herd = spawn::default_herd();
        let next_id = herd.len() as u32 + 1;
        herd.extend(spawn::scatter(
            args.creatures,
            args.radius.min(20),
            next_id,
            &mut rng,
        ));

        let paths = simulate_paths(&mut herd, &NavConfig::default(), &mut rng, args.wander_seconds);
        draw_paths(&mut img, &herd, &paths, args.radius, args.scale);
        info!(
            "traced {:.1}s of wandering for {} creatures",
            args.wander_seconds,
            herd.len()
        );
    }

    img.save(&args.output)?;
    info!("wrote {}", args.output);

    if let Some(path) = args.json {
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &world.into_render_lists())?;
        info!("wrote {path}");
    }

    Ok(())
}
