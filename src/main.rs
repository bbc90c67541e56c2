use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};

use tileworld_generator::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use tileworld_generator::{ascii, export, generate_world, WorldConfig};

#[derive(Parser, Debug)]
#[command(name = "tileworld_generator")]
#[command(about = "Generate side-view 2D tile worlds with biomes, caves, water and structures")]
struct Args {
    /// Width of the world in tiles
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Height of the world in tiles
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Sea level row (rows at or below it fill with water)
    #[arg(long)]
    sea_level: Option<i32>,

    /// JSON world config; command-line sizes override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Export the world to PNG
    #[arg(long)]
    png: Option<PathBuf>,

    /// Pixels per tile in the PNG export
    #[arg(long, default_value = "1")]
    png_scale: u32,

    /// Export a strip coloured by each column's biome
    #[arg(long)]
    biome_strip: Option<PathBuf>,

    /// Export the world as ASCII text
    #[arg(long)]
    ascii: Option<PathBuf>,

    /// Export stats and structure list as JSON
    #[arg(long)]
    stats: Option<PathBuf>,

    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut config = match &args.config {
        Some(path) => WorldConfig::from_json_file(path)?,
        None => WorldConfig::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(sea_level) = args.sea_level {
        config.sea_level = sea_level;
    }

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let world = generate_world(&config, seed)?;

    println!("Seed: {}", world.seed());
    println!("Size: {}x{}", world.width(), world.height());
    println!("{}", world.stats.summary());

    if let Some(path) = &args.png {
        export::export_png(&world, path, args.png_scale)?;
        info!("Wrote {}", path.display());
    }
    if let Some(path) = &args.biome_strip {
        export::export_biome_strip(&world, path, 16)?;
        info!("Wrote {}", path.display());
    }
    if let Some(path) = &args.ascii {
        ascii::export_world_file(&world, path)?;
        info!("Wrote {}", path.display());
    }
    if let Some(path) = &args.stats {
        export::export_stats_json(&world, path)?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}
