//! # Cave Explorer Entry Point
//!
//! Generates a run of rooms from a seed and prints them, either as a short
//! text summary per room or as JSON.

use cave_explorer::{
    create_rng, CaveError, CaveResult, GenerationConfig, Generator, Room, RoomGenerator,
};
use clap::Parser;
use log::{debug, info};
use serde::Serialize;
use std::path::PathBuf;

/// Command line arguments for Cave Explorer.
#[derive(Parser, Debug)]
#[command(name = "cave_explorer")]
#[command(about = "Procedural platformer rooms with a reachable key in every one")]
#[command(version)]
struct Args {
    /// Random seed for room generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of consecutive rooms to generate
    #[arg(short, long, default_value_t = 1)]
    rooms: u32,

    /// JSON file with generation settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scene width, overriding the configuration
    #[arg(long)]
    width: Option<i32>,

    /// Scene height, overriding the configuration
    #[arg(long)]
    height: Option<i32>,

    /// Print rooms as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// One generated room together with its reachability facts.
#[derive(Debug, Serialize)]
struct RoomReport {
    room_number: u32,
    reachable: Vec<usize>,
    route_to_key: Option<Vec<usize>>,
    room: Room,
}

fn main() -> CaveResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    info!("Starting Cave Explorer v{}", cave_explorer::VERSION);

    let config = load_config(&args)?;
    let generator = RoomGenerator::new(config)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Using seed: {}", seed);

    let reports = generate_rooms(&generator, seed, args.rooms)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("seed {}", seed);
        for report in &reports {
            print_summary(report);
        }
    }

    Ok(())
}

/// Initializes logging based on the configured level.
fn initialize_logging(log_level: &str) -> CaveResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        use tracing::Level;

        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| CaveError::InvalidState(format!("logging init failed: {}", e)))?;
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .try_init()
            .map_err(|e| CaveError::InvalidState(format!("logging init failed: {}", e)))?;
    }

    Ok(())
}

/// Builds the generation config from the optional file and size overrides.
fn load_config(args: &Args) -> CaveResult<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            GenerationConfig::load_from_file(path)?
        }
        None => GenerationConfig::default(),
    };

    if let Some(width) = args.width {
        config.scene_width = width;
    }
    if let Some(height) = args.height {
        config.scene_height = height;
    }

    debug!("Generation config: {:?}", config);
    Ok(config)
}

/// Generates `count` rooms in sequence from a single seeded source.
fn generate_rooms(generator: &RoomGenerator, seed: u64, count: u32) -> CaveResult<Vec<RoomReport>> {
    let mut rng = create_rng(seed);
    let mut reports = Vec::with_capacity(count as usize);

    for room_number in 1..=count {
        let room = generator.generate(&mut rng)?;
        let reachable = generator.reachability(&room).indices().collect();
        let route_to_key = generator.route_to_key(&room);

        reports.push(RoomReport {
            room_number,
            reachable,
            route_to_key,
            room,
        });
    }

    Ok(reports)
}

fn print_summary(report: &RoomReport) {
    let room = &report.room;
    let key = match room.key.platform {
        Some(index) => format!("platform {}", index),
        None => "ground (fallback)".to_string(),
    };
    let route = report
        .route_to_key
        .as_ref()
        .map(|route| {
            route
                .iter()
                .map(|index| index.to_string())
                .collect::<Vec<_>>()
                .join(" -> ")
        })
        .unwrap_or_else(|| "none".to_string());

    println!(
        "room {}: {} platforms, {} reachable, {} enemies, {} traps, key on {} at {:?}, route {}",
        report.room_number,
        room.platforms.len(),
        report.reachable.len(),
        room.enemies.len(),
        room.traps.len(),
        key,
        room.key.position(),
        route
    );
}
