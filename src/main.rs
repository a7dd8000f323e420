//! # Delver Main Entry Point
//!
//! Generates a single dungeon from command line settings and prints it.

use clap::Parser;
use delver::{DelverResult, GenerationConfig, Generator, RoomCorridorGenerator};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments for the Delver dungeon generator.
#[derive(Parser, Debug)]
#[command(name = "delver")]
#[command(about = "Procedural room-and-corridor dungeon generator")]
#[command(version)]
struct Args {
    /// Random seed for dungeon generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with generation settings; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Map width in tiles
    #[arg(long)]
    width: Option<u32>,

    /// Map height in tiles
    #[arg(long)]
    height: Option<u32>,

    /// Number of room placement attempts
    #[arg(long)]
    max_rooms: Option<u32>,

    /// Smallest room side, wall border included
    #[arg(long)]
    room_min_size: Option<u32>,

    /// Largest room side, wall border included
    #[arg(long)]
    room_max_size: Option<u32>,

    /// Maximum monsters rolled per room
    #[arg(long)]
    max_monsters: Option<u32>,

    /// Maximum items rolled per room
    #[arg(long)]
    max_items: Option<u32>,

    /// Print the dungeon as JSON instead of a text map
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    /// Builds the generation config from the optional file plus flag overrides.
    fn generation_config(&self) -> DelverResult<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::from_json_file(path)?,
            None => GenerationConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(width) = self.width {
            config.map_width = width;
        }
        if let Some(height) = self.height {
            config.map_height = height;
        }
        if let Some(max_rooms) = self.max_rooms {
            config.max_rooms = max_rooms;
        }
        if let Some(size) = self.room_min_size {
            config.room_min_size = size;
        }
        if let Some(size) = self.room_max_size {
            config.room_max_size = size;
        }
        if let Some(count) = self.max_monsters {
            config.max_monsters_per_room = count;
        }
        if let Some(count) = self.max_items {
            config.max_items_per_room = count;
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("delver: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        use tracing_subscriber::EnvFilter;

        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(log_level))
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!("tracing subscriber installed");
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .parse_default_env()
            .init();
    }
}

fn run(args: &Args) -> DelverResult<()> {
    let config = args.generation_config()?;
    info!("Starting Delver v{} with seed {}", delver::VERSION, config.seed);

    let generator = RoomCorridorGenerator::new();
    let mut rng = delver::generation::utils::create_rng(&config);

    let dungeon = generator.generate(&config, &mut rng)?;
    generator.validate(&dungeon, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dungeon)?);
    } else {
        print!("{}", dungeon.map);
        println!(
            "seed {} | {} rooms | {} entities",
            config.seed,
            dungeon.rooms.len(),
            dungeon.map.entities().len()
        );
    }

    Ok(())
}
