//! # Delver
//!
//! Procedural dungeon-layout generation for turn-based roguelikes.
//!
//! ## Architecture Overview
//!
//! Delver builds a level in a single synchronous pass. The pieces, leaf first:
//!
//! - **Rooms**: axis-aligned rectangles with a center point and a carvable interior
//! - **Corridors**: L-shaped tunnels traced between consecutive room centers
//! - **Scattering**: monsters and items dropped into each room's interior
//! - **Builder**: places non-overlapping rooms, carves them, connects them and
//!   populates them
//!
//! All randomness flows through an injected random number generator, so a
//! seeded generator reproduces the same dungeon every time.
//!
//! ```
//! use delver::{generate_dungeon, factories, GenerationConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = GenerationConfig::for_testing(7);
//! let mut rng = StdRng::seed_from_u64(config.seed);
//! let dungeon = generate_dungeon(&config, factories::player().instantiate(), &mut rng).unwrap();
//! assert!(!dungeon.rooms.is_empty());
//! assert_eq!(dungeon.map.player().unwrap().position, dungeon.rooms[0].center());
//! ```

pub mod game;
pub mod generation;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use utils::*;

/// Core error type for the Delver dungeon generator.
#[derive(thiserror::Error, Debug)]
pub enum DelverError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generation parameters would produce empty or inverted random ranges
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A tile access fell outside the map
    #[error("Position out of bounds: {0:?}")]
    OutOfBounds(Position),

    /// No entity with this id is registered in the map
    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),

    /// Generated content failed validation
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Delver codebase.
pub type DelverResult<T> = Result<T, DelverError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default generation constants.
pub mod config {
    /// Default dungeon width in tiles
    pub const DEFAULT_MAP_WIDTH: u32 = 80;

    /// Default dungeon height in tiles
    pub const DEFAULT_MAP_HEIGHT: u32 = 45;

    /// Default number of room placement attempts
    pub const DEFAULT_MAX_ROOMS: u32 = 30;

    /// Default smallest room side, border included
    pub const DEFAULT_ROOM_MIN_SIZE: u32 = 6;

    /// Default largest room side, border included
    pub const DEFAULT_ROOM_MAX_SIZE: u32 = 10;

    /// Default monster cap per room
    pub const DEFAULT_MAX_MONSTERS_PER_ROOM: u32 = 2;

    /// Default item cap per room
    pub const DEFAULT_MAX_ITEMS_PER_ROOM: u32 = 2;

    /// Chance that a spawned monster is an orc rather than a troll
    pub const ORC_CHANCE: f64 = 0.8;
}
