//! # Generation Module
//!
//! Procedural dungeon layout generation.
//!
//! Levels are built from rectangular rooms placed at random with rejection on
//! overlap, joined in placement order by L-shaped corridors, then populated
//! with monsters and items.

pub mod corridors;
pub mod dungeon;
pub mod encounters;
pub mod items;

pub use corridors::*;
pub use dungeon::*;
pub use encounters::*;
pub use items::*;

use crate::{config, DelverError, DelverResult, Position};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for procedural generation.
///
/// Room sizes count the wall border, so a room of size `n` carves an
/// `(n - 1) × (n - 1)` floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Number of room placement attempts (not successes)
    pub max_rooms: u32,
    /// Minimum room side length
    pub room_min_size: u32,
    /// Maximum room side length
    pub room_max_size: u32,
    /// Map width in tiles
    pub map_width: u32,
    /// Map height in tiles
    pub map_height: u32,
    /// Upper bound on monster spawn attempts per room
    pub max_monsters_per_room: u32,
    /// Upper bound on item spawn attempts per room
    pub max_items_per_room: u32,
}

impl GenerationConfig {
    /// Creates the standard configuration with the given seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(42);
    /// assert_eq!(config.seed, 42);
    /// assert!(config.room_max_size >= config.room_min_size);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            max_rooms: config::DEFAULT_MAX_ROOMS,
            room_min_size: config::DEFAULT_ROOM_MIN_SIZE,
            room_max_size: config::DEFAULT_ROOM_MAX_SIZE,
            map_width: config::DEFAULT_MAP_WIDTH,
            map_height: config::DEFAULT_MAP_HEIGHT,
            max_monsters_per_room: config::DEFAULT_MAX_MONSTERS_PER_ROOM,
            max_items_per_room: config::DEFAULT_MAX_ITEMS_PER_ROOM,
        }
    }

    /// Creates a configuration for testing with smaller, simpler levels.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            max_rooms: 10,
            room_min_size: 4,
            room_max_size: 7,
            map_width: 40,
            map_height: 30,
            max_monsters_per_room: 1,
            max_items_per_room: 1,
        }
    }

    /// Parses a configuration from JSON. Missing fields take default values.
    pub fn from_json_str(json: &str) -> DelverResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> DelverResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks that every random range drawn during generation is non-empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::GenerationConfig;
    ///
    /// let mut config = GenerationConfig::new(1);
    /// config.room_min_size = 12;
    /// config.room_max_size = 8;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> DelverResult<()> {
        if self.max_rooms == 0 {
            return Err(invalid("max_rooms must be at least 1"));
        }
        // Rooms of side 1 have no interior to carve or populate
        if self.room_min_size < 2 {
            return Err(invalid(format!(
                "room_min_size must be at least 2, got {}",
                self.room_min_size
            )));
        }
        if self.room_min_size > self.room_max_size {
            return Err(invalid(format!(
                "room_min_size ({}) exceeds room_max_size ({})",
                self.room_min_size, self.room_max_size
            )));
        }
        if self.map_width <= self.room_max_size || self.map_height <= self.room_max_size {
            return Err(invalid(format!(
                "a {}x{} map cannot hold a room of size {} plus its border",
                self.map_width, self.map_height, self.room_max_size
            )));
        }
        if i32::try_from(self.map_width).is_err() || i32::try_from(self.map_height).is_err() {
            return Err(invalid("map dimensions exceed the coordinate range"));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

fn invalid(message: impl Into<String>) -> DelverError {
    DelverError::InvalidConfiguration(message.into())
}

/// An axis-aligned room bounded by the corners `(x1, y1)` and `(x2, y2)`.
///
/// The corner rows and columns are the room's wall border; the floor lies
/// strictly between them.
///
/// # Examples
///
/// ```
/// use delver::{RectangularRoom, Position};
///
/// let room = RectangularRoom::new(0, 0, 5, 5);
/// assert_eq!(room.center(), Position::new(2, 2));
/// assert_eq!(room.interior().count(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RectangularRoom {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RectangularRoom {
    /// Creates a room whose top-left corner is `(x, y)`.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Midpoint of the corners, truncated toward zero.
    pub fn center(&self) -> Position {
        Position::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Inclusive x range of the floor.
    pub fn interior_x(&self) -> std::ops::RangeInclusive<i32> {
        (self.x1 + 1)..=(self.x2 - 1)
    }

    /// Inclusive y range of the floor.
    pub fn interior_y(&self) -> std::ops::RangeInclusive<i32> {
        (self.y1 + 1)..=(self.y2 - 1)
    }

    /// Every floor cell, row by row.
    pub fn interior(&self) -> impl Iterator<Item = Position> {
        let xs = self.interior_x();
        self.interior_y()
            .flat_map(move |y| xs.clone().map(move |x| Position::new(x, y)))
    }

    /// Returns true if `pos` is a floor cell of this room.
    pub fn interior_contains(&self, pos: Position) -> bool {
        self.interior_x().contains(&pos.x) && self.interior_y().contains(&pos.y)
    }

    /// Returns true if the rooms overlap, borders included.
    ///
    /// Rooms that merely share an edge count as intersecting, which keeps at
    /// least one wall tile between accepted rooms.
    pub fn intersects(&self, other: &RectangularRoom) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }
}

/// Trait for procedural generators.
///
/// The random source is injected so callers can seed it for reproducible
/// output.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut dyn RngCore) -> DelverResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> DelverResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }
}
