//! # Dungeon Generation
//!
//! Room-and-corridor dungeon layout.
//!
//! A fixed number of room placements is attempted. Each attempt rolls a room
//! size and position, and the candidate is thrown away if it touches any room
//! accepted so far. Accepted rooms are carved, joined to the previously
//! accepted room by an L-shaped corridor, and populated. The player starts at
//! the center of the first accepted room.

use crate::{
    factories, place_entities, reachable_from, tunnel_between, DelverError, DelverResult, Entity,
    GameMap, GenerationConfig, Generator, Position, RectangularRoom, TileType,
};
use log::{debug, info, trace};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// A generated level together with the rooms it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    /// The carved and populated map
    pub map: GameMap,
    /// Accepted rooms in placement order
    pub rooms: Vec<RectangularRoom>,
}

impl Dungeon {
    /// Center of the first accepted room, where the player starts.
    pub fn player_spawn(&self) -> Option<Position> {
        self.rooms.first().map(|room| room.center())
    }

    /// Consumes the dungeon, keeping only the map.
    pub fn into_map(self) -> GameMap {
        self.map
    }
}

/// Generates a dungeon for `player` according to `config`.
///
/// The map starts all wall with `player` as its only entity. Exactly
/// `config.max_rooms` placements are attempted, so fewer rooms than that may
/// be accepted. Every draw comes from `rng`, in a fixed order, so a seeded
/// generator always yields the same dungeon.
///
/// # Errors
///
/// Returns [`DelverError::InvalidConfiguration`] if `config` would make any
/// random range empty.
///
/// # Examples
///
/// ```
/// use delver::{factories, generate_dungeon, GenerationConfig};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let config = GenerationConfig::new(3);
/// let mut rng = StdRng::seed_from_u64(config.seed);
/// let dungeon = generate_dungeon(&config, factories::player().instantiate(), &mut rng).unwrap();
///
/// assert!(dungeon.rooms.len() <= config.max_rooms as usize);
/// assert_eq!(dungeon.map.player().unwrap().position, dungeon.player_spawn().unwrap());
/// ```
pub fn generate_dungeon<R: Rng + ?Sized>(
    config: &GenerationConfig,
    player: Entity,
    rng: &mut R,
) -> DelverResult<Dungeon> {
    config.validate()?;

    let mut map = GameMap::new(config.map_width, config.map_height, vec![player]);
    let player_id = map
        .entities()
        .first()
        .map(|entity| entity.id)
        .ok_or_else(|| DelverError::GenerationFailed("player was not registered".to_string()))?;

    let mut rooms: Vec<RectangularRoom> = Vec::new();
    let mut last_room: Option<RectangularRoom> = None;

    for attempt in 0..config.max_rooms {
        let room = roll_room(config, rng);

        if rooms.iter().any(|other| room.intersects(other)) {
            trace!("Attempt {}: rejected overlapping room {:?}", attempt, room);
            continue;
        }

        map.carve(room.interior())?;

        match last_room {
            None => map.place_entity(player_id, room.center())?,
            Some(previous) => map.carve(tunnel_between(previous.center(), room.center(), rng))?,
        }

        place_entities(
            &room,
            &mut map,
            config.max_monsters_per_room,
            config.max_items_per_room,
            rng,
        )?;

        debug!(
            "Attempt {}: accepted room #{} at ({}, {}) size {}x{}",
            attempt,
            rooms.len(),
            room.x1,
            room.y1,
            room.width(),
            room.height()
        );
        rooms.push(room);
        last_room = Some(room);
    }

    info!(
        "Generated {}x{} dungeon: {}/{} rooms, {} entities, {} floor tiles",
        map.width,
        map.height,
        rooms.len(),
        config.max_rooms,
        map.entities().len(),
        map.floor_count()
    );

    Ok(Dungeon { map, rooms })
}

/// Draws a candidate room: width, height, then x and y.
///
/// Origins leave room for the far wall inside the map.
fn roll_room<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> RectangularRoom {
    let width = rng.gen_range(config.room_min_size..=config.room_max_size) as i32;
    let height = rng.gen_range(config.room_min_size..=config.room_max_size) as i32;

    let x = rng.gen_range(0..=(config.map_width as i32 - width - 1));
    let y = rng.gen_range(0..=(config.map_height as i32 - height - 1));

    RectangularRoom::new(x, y, width, height)
}

/// Dungeon generator using the room-and-corridor algorithm.
///
/// Holds the player template that each generated dungeon starts with.
#[derive(Debug, Clone)]
pub struct RoomCorridorGenerator {
    /// Entity placed in the first room
    pub player: Entity,
}

impl RoomCorridorGenerator {
    /// Creates a generator that spawns the standard player.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::{GenerationConfig, Generator, RoomCorridorGenerator};
    ///
    /// let generator = RoomCorridorGenerator::new();
    /// let config = GenerationConfig::for_testing(12);
    /// let mut rng = delver::generation::utils::create_rng(&config);
    /// let dungeon = generator.generate(&config, &mut rng).unwrap();
    /// assert!(generator.validate(&dungeon, &config).is_ok());
    /// ```
    pub fn new() -> Self {
        Self::with_player(factories::player().instantiate())
    }

    /// Creates a generator that spawns the given player.
    pub fn with_player(player: Entity) -> Self {
        Self { player }
    }

    /// Checks that every room's floor exists and is carved.
    fn validate_rooms(&self, dungeon: &Dungeon) -> DelverResult<()> {
        for (index, room) in dungeon.rooms.iter().enumerate() {
            for pos in room.interior() {
                let carved = dungeon
                    .map
                    .get_tile(pos)
                    .map(|tile| tile.tile_type == TileType::Floor)
                    .unwrap_or(false);
                if !carved {
                    return Err(DelverError::GenerationFailed(format!(
                        "Room {} has an uncarved floor cell at ({}, {})",
                        index, pos.x, pos.y
                    )));
                }
            }

            if let Some(other) = dungeon.rooms[..index].iter().position(|o| o.intersects(room)) {
                return Err(DelverError::GenerationFailed(format!(
                    "Room {} intersects room {}",
                    index, other
                )));
            }
        }
        Ok(())
    }

    /// Validates that all rooms are reachable from the first one.
    fn validate_connectivity(&self, dungeon: &Dungeon) -> DelverResult<()> {
        let Some(start) = dungeon.player_spawn() else {
            return Ok(());
        };

        let reached = reachable_from(&dungeon.map, start);
        for (index, room) in dungeon.rooms.iter().enumerate() {
            if !reached.contains(&room.center()) {
                return Err(DelverError::GenerationFailed(format!(
                    "Room {} is not connected to other rooms",
                    index
                )));
            }
        }
        Ok(())
    }
}

impl Default for RoomCorridorGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<Dungeon> for RoomCorridorGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut dyn RngCore) -> DelverResult<Dungeon> {
        generate_dungeon(config, self.player.clone(), rng)
    }

    fn validate(&self, dungeon: &Dungeon, config: &GenerationConfig) -> DelverResult<()> {
        if dungeon.rooms.len() > config.max_rooms as usize {
            return Err(DelverError::GenerationFailed(format!(
                "{} rooms exceed the {} placement attempts",
                dungeon.rooms.len(),
                config.max_rooms
            )));
        }

        self.validate_rooms(dungeon)?;
        self.validate_connectivity(dungeon)?;

        if let Some(spawn) = dungeon.player_spawn() {
            let player_pos = dungeon.map.player().map(|player| player.position);
            if player_pos != Some(spawn) {
                return Err(DelverError::GenerationFailed(format!(
                    "Player at {:?}, expected first room center {:?}",
                    player_pos, spawn
                )));
            }
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "RoomCorridorGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::utils;
    use crate::EntityKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate(config: &GenerationConfig) -> Dungeon {
        let mut rng = utils::create_rng(config);
        generate_dungeon(config, factories::player().instantiate(), &mut rng).unwrap()
    }

    #[test]
    fn test_room_corridor_generator_creation() {
        let generator = RoomCorridorGenerator::new();
        assert_eq!(generator.player.kind, EntityKind::Player);
        assert_eq!(generator.generator_type(), "RoomCorridorGenerator");
    }

    #[test]
    fn test_generation_is_reproducible() {
        let config = GenerationConfig::new(2024);
        assert_eq!(generate(&config), generate(&config));

        let other = GenerationConfig::new(2025);
        assert_ne!(generate(&config).rooms, generate(&other).rooms);
    }

    #[test]
    fn test_generated_dungeon_validates() {
        let generator = RoomCorridorGenerator::new();
        for seed in 0..20 {
            let config = GenerationConfig::new(seed);
            let mut rng = utils::create_rng(&config);
            let dungeon = generator.generate(&config, &mut rng).unwrap();
            generator.validate(&dungeon, &config).unwrap();
        }
    }

    #[test]
    fn test_player_in_first_room() {
        let dungeon = generate(&GenerationConfig::new(77));
        let player = dungeon.map.player().unwrap();

        assert_eq!(player.id, 0);
        assert_eq!(dungeon.map.entities()[0].id, player.id);
        assert_eq!(player.position, dungeon.rooms[0].center());
    }

    #[test]
    fn test_first_attempt_always_accepted() {
        // One attempt on an empty room list can never collide
        let config = GenerationConfig {
            max_rooms: 1,
            ..GenerationConfig::for_testing(5)
        };
        let dungeon = generate(&config);
        assert_eq!(dungeon.rooms.len(), 1);
    }

    #[test]
    fn test_cramped_map_rejects_overlaps() {
        // Only one 7x7 room fits on an 8x8 map
        let config = GenerationConfig {
            max_rooms: 25,
            room_min_size: 7,
            room_max_size: 7,
            map_width: 8,
            map_height: 8,
            ..GenerationConfig::for_testing(5)
        };
        let dungeon = generate(&config);
        assert_eq!(dungeon.rooms, vec![RectangularRoom::new(0, 0, 7, 7)]);
        assert_eq!(dungeon.map.floor_count(), 36);
    }

    #[test]
    fn test_no_population_keeps_player_alone() {
        let config = GenerationConfig {
            max_monsters_per_room: 0,
            max_items_per_room: 0,
            ..GenerationConfig::new(31)
        };
        let dungeon = generate(&config);
        assert_eq!(dungeon.map.entities().len(), 1);
        assert!(dungeon.map.entities()[0].is_player());
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = GenerationConfig {
            room_min_size: 9,
            room_max_size: 4,
            ..GenerationConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let result = generate_dungeon(&config, factories::player().instantiate(), &mut rng);
        assert!(matches!(result, Err(DelverError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_validation_catches_disconnected_room() {
        let generator = RoomCorridorGenerator::new();
        let config = GenerationConfig::for_testing(1);

        let mut player = factories::player().instantiate();
        let first = RectangularRoom::new(1, 1, 4, 4);
        let second = RectangularRoom::new(10, 10, 4, 4);
        player.position = first.center();

        let mut map = GameMap::new(config.map_width, config.map_height, vec![player]);
        map.carve(first.interior()).unwrap();
        map.carve(second.interior()).unwrap();

        let dungeon = Dungeon {
            map,
            rooms: vec![first, second],
        };
        assert!(matches!(
            generator.validate(&dungeon, &config),
            Err(DelverError::GenerationFailed(_))
        ));
    }

    #[test]
    fn test_roll_room_fits_map() {
        let config = GenerationConfig::for_testing(0);
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..500 {
            let room = roll_room(&config, &mut rng);
            assert!(room.x1 >= 0 && room.y1 >= 0);
            assert!(room.x2 < config.map_width as i32);
            assert!(room.y2 < config.map_height as i32);
            assert!((config.room_min_size as i32..=config.room_max_size as i32).contains(&room.width()));
        }
    }
}
