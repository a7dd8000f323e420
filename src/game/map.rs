//! # Game Map
//!
//! Tile grid plus the entities standing on it.

use crate::{DelverError, DelverResult, Entity, EntityId, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of terrain a cell can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    /// Solid rock
    Wall,
    /// Open ground
    Floor,
}

impl TileType {
    /// Returns true if actors can walk through this tile.
    pub fn is_passable(self) -> bool {
        matches!(self, TileType::Floor)
    }

    /// Character used in text dumps.
    pub fn glyph(self) -> char {
        match self {
            TileType::Wall => '#',
            TileType::Floor => '.',
        }
    }
}

/// A single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub tile_type: TileType,
}

impl Tile {
    pub fn new(tile_type: TileType) -> Self {
        Self { tile_type }
    }

    pub fn wall() -> Self {
        Self::new(TileType::Wall)
    }

    pub fn floor() -> Self {
        Self::new(TileType::Floor)
    }
}

/// A width × height tile grid with its entity collection.
///
/// Tiles are stored row-major as `tiles[y][x]`. Entities keep insertion
/// order, so the first registered entity stays first.
///
/// # Examples
///
/// ```
/// use delver::{GameMap, Position, Tile, TileType};
///
/// let mut map = GameMap::new(20, 10, Vec::new());
/// assert_eq!(map.get_tile(Position::new(3, 3)).unwrap().tile_type, TileType::Wall);
///
/// map.set_tile(Position::new(3, 3), Tile::floor()).unwrap();
/// assert_eq!(map.floor_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    /// Width in tiles
    pub width: u32,
    /// Height in tiles
    pub height: u32,
    /// Row-major tile grid
    pub tiles: Vec<Vec<Tile>>,
    entities: Vec<Entity>,
    next_entity_id: EntityId,
}

impl GameMap {
    /// Creates an all-wall map and registers `entities` in order.
    ///
    /// Each entity is given a fresh id, overwriting whatever it carried.
    pub fn new(width: u32, height: u32, entities: Vec<Entity>) -> Self {
        let mut map = Self {
            width,
            height,
            tiles: vec![vec![Tile::wall(); width as usize]; height as usize],
            entities: Vec::with_capacity(entities.len()),
            next_entity_id: 0,
        };

        for entity in entities {
            map.register(entity);
        }

        map
    }

    /// Returns true if `pos` lies inside the grid.
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    pub fn get_tile(&self, pos: Position) -> Option<&Tile> {
        if !self.is_valid_position(pos) {
            return None;
        }
        self.tiles
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
    }

    pub fn get_tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        if !self.is_valid_position(pos) {
            return None;
        }
        self.tiles
            .get_mut(pos.y as usize)
            .and_then(|row| row.get_mut(pos.x as usize))
    }

    /// Overwrites the tile at `pos`.
    pub fn set_tile(&mut self, pos: Position, tile: Tile) -> DelverResult<()> {
        let slot = self
            .get_tile_mut(pos)
            .ok_or(DelverError::OutOfBounds(pos))?;
        *slot = tile;
        Ok(())
    }

    /// Turns every given position into floor.
    ///
    /// Carving only ever opens walls, so repeated positions are harmless.
    pub fn carve<I>(&mut self, positions: I) -> DelverResult<()>
    where
        I: IntoIterator<Item = Position>,
    {
        for pos in positions {
            self.set_tile(pos, Tile::floor())?;
        }
        Ok(())
    }

    /// Returns true if the tile at `pos` exists and is passable.
    pub fn is_passable(&self, pos: Position) -> bool {
        self.get_tile(pos)
            .map(|tile| tile.tile_type.is_passable())
            .unwrap_or(false)
    }

    /// Counts floor tiles across the whole grid.
    pub fn floor_count(&self) -> usize {
        self.tiles
            .iter()
            .flat_map(|row| row.iter())
            .filter(|tile| tile.tile_type == TileType::Floor)
            .count()
    }

    /// All registered entities in insertion order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn get_entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    /// Returns the first entity standing on `pos`.
    ///
    /// This is a linear scan; generation only spawns a handful of entities
    /// per room.
    pub fn entity_at(&self, pos: Position) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.is_at(pos))
    }

    /// Returns the player entity, if one is registered.
    pub fn player(&self) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.is_player())
    }

    /// Registers a new entity at its current position and returns its id.
    pub fn add_entity(&mut self, entity: Entity) -> DelverResult<EntityId> {
        if !self.is_valid_position(entity.position) {
            return Err(DelverError::OutOfBounds(entity.position));
        }
        Ok(self.register(entity))
    }

    /// Moves an already registered entity to `pos`.
    pub fn place_entity(&mut self, id: EntityId, pos: Position) -> DelverResult<()> {
        if !self.is_valid_position(pos) {
            return Err(DelverError::OutOfBounds(pos));
        }
        let entity = self
            .entities
            .iter_mut()
            .find(|entity| entity.id == id)
            .ok_or(DelverError::EntityNotFound(id))?;
        entity.position = pos;
        Ok(())
    }

    fn register(&mut self, mut entity: Entity) -> EntityId {
        let id = self.next_entity_id;
        self.next_entity_id += 1;
        entity.id = id;
        self.entities.push(entity);
        id
    }
}

impl fmt::Display for GameMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.tiles.iter().enumerate() {
            let line: String = row
                .iter()
                .enumerate()
                .map(|(x, tile)| {
                    // Later entities draw over earlier ones, except the player stays on top
                    let pos = Position::new(x as i32, y as i32);
                    let mut here = self.entities.iter().filter(|e| e.is_at(pos));
                    match here.clone().find(|e| e.is_player()) {
                        Some(player) => player.glyph,
                        None => here
                            .next_back()
                            .map(|e| e.glyph)
                            .unwrap_or_else(|| tile.tile_type.glyph()),
                    }
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
