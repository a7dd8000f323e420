//! # Entities
//!
//! Actors and items that live on a [`GameMap`](crate::GameMap).

use crate::{EntityId, Position};
use serde::{Deserialize, Serialize};

/// Broad category of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// The player character
    Player,
    /// A hostile creature
    Monster,
    /// Something that can be picked up
    Item,
}

/// Combat statistics for entities that can fight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    /// Maximum hit points
    pub max_hp: u32,
    /// Current hit points
    pub hp: u32,
    /// Damage reduction
    pub defense: u32,
    /// Base attack damage
    pub power: u32,
}

impl Fighter {
    /// Creates a fighter at full health.
    pub fn new(max_hp: u32, defense: u32, power: u32) -> Self {
        Self {
            max_hp,
            hp: max_hp,
            defense,
            power,
        }
    }
}

/// Effect applied when an item is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Consumable {
    /// Restores hit points
    Healing { amount: u32 },
}

/// A single thing on the map.
///
/// # Examples
///
/// ```
/// use delver::{Entity, EntityKind, Position};
///
/// let rat = Entity::new("rat", EntityKind::Monster, 'r');
/// assert_eq!(rat.position, Position::origin());
/// assert!(rat.blocks_movement);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Map-assigned identifier
    pub id: EntityId,
    /// Display name
    pub name: String,
    /// Broad category
    pub kind: EntityKind,
    /// Current location
    pub position: Position,
    /// Character used in text dumps
    pub glyph: char,
    /// Whether other actors are stopped by this entity
    pub blocks_movement: bool,
    /// Combat stats, for actors
    pub fighter: Option<Fighter>,
    /// Use effect, for items
    pub consumable: Option<Consumable>,
}

impl Entity {
    /// Creates an unregistered entity at the origin.
    ///
    /// Actors block movement; items do not.
    pub fn new(name: impl Into<String>, kind: EntityKind, glyph: char) -> Self {
        Self {
            id: 0,
            name: name.into(),
            kind,
            position: Position::origin(),
            glyph,
            blocks_movement: kind != EntityKind::Item,
            fighter: None,
            consumable: None,
        }
    }

    /// Attaches combat stats.
    pub fn with_fighter(mut self, fighter: Fighter) -> Self {
        self.fighter = Some(fighter);
        self
    }

    /// Attaches a use effect.
    pub fn with_consumable(mut self, consumable: Consumable) -> Self {
        self.consumable = Some(consumable);
        self
    }

    /// Returns true if this entity stands on `pos`.
    pub fn is_at(&self, pos: Position) -> bool {
        self.position == pos
    }

    pub fn is_player(&self) -> bool {
        self.kind == EntityKind::Player
    }
}
