//! # Entity Factories
//!
//! Named prototypes that stamp new entities onto a map.

use crate::{Consumable, DelverResult, Entity, EntityId, EntityKind, Fighter, GameMap, Position};
use log::trace;

/// A template entity that can be spawned any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityPrototype {
    template: Entity,
}

impl EntityPrototype {
    pub fn new(template: Entity) -> Self {
        Self { template }
    }

    /// Name carried by every entity spawned from this prototype.
    pub fn name(&self) -> &str {
        &self.template.name
    }

    /// Returns a fresh, unregistered copy of the template.
    pub fn instantiate(&self) -> Entity {
        self.template.clone()
    }

    /// Registers a copy of the template in `map` at `pos`.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::{factories, GameMap, Position};
    ///
    /// let mut map = GameMap::new(10, 10, Vec::new());
    /// let id = factories::orc().spawn(&mut map, Position::new(2, 3)).unwrap();
    /// assert_eq!(map.get_entity(id).unwrap().name, "Orc");
    /// ```
    pub fn spawn(&self, map: &mut GameMap, pos: Position) -> DelverResult<EntityId> {
        let mut entity = self.instantiate();
        entity.position = pos;
        let id = map.add_entity(entity)?;
        trace!("Spawned {} #{} at ({}, {})", self.name(), id, pos.x, pos.y);
        Ok(id)
    }
}

/// The player character.
pub fn player() -> EntityPrototype {
    EntityPrototype::new(
        Entity::new("Player", EntityKind::Player, '@').with_fighter(Fighter::new(30, 2, 5)),
    )
}

/// Common, weak monster.
pub fn orc() -> EntityPrototype {
    EntityPrototype::new(
        Entity::new("Orc", EntityKind::Monster, 'o').with_fighter(Fighter::new(10, 0, 3)),
    )
}

/// Rarer, tougher monster.
pub fn troll() -> EntityPrototype {
    EntityPrototype::new(
        Entity::new("Troll", EntityKind::Monster, 'T').with_fighter(Fighter::new(16, 1, 4)),
    )
}

pub fn health_potion() -> EntityPrototype {
    EntityPrototype::new(
        Entity::new("Health Potion", EntityKind::Item, '!')
            .with_consumable(Consumable::Healing { amount: 4 }),
    )
}
