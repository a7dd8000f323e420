//! # Encounter Placement
//!
//! Populates rooms with monsters and items.
//!
//! Every spawn attempt picks a single random interior cell. Occupied cells
//! are skipped without retrying, so a room may end up with fewer entities
//! than were rolled.

use crate::{config, factories, scatter_items, DelverResult, GameMap, Position, RectangularRoom};
use log::trace;
use rand::Rng;

/// Rolls monster and item counts for `room` and spawns them into `map`.
///
/// Monster count is drawn from `0..=max_monsters`, then item count from
/// `0..=max_items`. Each monster is an orc with probability 0.8, otherwise a
/// troll. Items are health potions.
///
/// # Examples
///
/// ```
/// use delver::{place_entities, GameMap, RectangularRoom};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let room = RectangularRoom::new(1, 1, 8, 6);
/// let mut map = GameMap::new(12, 10, Vec::new());
/// let mut rng = StdRng::seed_from_u64(5);
///
/// place_entities(&room, &mut map, 3, 2, &mut rng).unwrap();
/// assert!(map.entities().len() <= 5);
/// assert!(map.entities().iter().all(|e| room.interior_contains(e.position)));
/// ```
pub fn place_entities<R: Rng + ?Sized>(
    room: &RectangularRoom,
    map: &mut GameMap,
    max_monsters: u32,
    max_items: u32,
    rng: &mut R,
) -> DelverResult<()> {
    let monster_count = rng.gen_range(0..=max_monsters);
    let item_count = rng.gen_range(0..=max_items);

    let monsters = scatter_monsters(room, map, monster_count, rng)?;
    let items = scatter_items(room, map, item_count, rng)?;

    trace!(
        "Room ({}, {})-({}, {}): {}/{} monsters, {}/{} items",
        room.x1,
        room.y1,
        room.x2,
        room.y2,
        monsters,
        monster_count,
        items,
        item_count
    );

    Ok(())
}

/// Makes `attempts` tries at placing a monster in `room`.
///
/// Returns how many monsters were placed.
pub fn scatter_monsters<R: Rng + ?Sized>(
    room: &RectangularRoom,
    map: &mut GameMap,
    attempts: u32,
    rng: &mut R,
) -> DelverResult<usize> {
    let orc = factories::orc();
    let troll = factories::troll();
    let mut placed = 0;

    for _ in 0..attempts {
        let pos = random_interior_cell(room, rng);
        if map.entity_at(pos).is_some() {
            continue;
        }

        if rng.gen::<f64>() < config::ORC_CHANCE {
            orc.spawn(map, pos)?;
        } else {
            troll.spawn(map, pos)?;
        }
        placed += 1;
    }

    Ok(placed)
}

/// Picks a uniformly random floor cell of `room`, x first.
pub(crate) fn random_interior_cell<R: Rng + ?Sized>(room: &RectangularRoom, rng: &mut R) -> Position {
    let x = rng.gen_range(room.interior_x());
    let y = rng.gen_range(room.interior_y());
    Position::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Entity, EntityKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_zero_caps_spawn_nothing() {
        let room = RectangularRoom::new(0, 0, 10, 10);
        let mut map = GameMap::new(12, 12, Vec::new());
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            place_entities(&room, &mut map, 0, 0, &mut rng).unwrap();
        }
        assert!(map.entities().is_empty());
    }

    #[test]
    fn test_entities_never_share_a_cell() {
        let room = RectangularRoom::new(0, 0, 4, 4);
        let mut map = GameMap::new(6, 6, Vec::new());
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..20 {
            place_entities(&room, &mut map, 5, 5, &mut rng).unwrap();
        }

        let cells: HashSet<_> = map.entities().iter().map(|e| e.position).collect();
        assert_eq!(cells.len(), map.entities().len());
        // 3x3 interior saturates
        assert!(map.entities().len() <= 9);
    }

    #[test]
    fn test_occupied_cell_is_skipped() {
        let room = RectangularRoom::new(0, 0, 2, 2);
        let mut player = Entity::new("Player", EntityKind::Player, '@');
        player.position = room.center();
        let mut map = GameMap::new(4, 4, vec![player]);
        let mut rng = StdRng::seed_from_u64(4);

        let placed = scatter_monsters(&room, &mut map, 10, &mut rng).unwrap();
        assert_eq!(placed, 0);
        assert_eq!(map.entities().len(), 1);
    }

    #[test]
    fn test_monster_mix_favours_orcs() {
        let room = RectangularRoom::new(0, 0, 41, 41);
        let mut map = GameMap::new(42, 42, Vec::new());
        let mut rng = StdRng::seed_from_u64(8);

        scatter_monsters(&room, &mut map, 400, &mut rng).unwrap();

        let orcs = map.entities().iter().filter(|e| e.name == "Orc").count();
        let trolls = map.entities().iter().filter(|e| e.name == "Troll").count();
        assert!(map.entities().iter().all(|e| e.kind == EntityKind::Monster));
        assert!(orcs > trolls * 2, "orcs: {}, trolls: {}", orcs, trolls);
        assert!(trolls > 0);
    }

    #[test]
    fn test_random_interior_cell_bounds() {
        let room = RectangularRoom::new(3, 5, 4, 3);
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..200 {
            assert!(room.interior_contains(random_interior_cell(&room, &mut rng)));
        }
    }
}
