//! # Item Scattering
//!
//! Drops consumables onto free floor cells of a room.

use crate::generation::encounters::random_interior_cell;
use crate::{factories, DelverResult, GameMap, RectangularRoom};
use rand::Rng;

/// Makes `attempts` tries at placing a health potion in `room`.
///
/// Each try picks one random interior cell and gives up on it if an entity
/// already stands there. Returns how many potions were placed.
pub fn scatter_items<R: Rng + ?Sized>(
    room: &RectangularRoom,
    map: &mut GameMap,
    attempts: u32,
    rng: &mut R,
) -> DelverResult<usize> {
    let potion = factories::health_potion();
    let mut placed = 0;

    for _ in 0..attempts {
        let pos = random_interior_cell(room, rng);
        if map.entity_at(pos).is_some() {
            continue;
        }
        potion.spawn(map, pos)?;
        placed += 1;
    }

    Ok(placed)
}
