//! # Reachability
//!
//! Flood fills over passable tiles, used to check dungeon connectivity.

use crate::{GameMap, Position};
use pathfinding::prelude::bfs_reach;
use std::collections::HashSet;

/// Returns every passable position reachable from `start` by cardinal steps.
///
/// An impassable or out-of-bounds `start` reaches nothing.
pub fn reachable_from(map: &GameMap, start: Position) -> HashSet<Position> {
    if !map.is_passable(start) {
        return HashSet::new();
    }

    bfs_reach(start, |&pos| {
        pos.cardinal_adjacent_positions()
            .into_iter()
            .filter(|&next| map.is_passable(next))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tile;

    #[test]
    fn test_wall_start_reaches_nothing() {
        let map = GameMap::new(5, 5, Vec::new());
        assert!(reachable_from(&map, Position::new(2, 2)).is_empty());
        assert!(reachable_from(&map, Position::new(-1, 2)).is_empty());
    }

    #[test]
    fn test_diagonal_gap_is_not_crossed() {
        let mut map = GameMap::new(5, 5, Vec::new());
        map.carve(vec![Position::new(1, 1), Position::new(2, 1), Position::new(3, 2)])
            .unwrap();

        let reached = reachable_from(&map, Position::new(1, 1));
        assert_eq!(reached.len(), 2);
        assert!(!reached.contains(&Position::new(3, 2)));

        map.set_tile(Position::new(3, 1), Tile::floor()).unwrap();
        assert_eq!(reachable_from(&map, Position::new(1, 1)).len(), 4);
    }
}
