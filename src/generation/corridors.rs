//! # Corridor Tracing
//!
//! L-shaped tunnels between two points.

use crate::{bresenham_line, Position};
use rand::Rng;

/// Which leg of an L-shaped tunnel is dug first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorridorBend {
    /// Run along the start row, then along the end column
    HorizontalFirst,
    /// Run along the start column, then along the end row
    VerticalFirst,
}

impl CorridorBend {
    /// Picks either bend with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<f64>() < 0.5 {
            CorridorBend::HorizontalFirst
        } else {
            CorridorBend::VerticalFirst
        }
    }

    /// Where the two legs meet.
    pub fn corner(self, start: Position, end: Position) -> Position {
        match self {
            CorridorBend::HorizontalFirst => Position::new(end.x, start.y),
            CorridorBend::VerticalFirst => Position::new(start.x, end.y),
        }
    }
}

/// Traces the cells of an L-shaped tunnel with the given bend.
///
/// The corner cell ends the first leg and starts the second, so it appears
/// twice. Carving is idempotent, so callers can write the cells as-is.
pub fn trace_tunnel(start: Position, end: Position, bend: CorridorBend) -> Vec<Position> {
    let corner = bend.corner(start, end);
    let mut cells = bresenham_line(start, corner);
    cells.extend(bresenham_line(corner, end));
    cells
}

/// Traces an L-shaped tunnel from `start` to `end` with a random bend.
///
/// Each call makes its own bend choice.
///
/// # Examples
///
/// ```
/// use delver::{tunnel_between, Position};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let cells = tunnel_between(Position::new(0, 0), Position::new(2, 2), &mut rng);
/// assert_eq!(cells.len(), 6);
/// assert_eq!(cells.first(), Some(&Position::new(0, 0)));
/// assert_eq!(cells.last(), Some(&Position::new(2, 2)));
/// ```
pub fn tunnel_between<R: Rng + ?Sized>(start: Position, end: Position, rng: &mut R) -> Vec<Position> {
    trace_tunnel(start, end, CorridorBend::random(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_straight_tunnel_ignores_bend() {
        let expected = vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0)];
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..20 {
            let cells = tunnel_between(p(0, 0), p(3, 0), &mut rng);
            let unique: Vec<_> = {
                let mut seen = HashSet::new();
                cells.iter().copied().filter(|c| seen.insert(*c)).collect()
            };
            assert_eq!(unique, expected);
        }
    }

    #[test]
    fn test_horizontal_first_bend() {
        let cells = trace_tunnel(p(0, 0), p(2, 2), CorridorBend::HorizontalFirst);
        assert_eq!(cells, vec![p(0, 0), p(1, 0), p(2, 0), p(2, 0), p(2, 1), p(2, 2)]);
    }

    #[test]
    fn test_vertical_first_bend() {
        let cells = trace_tunnel(p(0, 0), p(2, 2), CorridorBend::VerticalFirst);
        assert_eq!(cells, vec![p(0, 0), p(0, 1), p(0, 2), p(0, 2), p(1, 2), p(2, 2)]);
    }

    #[test]
    fn test_random_tunnel_is_one_of_two_shapes() {
        let horizontal = trace_tunnel(p(0, 0), p(2, 2), CorridorBend::HorizontalFirst);
        let vertical = trace_tunnel(p(0, 0), p(2, 2), CorridorBend::VerticalFirst);
        let mut rng = StdRng::seed_from_u64(7);

        let mut seen_horizontal = false;
        let mut seen_vertical = false;
        for _ in 0..64 {
            let cells = tunnel_between(p(0, 0), p(2, 2), &mut rng);
            assert_eq!(cells.len(), 6);
            assert_eq!(cells.iter().collect::<HashSet<_>>().len(), 5);
            seen_horizontal |= cells == horizontal;
            seen_vertical |= cells == vertical;
            assert!(cells == horizontal || cells == vertical);
        }
        assert!(seen_horizontal && seen_vertical);
    }

    #[test]
    fn test_tunnel_runs_backwards() {
        let cells = trace_tunnel(p(5, 4), p(2, 1), CorridorBend::HorizontalFirst);
        assert_eq!(cells.first(), Some(&p(5, 4)));
        assert_eq!(cells.last(), Some(&p(2, 1)));
        assert!(cells.contains(&p(2, 4)));
        for pair in cells.windows(2) {
            assert!(pair[0].manhattan_distance(pair[1]) <= 1);
        }
    }
}
