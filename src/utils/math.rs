//! # Grid Mathematics
//!
//! Integer line rasterization on the tile grid.

use crate::Position;

/// Returns every cell on the Bresenham line from `start` to `end`.
///
/// The line is 8-connected and includes both endpoints, so it always has
/// `start.chebyshev_distance(end) + 1` cells.
///
/// # Examples
///
/// ```
/// use delver::{bresenham_line, Position};
///
/// let line = bresenham_line(Position::new(0, 0), Position::new(3, 1));
/// assert_eq!(line.first(), Some(&Position::new(0, 0)));
/// assert_eq!(line.last(), Some(&Position::new(3, 1)));
/// assert_eq!(line.len(), 4);
/// ```
pub fn bresenham_line(start: Position, end: Position) -> Vec<Position> {
    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();
    let sx = if start.x < end.x { 1 } else { -1 };
    let sy = if start.y < end.y { 1 } else { -1 };

    let mut points = Vec::with_capacity(dx.max(dy) as usize + 1);
    let mut x = start.x;
    let mut y = start.y;
    let mut err = dx - dy;

    loop {
        points.push(Position::new(x, y));

        if x == end.x && y == end.y {
            break;
        }

        let e2 = 2 * err;

        if e2 > -dy {
            err -= dy;
            x += sx;
        }

        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}
