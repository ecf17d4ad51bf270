//! Corridor carving
//!
//! Rooms are connected by L-shaped corridors: a fair coin picks the bend
//! corner, then two Bresenham segments cover the path. The corner cell is
//! produced by both segments; callers write the same floor tile for every
//! cell, so the duplicate is harmless.

use crate::rng::GameRng;

/// All cells on the Bresenham line from `from` to `to`, inclusive
pub fn bresenham_line(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    let (mut x, mut y) = from;
    let (x1, y1) = to;

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut cells = Vec::with_capacity((dx - dy) as usize + 1);
    loop {
        cells.push((x, y));
        if x == x1 && y == y1 {
            return cells;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Cells of an L-shaped corridor between two points
///
/// The bend corner is either `(end.x, start.y)` or `(start.x, end.y)`,
/// chosen by coin toss.
pub fn tunnel_between(rng: &mut GameRng, start: (i32, i32), end: (i32, i32)) -> Vec<(i32, i32)> {
    let corner = if rng.coin_flip() {
        // Move horizontally, then vertically.
        (end.0, start.1)
    } else {
        // Move vertically, then horizontally.
        (start.0, end.1)
    };

    let mut cells = bresenham_line(start, corner);
    cells.extend(bresenham_line(corner, end));
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_endpoints() {
        let line = bresenham_line((2, 3), (8, 3));
        assert_eq!(line.first(), Some(&(2, 3)));
        assert_eq!(line.last(), Some(&(8, 3)));
        assert_eq!(line.len(), 7);
    }

    #[test]
    fn test_line_single_cell() {
        assert_eq!(bresenham_line((5, 5), (5, 5)), vec![(5, 5)]);
    }

    #[test]
    fn test_line_steps_are_adjacent() {
        let line = bresenham_line((0, 0), (7, 4));
        for pair in line.windows(2) {
            let (ax, ay) = pair[0];
            let (bx, by) = pair[1];
            assert!((ax - bx).abs() <= 1 && (ay - by).abs() <= 1);
        }
    }

    #[test]
    fn test_tunnel_covers_both_endpoints() {
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let cells = tunnel_between(&mut rng, (1, 1), (10, 8));
            assert!(cells.contains(&(1, 1)));
            assert!(cells.contains(&(10, 8)));
        }
    }

    #[test]
    fn test_tunnel_bend_is_axis_aligned() {
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let cells = tunnel_between(&mut rng, (2, 2), (9, 7));
            // An L-corridor between these points passes through exactly one
            // of the two candidate corners.
            let horizontal_first = cells.contains(&(9, 2));
            let vertical_first = cells.contains(&(2, 7));
            assert!(horizontal_first || vertical_first);
        }
    }
}
