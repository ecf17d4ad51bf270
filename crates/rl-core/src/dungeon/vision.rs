//! Field of view
//!
//! Raycasting over Bresenham sight lines within a circular radius, against
//! the grid's transparency. Sight is checked in both directions along the
//! line, which makes visibility symmetric: if A sees B then B sees A.
//! An opaque cell is itself visible but blocks everything strictly behind
//! it along the line.

use super::GameMap;
use super::corridor::bresenham_line;

/// Recompute the field of view from a viewpoint.
///
/// Fully replaces the `visible` mask, then folds it into `explored`
/// (`explored |= visible`). The viewpoint cell is always visible.
pub fn update_visibility(map: &mut GameMap, origin: (i32, i32), radius: i32) {
    for column in &mut map.visible {
        for cell in column {
            *cell = false;
        }
    }

    let (ox, oy) = origin;
    for dx in -radius..=radius {
        for dy in -radius..=radius {
            // Circular field: skip corners of the bounding square.
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let (tx, ty) = (ox + dx, oy + dy);
            if map.in_bounds(tx, ty) && in_sight(map, origin, (tx, ty)) {
                map.visible[tx as usize][ty as usize] = true;
            }
        }
    }

    for x in 0..map.width as usize {
        for y in 0..map.height as usize {
            if map.visible[x][y] {
                map.explored[x][y] = true;
            }
        }
    }
}

/// Check line of sight between two cells, in either direction.
///
/// The directional walk alone is not exactly symmetric (the Bresenham
/// line from B to A can visit different cells); accepting either
/// direction restores symmetry.
pub fn in_sight(map: &GameMap, a: (i32, i32), b: (i32, i32)) -> bool {
    line_of_sight(map, a, b) || line_of_sight(map, b, a)
}

/// Walk the sight line from `from` to `to`.
///
/// Opaque cells along the way end the walk; the blocking cell itself is
/// still considered seen when it is the target.
fn line_of_sight(map: &GameMap, from: (i32, i32), to: (i32, i32)) -> bool {
    for (x, y) in bresenham_line(from, to) {
        if (x, y) == from {
            continue;
        }
        if !map.in_bounds(x, y) {
            return false;
        }
        if !map.is_transparent(x, y) {
            return (x, y) == to;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tile;

    /// A map whose cells in the given rectangle are open floor
    fn open_map(width: i32, height: i32) -> GameMap {
        let mut map = GameMap::new(width, height);
        for x in 0..width {
            for y in 0..height {
                map.set_tile(x, y, tile::FLOOR);
            }
        }
        map
    }

    #[test]
    fn test_initial_state() {
        let map = GameMap::new(20, 20);
        assert!(!map.is_visible(10, 10));
        assert!(!map.is_explored(10, 10));
    }

    #[test]
    fn test_update_marks_nearby_cells() {
        let mut map = open_map(20, 20);
        update_visibility(&mut map, (10, 10), 5);

        assert!(map.is_visible(10, 10));
        assert!(map.is_explored(10, 10));
        assert!(map.is_visible(11, 10));
        assert!(map.is_visible(10, 11));

        // Outside the radius.
        assert!(!map.is_visible(0, 0));
        assert!(!map.is_explored(0, 0));
    }

    #[test]
    fn test_radius_is_circular() {
        let mut map = open_map(20, 20);
        update_visibility(&mut map, (10, 10), 4);
        assert!(map.is_visible(14, 10));
        // (14, 14) is distance sqrt(32) > 4 away.
        assert!(!map.is_visible(14, 14));
    }

    #[test]
    fn test_explored_grows_monotonically() {
        let mut map = open_map(30, 20);

        update_visibility(&mut map, (5, 10), 5);
        assert!(map.is_explored(5, 10));
        assert!(map.is_visible(7, 10));

        update_visibility(&mut map, (20, 10), 5);

        // Old cells stay explored but drop out of view.
        assert!(map.is_explored(5, 10));
        assert!(!map.is_visible(5, 10));
        assert!(map.is_visible(20, 10));
        assert!(map.is_explored(20, 10));
    }

    #[test]
    fn test_wall_blocks_sight_but_is_visible() {
        let mut map = open_map(20, 20);
        map.set_tile(10, 10, tile::WALL);

        update_visibility(&mut map, (8, 10), 6);

        assert!(map.is_visible(9, 10));
        // The wall itself is seen.
        assert!(map.is_visible(10, 10));
        // The cell strictly behind it is not.
        assert!(!map.is_visible(11, 10));
    }

    #[test]
    fn test_sight_is_symmetric() {
        let mut map = open_map(30, 30);
        // Scatter some walls.
        for &(x, y) in &[(10, 10), (11, 10), (12, 14), (15, 9), (9, 15), (13, 13)] {
            map.set_tile(x, y, tile::WALL);
        }

        let cells: Vec<(i32, i32)> = (5..20).flat_map(|x| (5..20).map(move |y| (x, y))).collect();
        for &a in &cells {
            for &b in &cells {
                assert_eq!(
                    in_sight(&map, a, b),
                    in_sight(&map, b, a),
                    "sight between {:?} and {:?} is not symmetric",
                    a,
                    b
                );
            }
        }
    }
}
