//! Space partitioning
//!
//! Splits the grid into partition cells and commits the lines between them
//! as reserved corridor locations. Fully deterministic.

use super::{CellFlags, Grid, Room};
use crate::RESERVED_MARGIN;

/// Split coordinates along one axis
///
/// Interior boundaries sit at multiples of `extent / count`; sentinel
/// boundaries at offset 1 and `extent - 2` bracket the axis. `count` must
/// already be clamped to >= 1.
pub fn split_coordinates(extent: usize, count: usize) -> Vec<usize> {
    let cell_extent = extent / count;
    let mut splits = Vec::with_capacity(count + 1);
    splits.push(1);
    for i in 1..count {
        splits.push(i * cell_extent);
    }
    splits.push(extent - 2);
    splits
}

/// Mark every split line as reserved aisle and every line intersection as a
/// crossing
pub fn mark_reserved_aisles(grid: &mut Grid, splits_x: &[usize], splits_y: &[usize]) {
    for &x in splits_x {
        for y in 0..grid.height() {
            grid.insert(x, y, CellFlags::RESERVED_AISLE);
        }
    }
    for &y in splits_y {
        for x in 0..grid.width() {
            grid.insert(x, y, CellFlags::RESERVED_AISLE);
        }
    }
    for &x in splits_x {
        for &y in splits_y {
            grid.insert(x, y, CellFlags::CROSS);
        }
    }
}

/// Rectangle a room may occupy inside partition cell (col, row)
///
/// The area between adjacent split coordinates, inset by RESERVED_MARGIN on
/// every side. Degenerate parameter combinations can shrink this to nothing;
/// that yields `None`, which the room placer turns into a disabled room.
pub fn reserved_rect(
    splits_x: &[usize],
    splits_y: &[usize],
    col: usize,
    row: usize,
) -> Option<Room> {
    let x0 = splits_x[col] as i64 + RESERVED_MARGIN as i64;
    let x1 = splits_x[col + 1] as i64 - RESERVED_MARGIN as i64;
    let y0 = splits_y[row] as i64 + RESERVED_MARGIN as i64;
    let y1 = splits_y[row + 1] as i64 - RESERVED_MARGIN as i64;

    let width = x1 - x0 + 1;
    let height = y1 - y0 + 1;
    if width <= 0 || height <= 0 {
        return None;
    }
    Some(Room::new(
        x0 as usize,
        y0 as usize,
        width as usize,
        height as usize,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HEIGHT, WIDTH};

    #[test]
    fn test_split_coordinates() {
        assert_eq!(split_coordinates(WIDTH, 3), vec![1, 20, 40, 58]);
        assert_eq!(split_coordinates(WIDTH, 1), vec![1, 58]);
        assert_eq!(split_coordinates(HEIGHT, 2), vec![1, 20, 38]);
    }

    #[test]
    fn test_split_count_matches() {
        for count in 1..10 {
            assert_eq!(split_coordinates(WIDTH, count).len(), count + 1);
        }
    }

    #[test]
    fn test_mark_reserved_aisles() {
        let mut grid = Grid::new();
        let sx = split_coordinates(WIDTH, 2);
        let sy = split_coordinates(HEIGHT, 2);
        mark_reserved_aisles(&mut grid, &sx, &sy);

        // every cell of a vertical line
        for y in 0..HEIGHT {
            assert!(grid.contains(30, y, CellFlags::RESERVED_AISLE));
        }
        // every cell of a horizontal line
        for x in 0..WIDTH {
            assert!(grid.contains(x, 20, CellFlags::RESERVED_AISLE));
        }
        // crossings only at intersections
        assert!(grid.contains(30, 20, CellFlags::CROSS));
        assert!(grid.contains(1, 1, CellFlags::CROSS));
        assert!(grid.contains(58, 38, CellFlags::CROSS));
        assert!(!grid.intersects(30, 19, CellFlags::CROSS));
        assert!(!grid.intersects(29, 20, CellFlags::CROSS));

        // interior stays wall-only
        assert_eq!(grid.flags(10, 10), CellFlags::WALL);
    }

    #[test]
    fn test_reserved_rect() {
        let sx = split_coordinates(WIDTH, 2); // [1, 30, 58]
        let sy = split_coordinates(HEIGHT, 2); // [1, 20, 38]

        let rect = reserved_rect(&sx, &sy, 0, 0).unwrap();
        assert_eq!(rect, Room::new(3, 3, 26, 16));

        let rect = reserved_rect(&sx, &sy, 1, 1).unwrap();
        assert_eq!(rect, Room::new(32, 22, 25, 15));
    }

    #[test]
    fn test_reserved_rect_degenerate() {
        // 30 columns over 60 cells leaves 2-wide cells, inset eats them
        let sx = split_coordinates(WIDTH, 30);
        let sy = split_coordinates(HEIGHT, 1);
        assert!(reserved_rect(&sx, &sy, 3, 0).is_none());
    }
}
