//! Dense generation grid

use serde::{Deserialize, Serialize};

use super::CellFlags;
use crate::{HEIGHT, WIDTH};

/// Create the reset cell array, all wall
fn default_cells() -> Vec<Vec<CellFlags>> {
    vec![vec![CellFlags::WALL; HEIGHT]; WIDTH]
}

/// The working tile grid, always exactly WIDTH x HEIGHT
///
/// Owned exclusively by one generator instance; reset in place between
/// generations rather than reallocated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    #[serde(default = "default_cells")]
    cells: Vec<Vec<CellFlags>>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create a new all-wall grid
    pub fn new() -> Self {
        Self {
            cells: default_cells(),
        }
    }

    /// Reset every cell back to wall, keeping the allocation
    pub fn reset(&mut self) {
        for col in &mut self.cells {
            col.fill(CellFlags::WALL);
        }
    }

    /// Grid width
    pub const fn width(&self) -> usize {
        WIDTH
    }

    /// Grid height
    pub const fn height(&self) -> usize {
        HEIGHT
    }

    /// Check whether a signed coordinate lies on the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < WIDTH && (y as usize) < HEIGHT
    }

    /// Flags at a position
    pub fn flags(&self, x: usize, y: usize) -> CellFlags {
        self.cells[x][y]
    }

    /// Check that a cell carries every flag in `flags`
    pub fn contains(&self, x: usize, y: usize, flags: CellFlags) -> bool {
        self.cells[x][y].contains(flags)
    }

    /// Check that a cell carries at least one flag in `flags`
    pub fn intersects(&self, x: usize, y: usize, flags: CellFlags) -> bool {
        self.cells[x][y].intersects(flags)
    }

    /// Add flags to a cell
    pub fn insert(&mut self, x: usize, y: usize, flags: CellFlags) {
        self.cells[x][y].insert(flags);
    }

    /// Clear flags from a cell
    pub fn remove(&mut self, x: usize, y: usize, flags: CellFlags) {
        self.cells[x][y].remove(flags);
    }

    /// Replace a cell's flags outright
    pub fn set(&mut self, x: usize, y: usize, flags: CellFlags) {
        self.cells[x][y] = flags;
    }

    /// Count orthogonal neighbors carrying every flag in `flags`
    pub fn neighbors_with(&self, x: usize, y: usize, flags: CellFlags) -> usize {
        let mut count = 0;
        for (dx, dy) in [(-1i32, 0i32), (1, 0), (0, -1), (0, 1)] {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if self.in_bounds(nx, ny) && self.contains(nx as usize, ny as usize, flags) {
                count += 1;
            }
        }
        count
    }

    /// Positions of all cells carrying at least one flag in `flags`
    pub fn find_any(&self, flags: CellFlags) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        for x in 0..WIDTH {
            for y in 0..HEIGHT {
                if self.cells[x][y].intersects(flags) {
                    found.push((x, y));
                }
            }
        }
        found
    }

    /// Debug render, one row per line
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((WIDTH + 1) * HEIGHT);
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                out.push(self.cells[x][y].symbol());
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let grid = Grid::new();
        assert_eq!(grid.width(), WIDTH);
        assert_eq!(grid.height(), HEIGHT);
        assert!(grid.contains(0, 0, CellFlags::WALL));
        assert!(grid.contains(WIDTH - 1, HEIGHT - 1, CellFlags::WALL));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut grid = Grid::new();
        grid.insert(5, 5, CellFlags::ROOM);
        grid.set(6, 5, CellFlags::AISLE | CellFlags::CONFLUENCE);

        grid.reset();

        assert_eq!(grid.flags(5, 5), CellFlags::WALL);
        assert_eq!(grid.flags(6, 5), CellFlags::WALL);
    }

    #[test]
    fn test_neighbors_with() {
        let mut grid = Grid::new();
        grid.insert(10, 10, CellFlags::AISLE);
        grid.insert(9, 10, CellFlags::AISLE);
        grid.insert(10, 11, CellFlags::AISLE);

        assert_eq!(grid.neighbors_with(10, 10, CellFlags::AISLE), 2);
        assert_eq!(grid.neighbors_with(9, 10, CellFlags::AISLE), 1);

        // corner cell, out-of-bounds neighbors skipped
        assert_eq!(grid.neighbors_with(0, 0, CellFlags::AISLE), 0);
    }

    #[test]
    fn test_find_any() {
        let mut grid = Grid::new();
        grid.insert(3, 4, CellFlags::CONFLUENCE);
        grid.insert(7, 8, CellFlags::CROSS);

        let hits = grid.find_any(CellFlags::CONFLUENCE | CellFlags::CROSS);
        assert_eq!(hits, vec![(3, 4), (7, 8)]);
    }

    #[test]
    fn test_in_bounds() {
        let grid = Grid::new();
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(WIDTH as i32 - 1, HEIGHT as i32 - 1));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, HEIGHT as i32));
        assert!(!grid.in_bounds(WIDTH as i32, 0));
    }
}
