//! Dungeon generation pipeline
//!
//! Owns the working buffers and runs the passes in order: partition, room
//! placement, corridor extrusion, vertical then horizontal connection,
//! dead-end pruning, stage export.

use delve_rng::GameRng;

use super::corridor::{connect_horizontal, connect_vertical, extrude_corridors, prune_dead_ends};
use super::partition::{mark_reserved_aisles, reserved_rect, split_coordinates};
use super::{CellFlags, Grid, Room, Stage};
use crate::{HEIGHT, MIN_ROOM_SIZE, WIDTH};

/// The generation algorithm
///
/// One instance exclusively owns its grid, room list and split coordinates;
/// [`DungeonGenerator::make`] bulk-resets them in place, so the same instance
/// is reusable across repeated generations.
#[derive(Debug, Clone, Default)]
pub struct DungeonGenerator {
    grid: Grid,
    /// Column-major room slots, one per partition cell: `col * size_y + row`
    rooms: Vec<Room>,
    splits_x: Vec<usize>,
    splits_y: Vec<usize>,
}

impl DungeonGenerator {
    /// Create a generator with freshly allocated buffers
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            rooms: Vec::new(),
            splits_x: Vec::new(),
            splits_y: Vec::new(),
        }
    }

    /// Generate a dungeon and export it as a stage
    ///
    /// `size_x`/`size_y` are clamped to >= 1 and `room_rate` to [0,1];
    /// out-of-range input degrades, it is never rejected. Randomness comes
    /// entirely from `rng`, so a re-seeded generator reproduces its output.
    pub fn make(
        &mut self,
        size_x: usize,
        size_y: usize,
        room_rate: f64,
        rng: &mut GameRng,
    ) -> Stage {
        let size_x = size_x.max(1);
        let size_y = size_y.max(1);
        let room_rate = room_rate.clamp(0.0, 1.0);

        self.reset(size_x, size_y);
        mark_reserved_aisles(&mut self.grid, &self.splits_x, &self.splits_y);
        self.place_rooms(size_x, size_y, room_rate, rng);
        extrude_corridors(&mut self.grid, &self.rooms, size_x, size_y, rng);
        connect_vertical(&mut self.grid, &self.splits_x);
        connect_horizontal(&mut self.grid, &self.splits_y, rng);
        prune_dead_ends(&mut self.grid, &self.splits_y);

        Stage::from_grid(&self.grid, &self.rooms)
    }

    /// Clear the grid and re-populate every room slot with the disabled
    /// sentinel
    fn reset(&mut self, size_x: usize, size_y: usize) {
        self.grid.reset();
        self.rooms.clear();
        self.rooms.resize(size_x * size_y, Room::DISABLED);
        self.splits_x = split_coordinates(WIDTH, size_x);
        self.splits_y = split_coordinates(HEIGHT, size_y);
    }

    /// Decide which partition cells hold rooms and carve them
    ///
    /// One room per column is forced at a random row; the vertical connector
    /// relies on no column being room-less. Every other cell rooms with
    /// probability `room_rate`.
    fn place_rooms(&mut self, size_x: usize, size_y: usize, room_rate: f64, rng: &mut GameRng) {
        for col in 0..size_x {
            let row = rng.rn2(size_y as u32) as usize;
            self.rooms[col * size_y + row] = self.carve_room(col, row, rng);
        }

        for col in 0..size_x {
            for row in 0..size_y {
                let idx = col * size_y + row;
                if self.rooms[idx].is_enabled() {
                    continue;
                }
                if rng.chance(room_rate) {
                    self.rooms[idx] = self.carve_room(col, row, rng);
                }
            }
        }
    }

    /// Randomize and carve one room inside its reserved rectangle
    ///
    /// A reserved rectangle too small to randomize a [MIN_ROOM_SIZE, extent)
    /// dimension yields the disabled sentinel without drawing.
    fn carve_room(&mut self, col: usize, row: usize, rng: &mut GameRng) -> Room {
        let Some(reserved) = reserved_rect(&self.splits_x, &self.splits_y, col, row) else {
            return Room::DISABLED;
        };
        if reserved.width <= MIN_ROOM_SIZE || reserved.height <= MIN_ROOM_SIZE {
            return Room::DISABLED;
        }

        let width = MIN_ROOM_SIZE + rng.rn2((reserved.width - MIN_ROOM_SIZE) as u32) as usize;
        let height = MIN_ROOM_SIZE + rng.rn2((reserved.height - MIN_ROOM_SIZE) as u32) as usize;
        let x = reserved.x + rng.rn2((reserved.width - width + 1) as u32) as usize;
        let y = reserved.y + rng.rn2((reserved.height - height + 1) as u32) as usize;

        let room = Room::new(x, y, width, height);
        for cx in room.x..room.right() {
            for cy in room.y..room.bottom() {
                self.grid.set(cx, cy, CellFlags::ROOM);
            }
        }
        room
    }
}
