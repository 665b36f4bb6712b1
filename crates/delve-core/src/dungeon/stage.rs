//! Exported stage
//!
//! The stage is the only surface downstream systems see: semantic tiles plus
//! the room list. Entity overlays (player, enemies, items) are additive flags
//! owned by those systems, not by generation.

use bitflags::bitflags;
use delve_rng::GameRng;
use serde::{Deserialize, Serialize};

use super::{CellFlags, Grid, Room};
use crate::{HEIGHT, WIDTH};

/// Attempt cap for [`Stage::random_placeable_coord`]
const MAX_PLACEMENT_ATTEMPTS: usize = 400;

bitflags! {
    /// Semantic tile states
    ///
    /// WALL, ROOM and AISLE are mutually exclusive terrain; the rest are
    /// overlays added on top of terrain by downstream systems.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TileFlags: u16 {
        const WALL = 0x0001;
        const ROOM = 0x0002;
        const AISLE = 0x0004;
        const PLAYER = 0x0008;
        const ENEMY = 0x0010;
        const ITEM = 0x0020;
        const TRAP = 0x0040;
        const GOAL = 0x0080;
        const CLEAR = 0x0100;
    }
}

// Manual serde impl for TileFlags
impl Serialize for TileFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TileFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(TileFlags::from_bits_truncate(bits))
    }
}

impl TileFlags {
    /// Display character, overlays first
    pub fn symbol(&self) -> char {
        if self.contains(TileFlags::PLAYER) {
            '@'
        } else if self.contains(TileFlags::ENEMY) {
            'm'
        } else if self.contains(TileFlags::ITEM) {
            '%'
        } else if self.contains(TileFlags::TRAP) {
            '^'
        } else if self.contains(TileFlags::GOAL) {
            '>'
        } else if self.contains(TileFlags::ROOM) {
            '.'
        } else if self.contains(TileFlags::AISLE) {
            '#'
        } else {
            ' '
        }
    }
}

/// Create the default tile array, all wall
fn default_tiles() -> Vec<Vec<TileFlags>> {
    vec![vec![TileFlags::WALL; HEIGHT]; WIDTH]
}

/// A generated dungeon ready for play
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    /// Semantic tiles, indexed `[x][y]`
    #[serde(default = "default_tiles")]
    tiles: Vec<Vec<TileFlags>>,

    /// Enabled rooms, for spawn-point queries
    rooms: Vec<Room>,
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            tiles: default_tiles(),
            rooms: Vec::new(),
        }
    }
}

impl Stage {
    /// Export a generation grid into semantic tiles
    ///
    /// One bulk pass; callers never observe a partially generated grid.
    pub fn from_grid(grid: &Grid, rooms: &[Room]) -> Self {
        let mut tiles = default_tiles();
        for (x, col) in tiles.iter_mut().enumerate() {
            for (y, tile) in col.iter_mut().enumerate() {
                *tile = if grid.intersects(x, y, CellFlags::ROOM) {
                    TileFlags::ROOM
                } else if grid.intersects(x, y, CellFlags::AISLE) {
                    TileFlags::AISLE
                } else {
                    TileFlags::WALL
                };
            }
        }
        Self {
            tiles,
            rooms: rooms.iter().copied().filter(Room::is_enabled).collect(),
        }
    }

    /// Stage width
    pub const fn width(&self) -> usize {
        WIDTH
    }

    /// Stage height
    pub const fn height(&self) -> usize {
        HEIGHT
    }

    /// Tile at a position
    pub fn tile_state(&self, x: usize, y: usize) -> TileFlags {
        self.tiles[x][y]
    }

    /// Replace a tile outright
    pub fn set_tile(&mut self, x: usize, y: usize, flags: TileFlags) {
        self.tiles[x][y] = flags;
    }

    /// Add flags to a tile
    pub fn add_tile(&mut self, x: usize, y: usize, flags: TileFlags) {
        self.tiles[x][y].insert(flags);
    }

    /// Clear flags from a tile
    pub fn remove_tile(&mut self, x: usize, y: usize, flags: TileFlags) {
        self.tiles[x][y].remove(flags);
    }

    /// Number of enabled rooms
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// The enabled rooms
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Random unoccupied floor coordinate
    ///
    /// Rejection-samples a random room, then a random interior cell, until
    /// the cell is bare floor (exactly ROOM or AISLE, no occupant overlay).
    /// `None` when no rooms exist or sampling is exhausted; a skip outcome,
    /// not an error.
    pub fn random_placeable_coord(&self, rng: &mut GameRng) -> Option<(usize, usize)> {
        if self.rooms.is_empty() {
            return None;
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let room = self.rooms[rng.rn2(self.rooms.len() as u32) as usize];
            let (x, y) = room.random_point(rng);
            let tile = self.tiles[x][y];
            if tile == TileFlags::ROOM || tile == TileFlags::AISLE {
                return Some((x, y));
            }
        }
        None
    }

    /// Positions of all tiles carrying at least one flag in `flags`
    pub fn find_all(&self, flags: TileFlags) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        for x in 0..WIDTH {
            for y in 0..HEIGHT {
                if self.tiles[x][y].intersects(flags) {
                    found.push((x, y));
                }
            }
        }
        found
    }

    /// Render the stage, one row per line
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((WIDTH + 1) * HEIGHT);
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                out.push(self.tiles[x][y].symbol());
            }
            out.push('\n');
        }
        out
    }
}
