//! Working cell flags for the generation grid

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

bitflags! {
    /// Flags carried by one grid cell during generation
    ///
    /// Intermediate passes combine flags freely (a confluence cell is
    /// `AISLE | RESERVED_AISLE | CONFLUENCE`); after export exactly one of
    /// WALL, ROOM, AISLE dominates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u8 {
        /// Solid rock, the reset state
        const WALL = 0x01;
        /// Interior of an enabled room
        const ROOM = 0x02;
        /// Dug corridor
        const AISLE = 0x04;
        /// Cell on a reserved corridor line
        const RESERVED_AISLE = 0x08;
        /// Intersection of a vertical and a horizontal reserved line
        const CROSS = 0x10;
        /// Point where a room corridor met a reserved line
        const CONFLUENCE = 0x20;
    }
}

// Manual serde impl for CellFlags
impl Serialize for CellFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CellFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(CellFlags::from_bits_truncate(bits))
    }
}

impl CellFlags {
    /// Debug display character for this cell
    pub fn symbol(&self) -> char {
        if self.contains(CellFlags::ROOM) {
            '.'
        } else if self.contains(CellFlags::CONFLUENCE) {
            '+'
        } else if self.contains(CellFlags::AISLE) {
            '#'
        } else if self.contains(CellFlags::CROSS) {
            'x'
        } else if self.contains(CellFlags::RESERVED_AISLE) {
            ','
        } else {
            ' '
        }
    }
}

/// Corridor growth direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit step for this direction, x right, y down
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Whether this direction runs along the x axis
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}
