//! Room rectangles

use delve_rng::GameRng;
use serde::{Deserialize, Serialize};

/// An axis-aligned room rectangle
///
/// A rectangle with any field equal to zero is the disabled sentinel: the
/// partition cell holds no room. This is a normal state, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Room {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Room {
    /// The disabled sentinel
    pub const DISABLED: Room = Room {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Create a new room
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether this slot holds a real room
    pub const fn is_enabled(&self) -> bool {
        self.x != 0 && self.y != 0 && self.width != 0 && self.height != 0
    }

    /// First column right of the room
    pub const fn right(&self) -> usize {
        self.x + self.width
    }

    /// First row below the room
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Interior area in cells
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether a coordinate lies inside the room interior
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Random interior coordinate
    pub fn random_point(&self, rng: &mut GameRng) -> (usize, usize) {
        (
            self.x + rng.rn2(self.width as u32) as usize,
            self.y + rng.rn2(self.height as u32) as usize,
        )
    }
}
