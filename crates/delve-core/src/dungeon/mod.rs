//! Dungeon generation
//!
//! Contains the working cell grid, space partitioning, room placement,
//! corridor passes, and the exported stage.

mod cell;
mod corridor;
mod generation;
mod grid;
mod partition;
mod room;
mod stage;

pub use cell::{CellFlags, Direction};
pub use corridor::{connect_horizontal, connect_vertical, extrude_corridors, prune_dead_ends};
pub use generation::DungeonGenerator;
pub use grid::Grid;
pub use partition::{mark_reserved_aisles, reserved_rect, split_coordinates};
pub use room::Room;
pub use stage::{Stage, TileFlags};
