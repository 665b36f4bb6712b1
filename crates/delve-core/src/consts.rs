//! Core generation constants

/// Map dimensions
pub const WIDTH: usize = 60;
pub const HEIGHT: usize = 40;

/// Smallest room edge a partition cell may receive
pub const MIN_ROOM_SIZE: usize = 3;

/// Inset between a reserved corridor line and the area rooms may occupy
pub const RESERVED_MARGIN: usize = 2;

/// Probability that a corridor branch is adopted through a crossing
pub const CROSS_CONNECT_CHANCE: u32 = 20;
