//! delve-core: space-partitioning dungeon generation
//!
//! This crate contains the full generation pipeline with no I/O dependencies:
//! grid partitioning, room placement, corridor extrusion and connection,
//! dead-end pruning, and export to a [`dungeon::Stage`]. Rendering, input
//! handling, combat, and entity spawning consume the exported stage and live
//! elsewhere.
//!
//! Generation is deterministic for a given seed: every randomized pass takes
//! an explicit `&mut GameRng`.

pub mod dungeon;

mod consts;

pub use consts::*;
pub use delve_rng::GameRng;
