//! Dungeon layout
//!
//! Contains the grid store, rooms, and the three generation phases.

mod cell;
mod corridor;
mod generation;
mod grid;
mod placement;
mod room;
mod walls;

pub use cell::CellType;
pub use corridor::{carve_corridors, carve_horizontal, carve_vertical};
pub use generation::{Dungeon, generate_dungeon};
pub use grid::Grid;
pub use placement::place_rooms;
pub use room::Room;
pub use walls::synthesize_walls;
