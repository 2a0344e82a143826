//! dg-assets: Tile asset mapping for dungeon presenters.
//!
//! Maps each drawable [`dg_core::CellType`] to how a frontend should show it.

pub mod mapping;
pub mod registry;

pub use mapping::*;
pub use registry::*;
