//! dg-core: Core dungeon layout generation
//!
//! Fills a fixed-size grid with rectangular rooms, joins them with L-shaped
//! corridors and surrounds the result with one-cell-thick walls.
//!
//! This crate performs no rendering. A [`Presenter`] implementation supplied by
//! the caller receives each finished [`Dungeon`].

pub mod config;
pub mod dungeon;
pub mod generator;
pub mod present;

mod consts;
mod rng;

pub use config::{ConfigError, GeneratorConfig};
pub use consts::*;
pub use dungeon::{CellType, Dungeon, Grid, Room, generate_dungeon};
pub use generator::{GenerateReport, Generator};
pub use present::{NullPresenter, Presenter, RenderError};
pub use rng::GameRng;
