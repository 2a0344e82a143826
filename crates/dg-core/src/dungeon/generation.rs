//! Layout generation pipeline
//!
//! Placement, then corridors, then walls, always on a freshly allocated grid.

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::rng::GameRng;

use super::corridor::carve_corridors;
use super::placement::place_rooms;
use super::walls::synthesize_walls;
use super::{CellType, Grid, Room};

/// The result of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    /// Finished cell grid
    pub grid: Grid,
    /// Accepted rooms, in acceptance order
    pub rooms: Vec<Room>,
    /// Seed of the stream that produced this layout
    pub seed: u64,
}

impl Dungeon {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Cell at (x, y), or `None` outside the grid
    pub fn cell(&self, x: i32, y: i32) -> Option<CellType> {
        self.grid.get(x, y)
    }

    /// Number of cells in the given state
    pub fn count(&self, cell: CellType) -> usize {
        self.grid.count(cell)
    }

    /// A floor cell suitable for placing a player: the first room's center
    pub fn spawn_point(&self) -> Option<(i32, i32)> {
        self.rooms.first().map(Room::center)
    }
}

/// Generate a complete layout for `config` from `rng`.
///
/// Does not fail: configurations that leave no room for rooms simply produce
/// an empty grid.
pub fn generate_dungeon(config: &GeneratorConfig, rng: &mut GameRng) -> Dungeon {
    let mut grid = Grid::new(config.width, config.height);

    let rooms = place_rooms(&mut grid, config, rng);
    carve_corridors(&mut grid, &rooms, rng);
    synthesize_walls(&mut grid);

    log::debug!(
        "generated {}x{} dungeon with {} rooms (seed {})",
        config.width,
        config.height,
        rooms.len(),
        rng.seed()
    );

    Dungeon {
        grid,
        rooms,
        seed: rng.seed(),
    }
}
