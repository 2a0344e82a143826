//! Corridor carving
//!
//! Joins each room to the next one in acceptance order with an L-shaped
//! tunnel between their centers. The bend direction is chosen by a fresh coin
//! flip for every pair. Tunnels never overwrite walls and silently skip any
//! cell outside the grid.

use crate::rng::GameRng;

use super::{CellType, Grid, Room};

/// Carve one L-shaped corridor between each consecutive pair of rooms
pub fn carve_corridors(grid: &mut Grid, rooms: &[Room], rng: &mut GameRng) {
    for pair in rooms.windows(2) {
        let (prev_x, prev_y) = pair[0].center();
        let (cur_x, cur_y) = pair[1].center();

        if rng.coin_flip() {
            // Horizontal first, then vertical
            carve_horizontal(grid, prev_x, cur_x, prev_y);
            carve_vertical(grid, prev_y, cur_y, cur_x);
        } else {
            // Vertical first, then horizontal
            carve_vertical(grid, prev_y, cur_y, prev_x);
            carve_horizontal(grid, prev_x, cur_x, cur_y);
        }
    }

    log::debug!("carved {} corridors", rooms.len().saturating_sub(1));
}

/// Carve floor along row `y` from `x1` to `x2` inclusive, in either order
pub fn carve_horizontal(grid: &mut Grid, x1: i32, x2: i32, y: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        carve_cell(grid, x, y);
    }
}

/// Carve floor along column `x` from `y1` to `y2` inclusive, in either order
pub fn carve_vertical(grid: &mut Grid, y1: i32, y2: i32, x: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        carve_cell(grid, x, y);
    }
}

fn carve_cell(grid: &mut Grid, x: i32, y: i32) {
    if grid.get(x, y).is_some_and(|c| c.is_carvable()) {
        grid.set(x, y, CellType::Floor);
    }
}
