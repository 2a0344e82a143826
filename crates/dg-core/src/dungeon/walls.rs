//! Wall synthesis

use super::{CellType, Grid};

/// Turn every empty cell that has a floor cell directly north, south, east or
/// west of it into a wall.
///
/// Single pass. New walls are never floor, so the order cells are visited in
/// does not change the result.
pub fn synthesize_walls(grid: &mut Grid) {
    let mut walls = Vec::new();
    for (x, y, cell) in grid.iter() {
        if cell == CellType::Empty && grid.neighbors4(x, y).any(|n| n.is_floor()) {
            walls.push((x, y));
        }
    }

    log::debug!("synthesized {} wall cells", walls.len());

    for (x, y) in walls {
        grid.set(x, y, CellType::Wall);
    }
}
