//! Room placement
//!
//! Fixed-attempt rejection sampling. Each attempt draws a size and a position,
//! and the candidate is kept only if it stays clear of every room accepted so
//! far, padding included. Rejected candidates are not retried, so dense
//! configurations end up with fewer than `max_rooms` rooms.

use crate::config::GeneratorConfig;
use crate::consts::{BORDER, ROOM_PADDING};
use crate::rng::GameRng;

use super::{CellType, Grid, Room};

/// Place up to `config.max_rooms` rooms, carving each accepted one into
/// `grid` as floor. Returns the rooms in acceptance order.
pub fn place_rooms(grid: &mut Grid, config: &GeneratorConfig, rng: &mut GameRng) -> Vec<Room> {
    let (min_size, max_size) = config.room_size_bounds();
    let width = saturating_i32(grid.width());
    let height = saturating_i32(grid.height());

    let mut rooms: Vec<Room> = Vec::new();
    let mut skipped = 0u32;
    let mut rejected = 0u32;

    for _ in 0..config.max_rooms {
        let w = rng.range_inclusive(min_size, max_size);
        let h = rng.range_inclusive(min_size, max_size);

        // Origin in [BORDER, dim - size - BORDER); empty when the room cannot fit
        let Some(x) = rng.range(BORDER, width - w - BORDER) else {
            skipped += 1;
            continue;
        };
        let Some(y) = rng.range(BORDER, height - h - BORDER) else {
            skipped += 1;
            continue;
        };

        let candidate = Room::new(x, y, w, h);
        if rooms
            .iter()
            .any(|r| r.padded(ROOM_PADDING).overlaps(&candidate))
        {
            rejected += 1;
            continue;
        }

        for (cx, cy) in candidate.cells() {
            grid.set(cx, cy, CellType::Floor);
        }
        rooms.push(candidate);
    }

    log::debug!(
        "placed {} rooms in {} attempts ({} overlapping, {} too large)",
        rooms.len(),
        config.max_rooms,
        rejected,
        skipped
    );

    rooms
}

/// Grid dimension as a coordinate bound. Larger grids are sampled as if
/// they ended at `i32::MAX`.
fn saturating_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
