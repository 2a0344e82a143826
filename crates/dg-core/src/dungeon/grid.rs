//! Grid store
//!
//! A fixed-size 2D array of [`CellType`] stored row-major. `y = 0` is the
//! bottom row. Coordinates are signed so that callers can ask about cells
//! outside the map; such reads return `None` and such writes are dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::CellType;

/// Fixed-size cell grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellType>,
}

impl Grid {
    /// Allocate an all-empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellType::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if (x, y) lies inside the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    /// Cell at (x, y), or `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<CellType> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set the cell at (x, y). Returns false (and changes nothing) if out of
    /// bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: CellType) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Check whether (x, y) is in bounds and holds `cell`
    pub fn is(&self, x: i32, y: i32, cell: CellType) -> bool {
        self.get(x, y) == Some(cell)
    }

    /// In-bounds 4-connected neighbours of (x, y): north, south, east, west
    pub fn neighbors4(&self, x: i32, y: i32) -> impl Iterator<Item = CellType> + '_ {
        [(0, 1), (0, -1), (1, 0), (-1, 0)]
            .into_iter()
            .filter_map(move |(dx, dy)| self.get(x + dx, y + dy))
    }

    /// All cells with their coordinates, bottom row first
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, CellType)> + '_ {
        self.cells.iter().enumerate().map(|(i, &cell)| {
            ((i % self.width) as i32, (i / self.width) as i32, cell)
        })
    }

    /// Rows from the highest `y` down to `y = 0`, the order a screen draws them
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[CellType]> + '_ {
        self.cells.chunks(self.width.max(1)).rev()
    }

    /// Number of cells in the given state
    pub fn count(&self, cell: CellType) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_top_down() {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
