//! Map cell states

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// State of one grid cell
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum CellType {
    #[default]
    Empty = 0,
    Floor = 1,
    Wall = 2,
}

impl CellType {
    /// Check if this cell can be walked on
    pub const fn is_floor(&self) -> bool {
        matches!(self, CellType::Floor)
    }

    /// Check if this is a wall
    pub const fn is_wall(&self) -> bool {
        matches!(self, CellType::Wall)
    }

    /// Check if a corridor may be dug through this cell
    pub const fn is_carvable(&self) -> bool {
        matches!(self, CellType::Empty | CellType::Floor)
    }

    /// Whether a presenter draws anything for this cell
    pub const fn is_drawable(&self) -> bool {
        !matches!(self, CellType::Empty)
    }

    /// Get the plain ASCII character for this cell type
    pub const fn symbol(&self) -> char {
        match self {
            CellType::Empty => ' ',
            CellType::Floor => '.',
            CellType::Wall => '#',
        }
    }
}
