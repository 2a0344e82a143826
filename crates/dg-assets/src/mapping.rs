use serde::{Deserialize, Serialize};
use dg_core::CellType;

/// Defines the visual representation of a cell for different frontends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TileDefinition {
    /// Character used in the terminal map.
    pub tui_char: char,
    /// Color name for the terminal (e.g., "gray", "light_blue").
    pub tui_color: String,
    /// Path to the sprite for a graphical frontend.
    #[serde(default)]
    pub sprite: String,
}

/// Links a cell state to its tile definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetMappingEntry {
    pub cell: CellType,
    pub tile: TileDefinition,
}

/// The root structure for the tile mapping configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AssetMapping {
    pub tiles: Vec<AssetMappingEntry>,
}

impl AssetMapping {
    /// Built-in ASCII tiles: `.` floor, `#` wall.
    pub fn classic() -> Self {
        Self {
            tiles: vec![
                AssetMappingEntry {
                    cell: CellType::Floor,
                    tile: TileDefinition {
                        tui_char: '.',
                        tui_color: "white".to_string(),
                        sprite: "tiles/floor.png".to_string(),
                    },
                },
                AssetMappingEntry {
                    cell: CellType::Wall,
                    tile: TileDefinition {
                        tui_char: '#',
                        tui_color: "gray".to_string(),
                        sprite: "tiles/wall.png".to_string(),
                    },
                },
            ],
        }
    }

    /// Tile for `cell`. When a cell is listed more than once the last entry
    /// wins, so overrides can be appended.
    pub fn tile_for(&self, cell: CellType) -> Option<&TileDefinition> {
        self.tiles
            .iter()
            .rev()
            .find(|entry| entry.cell == cell)
            .map(|entry| &entry.tile)
    }

    /// Append the entries of `overrides`, taking precedence over ours.
    pub fn merge(&mut self, overrides: AssetMapping) {
        self.tiles.extend(overrides.tiles);
    }
}
