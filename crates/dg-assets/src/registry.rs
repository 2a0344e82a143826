use std::path::Path;

use dg_core::CellType;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::mapping::{AssetMapping, TileDefinition};

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Tile mapping not found for cell: {0}")]
    NotFound(CellType),
}

/// A registry that maps cell states to their tiles.
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    mapping: AssetMapping,
}

impl AssetRegistry {
    /// Create a new registry from an existing mapping.
    pub fn new(mapping: AssetMapping) -> Self {
        Self { mapping }
    }

    /// Registry with the built-in ASCII tiles.
    pub fn classic() -> Self {
        Self::new(AssetMapping::classic())
    }

    /// Load the registry from a JSON file and validate coverage.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        let mapping: AssetMapping = serde_json::from_str(&content)?;
        let registry = Self::new(mapping);
        registry.validate_coverage()?;
        Ok(registry)
    }

    /// Validate that every drawable cell state has a tile.
    pub fn validate_coverage(&self) -> Result<(), RegistryError> {
        match self.missing().first() {
            Some(&cell) => Err(RegistryError::NotFound(cell)),
            None => Ok(()),
        }
    }

    /// Drawable cell states with no tile.
    pub fn missing(&self) -> Vec<CellType> {
        CellType::iter()
            .filter(|cell| cell.is_drawable() && self.mapping.tile_for(*cell).is_none())
            .collect()
    }

    /// Find the tile for a cell state.
    pub fn get(&self, cell: CellType) -> Result<&TileDefinition, RegistryError> {
        self.mapping
            .tile_for(cell)
            .ok_or(RegistryError::NotFound(cell))
    }

    pub fn mapping(&self) -> &AssetMapping {
        &self.mapping
    }

    /// Helper to convert a color string to a ratatui color.
    pub fn parse_color(color_name: &str) -> Option<ratatui::style::Color> {
        use ratatui::style::Color;
        match color_name.to_lowercase().as_str() {
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "magenta" => Some(Color::Magenta),
            "cyan" => Some(Color::Cyan),
            "gray" | "grey" => Some(Color::Gray),
            "darkgray" | "dark_gray" => Some(Color::DarkGray),
            "lightred" | "light_red" => Some(Color::LightRed),
            "lightgreen" | "light_green" => Some(Color::LightGreen),
            "lightyellow" | "light_yellow" => Some(Color::LightYellow),
            "lightblue" | "light_blue" => Some(Color::LightBlue),
            "lightmagenta" | "light_magenta" => Some(Color::LightMagenta),
            "lightcyan" | "light_cyan" => Some(Color::LightCyan),
            "white" => Some(Color::White),
            hex if hex.starts_with('#') && hex.len() == 7 => {
                let rgb = u32::from_str_radix(&hex[1..], 16).ok()?;
                Some(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
            }
            _ => {
                log::debug!("unknown tile color {:?}", color_name);
                None
            }
        }
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::classic()
    }
}
