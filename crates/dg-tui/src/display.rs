//! Glyph system for TUI rendering
//!
//! Provides support for both classic ASCII and fancy Unicode block characters.

use dg_assets::TileDefinition;
use dg_core::CellType;
use strum::{Display, EnumString, VariantNames};

/// Available graphics modes for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantNames, Default)]
#[strum(serialize_all = "lowercase")]
pub enum GraphicsMode {
    /// Classic ASCII characters.
    Classic,
    /// Fancy Unicode block characters.
    Fancy,
    /// Automatically detect support.
    #[default]
    Auto,
}

/// Set of glyphs used for rendering map cells.
pub trait GlyphSet: Send + Sync {
    /// Get the character for a cell drawn with `tile`.
    fn cell_char(&self, cell: CellType, tile: &TileDefinition) -> char;
}

/// Characters exactly as the tile mapping specifies them.
pub struct ClassicGlyphs;

impl GlyphSet for ClassicGlyphs {
    fn cell_char(&self, _cell: CellType, tile: &TileDefinition) -> char {
        tile.tui_char
    }
}

/// Unicode glyphs. Replaces the stock ASCII characters only; a tile mapping
/// that chose its own character keeps it.
pub struct FancyGlyphs;

impl GlyphSet for FancyGlyphs {
    fn cell_char(&self, cell: CellType, tile: &TileDefinition) -> char {
        if tile.tui_char != cell.symbol() {
            return tile.tui_char;
        }
        match cell {
            CellType::Floor => '·',
            CellType::Wall => '█',
            CellType::Empty => ' ',
        }
    }
}

/// Detect if the terminal supports Unicode/UTF-8.
pub fn supports_unicode() -> bool {
    // Check LANG, LC_ALL, or LC_CTYPE for "UTF-8"
    let vars = ["LANG", "LC_ALL", "LC_CTYPE"];
    for var in vars {
        if let Ok(val) = std::env::var(var) {
            let val = val.to_uppercase();
            if val.contains("UTF-8") || val.contains("UTF8") {
                return true;
            }
        }
    }

    if let Ok(term) = std::env::var("TERM") {
        if term == "xterm-256color" || term == "alacritty" || term == "kitty" || term == "iterm" {
            return true;
        }
    }

    false
}

/// Returns the best available glyph set for the current environment.
pub fn detect_glyph_set(mode: GraphicsMode) -> Box<dyn GlyphSet> {
    match mode {
        GraphicsMode::Classic => Box::new(ClassicGlyphs),
        GraphicsMode::Fancy => Box::new(FancyGlyphs),
        GraphicsMode::Auto => {
            if supports_unicode() {
                Box::new(FancyGlyphs)
            } else {
                Box::new(ClassicGlyphs)
            }
        }
    }
}
