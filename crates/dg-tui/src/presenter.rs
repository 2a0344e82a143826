//! Presenters for terminal output
//!
//! [`TerminalPresenter`] turns a dungeon into a colored character frame that
//! the map widget draws. [`TextPresenter`] turns it into plain text. Both
//! need a tile for every drawable cell state and refuse to render without
//! one.

use dg_assets::AssetRegistry;
use dg_core::{CellType, Dungeon, Presenter, RenderError};
use ratatui::style::Color;

use crate::display::{GlyphSet, GraphicsMode, detect_glyph_set};
use crate::theme::Theme;

/// One drawn cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedTile {
    pub ch: char,
    pub color: Color,
}

impl RenderedTile {
    const BLANK: RenderedTile = RenderedTile {
        ch: ' ',
        color: Color::Reset,
    };
}

/// Character frame for one dungeon. `rows[0]` is the top of the map
/// (highest `y`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFrame {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<Vec<RenderedTile>>,
}

impl MapFrame {
    /// Tile at screen position (column, row)
    pub fn tile(&self, col: usize, row: usize) -> Option<RenderedTile> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}

/// Fail with the first drawable cell state the registry cannot draw.
fn check_assets(assets: Option<&AssetRegistry>) -> Result<&AssetRegistry, RenderError> {
    let Some(assets) = assets else {
        return Err(RenderError::MissingAssets {
            cell: CellType::Floor,
        });
    };
    match assets.missing().first() {
        Some(&cell) => Err(RenderError::MissingAssets { cell }),
        None => Ok(assets),
    }
}

/// Presenter that builds a frame for the ratatui map widget
pub struct TerminalPresenter {
    assets: Option<AssetRegistry>,
    glyphs: Box<dyn GlyphSet>,
    theme: Theme,
    frame: Option<MapFrame>,
}

impl TerminalPresenter {
    pub fn new(assets: Option<AssetRegistry>, graphics_mode: GraphicsMode, theme: Theme) -> Self {
        Self {
            assets,
            glyphs: detect_glyph_set(graphics_mode),
            theme,
            frame: None,
        }
    }

    /// The frame of the last successful render, until cleared
    pub fn frame(&self) -> Option<&MapFrame> {
        self.frame.as_ref()
    }

    pub fn has_assets(&self) -> bool {
        check_assets(self.assets.as_ref()).is_ok()
    }

    fn fallback_color(&self, cell: CellType) -> Color {
        match cell {
            CellType::Floor => self.theme.map_floor,
            CellType::Wall => self.theme.map_wall,
            CellType::Empty => Color::Reset,
        }
    }
}

impl std::fmt::Debug for TerminalPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalPresenter")
            .field("assets", &self.assets)
            .field("frame", &self.frame.as_ref().map(|fr| (fr.width, fr.height)))
            .finish()
    }
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, dungeon: &Dungeon) -> Result<(), RenderError> {
        let assets = check_assets(self.assets.as_ref())?;

        let rows = dungeon
            .grid
            .rows_top_down()
            .map(|row| {
                row.iter()
                    .map(|&cell| match assets.get(cell) {
                        Ok(tile) => RenderedTile {
                            ch: self.glyphs.cell_char(cell, tile),
                            color: AssetRegistry::parse_color(&tile.tui_color)
                                .unwrap_or_else(|| self.fallback_color(cell)),
                        },
                        Err(_) => RenderedTile::BLANK,
                    })
                    .collect()
            })
            .collect();

        self.frame = Some(MapFrame {
            width: dungeon.width(),
            height: dungeon.height(),
            rows,
        });
        Ok(())
    }

    fn clear(&mut self) {
        self.frame = None;
    }
}

/// Presenter that renders to plain text, one line per map row
#[derive(Debug, Clone, Default)]
pub struct TextPresenter {
    assets: Option<AssetRegistry>,
    output: Option<String>,
}

impl TextPresenter {
    pub fn new(assets: Option<AssetRegistry>) -> Self {
        Self {
            assets,
            output: None,
        }
    }

    /// Text of the last successful render, until cleared
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl Presenter for TextPresenter {
    fn render(&mut self, dungeon: &Dungeon) -> Result<(), RenderError> {
        let assets = check_assets(self.assets.as_ref())?;

        let mut text = String::with_capacity((dungeon.width() + 1) * dungeon.height());
        for row in dungeon.grid.rows_top_down() {
            let line: String = row
                .iter()
                .map(|&cell| assets.get(cell).map_or(' ', |tile| tile.tui_char))
                .collect();
            text.push_str(line.trim_end());
            text.push('\n');
        }
        self.output = Some(text);
        Ok(())
    }

    fn clear(&mut self) {
        self.output = None;
    }
}
