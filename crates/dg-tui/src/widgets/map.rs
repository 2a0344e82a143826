//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use crate::presenter::MapFrame;
use crate::theme::Theme;

/// Widget for rendering the presenter's current frame
pub struct MapWidget<'a> {
    frame: Option<&'a MapFrame>,
    theme: &'a Theme,
}

impl<'a> MapWidget<'a> {
    pub fn new(frame: Option<&'a MapFrame>, theme: &'a Theme) -> Self {
        Self { frame, theme }
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(Span::styled("Dungeon", Style::default().fg(self.theme.accent)));

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(frame) = self.frame else {
            let hint = "Nothing rendered. Press g to generate.";
            buf.set_string(
                inner.x,
                inner.y,
                hint,
                Style::default().fg(self.theme.text_dim),
            );
            return;
        };

        // Maps larger than the viewport are cut at the right and bottom
        for (row_idx, row) in frame.rows.iter().take(inner.height as usize).enumerate() {
            for (col_idx, tile) in row.iter().take(inner.width as usize).enumerate() {
                if let Some(cell) = buf.cell_mut(Position::new(
                    inner.x + col_idx as u16,
                    inner.y + row_idx as u16,
                )) {
                    cell.set_char(tile.ch);
                    cell.set_style(Style::default().fg(tile.color));
                }
            }
        }
    }
}
