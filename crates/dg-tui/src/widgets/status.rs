//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use dg_core::{GenerateReport, GeneratorConfig};

use crate::theme::Theme;

/// Widget for rendering the configuration and the last run's outcome
pub struct StatusWidget<'a> {
    config: &'a GeneratorConfig,
    report: Option<&'a GenerateReport>,
    rendered: bool,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        report: Option<&'a GenerateReport>,
        rendered: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            config,
            report,
            rendered,
            theme,
        }
    }

    /// First line: configuration
    pub fn config_line(&self) -> String {
        let c = self.config;
        let seed = match c.fixed_seed() {
            Some(seed) => seed.to_string(),
            None => "random".to_string(),
        };
        format!(
            "Map:{}x{} Rooms:{} Size:{}-{} Seed:{}",
            c.width, c.height, c.max_rooms, c.min_room_size, c.max_room_size, seed
        )
    }

    /// Second line: last generation result
    pub fn result_line(&self) -> String {
        match self.report {
            None => "No dungeon generated yet".to_string(),
            Some(_) if !self.rendered => "Cleared".to_string(),
            Some(report) => {
                let mut line = format!("Placed {} rooms (seed {})", report.room_count, report.seed);
                if let Some(warning) = report.warning() {
                    line.push_str(&format!(" Warning: {}", warning));
                }
                line
            }
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line1 = self.config_line();
        let line2 = self.result_line();

        let warn = self.report.is_some_and(|r| r.warning().is_some()) && self.rendered;
        let style2 = if warn {
            Style::default().fg(self.theme.bad)
        } else {
            Style::default().fg(self.theme.text)
        };

        buf.set_string(area.x, area.y, &line1, Style::default().fg(self.theme.text));
        if area.height > 1 {
            buf.set_string(area.x, area.y + 1, &line2, style2);
        }
    }
}
