//! Application state and main UI controller

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use dg_core::{GameRng, GenerateReport, Generator, GeneratorConfig};

use crate::input::{Command, key_to_command};
use crate::presenter::TerminalPresenter;
use crate::theme::Theme;
use crate::widgets::{MapWidget, StatusWidget};

/// UI mode - what the app is currently displaying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Map view
    Normal,
    /// Showing help
    Help,
}

/// Application state
pub struct App {
    /// Generation lifecycle, owning the terminal presenter
    generator: Generator<TerminalPresenter>,

    /// Outcome of the last `generate`
    last_report: Option<GenerateReport>,

    /// Should quit
    should_quit: bool,

    /// Current UI mode
    mode: UiMode,

    /// Color theme
    theme: Theme,
}

impl App {
    /// Create a new app
    pub fn new(config: GeneratorConfig, presenter: TerminalPresenter, theme: Theme) -> Self {
        Self {
            generator: Generator::new(config, presenter),
            last_report: None,
            should_quit: false,
            mode: UiMode::Normal,
            theme,
        }
    }

    pub fn generator(&self) -> &Generator<TerminalPresenter> {
        &self.generator
    }

    pub fn last_report(&self) -> Option<&GenerateReport> {
        self.last_report.as_ref()
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    /// Check if should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle a terminal event, returning a command if one is triggered
    pub fn handle_event(&mut self, event: Event) -> Option<Command> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match self.mode {
            UiMode::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('?') | KeyCode::Enter
                ) {
                    self.mode = UiMode::Normal;
                }
                None
            }
            UiMode::Normal => key_to_command(key),
        }
    }

    /// Execute a command
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Generate => self.generate(),
            Command::Clear => self.generator.clear(),
            Command::Reseed => {
                let seed = GameRng::from_time().seed();
                self.generator.config_mut().seed = Some(seed);
                self.generate();
            }
            Command::MoreRooms => {
                let config = self.generator.config_mut();
                config.max_rooms = config.max_rooms.saturating_add(1);
            }
            Command::FewerRooms => {
                let config = self.generator.config_mut();
                config.max_rooms = config.max_rooms.saturating_sub(1);
            }
            Command::Help => self.mode = UiMode::Help,
            Command::Quit => self.should_quit = true,
        }
    }

    /// Run one generation and remember its report
    pub fn generate(&mut self) {
        self.last_report = Some(self.generator.generate());
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Layout: map on top, status lines below
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Map + border
                Constraint::Length(2), // Status lines
            ])
            .split(frame.area());

        let map_widget = MapWidget::new(self.generator.presenter().frame(), &self.theme);
        frame.render_widget(map_widget, chunks[0]);

        let status_widget = StatusWidget::new(
            self.generator.config(),
            self.last_report.as_ref(),
            self.generator.is_rendered(),
            &self.theme,
        );
        frame.render_widget(status_widget, chunks[1]);

        if self.mode == UiMode::Help {
            self.render_help(frame);
        }
    }

    fn render_help(&self, frame: &mut Frame) {
        let area = centered_rect(50, 50, frame.area());
        frame.render_widget(Clear, area);

        let help_text = r#"g, Enter  Generate a new dungeon
c         Clear the map
s         Pin a fresh seed and generate
+ / -     More / fewer room attempts
?         This help
q, Esc    Quit

Press ESC or SPACE to close"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));

        let paragraph = Paragraph::new(help_text)
            .block(block)
            .style(Style::default().fg(self.theme.text));

        frame.render_widget(paragraph, area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
