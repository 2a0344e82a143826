//! dg-tui: Terminal UI layer using ratatui
//!
//! Provides the presenters that turn a generated layout into terminal output,
//! and the interactive viewer that drives generation from the keyboard.

pub mod app;
pub mod display;
pub mod input;
pub mod presenter;
pub mod theme;
pub mod widgets;

pub use app::{App, UiMode};
pub use display::GraphicsMode;
pub use presenter::{MapFrame, TerminalPresenter, TextPresenter};
pub use theme::Theme;
