//! Input handling - convert key events to commands

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Viewer commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Generate a new dungeon with the current configuration
    Generate,
    /// Release the rendered dungeon
    Clear,
    /// Pin a fresh seed, then generate
    Reseed,
    /// Allow one more room placement attempt
    MoreRooms,
    /// Allow one fewer room placement attempt
    FewerRooms,
    /// Toggle the help overlay
    Help,
    Quit,
}

/// Convert a key event to a viewer command.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit), // Ctrl+C: quit
            KeyCode::Char('l') => Some(Command::Clear), // Ctrl+L: clear
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('g') | KeyCode::Enter => Some(Command::Generate),
        KeyCode::Char('c') => Some(Command::Clear),
        KeyCode::Char('s') => Some(Command::Reseed),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Command::MoreRooms),
        KeyCode::Char('-') => Some(Command::FewerRooms),
        KeyCode::Char('?') => Some(Command::Help),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
