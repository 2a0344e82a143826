//! Terminal color theme system
//!
//! Provides adaptive color palettes for dark and light terminal backgrounds.
//! Auto-detects via COLORFGBG env var, or manual override with the
//! DG_LIGHT_BG=1 environment variable.

use ratatui::style::Color;

/// Color theme for terminal UI.
/// Tile colors come from the asset mapping; these are the fallbacks and the
/// surrounding chrome.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, instructions)
    pub text_dim: Color,
    /// Default border color
    pub border: Color,
    /// Informational border (help)
    pub border_accent: Color,
    /// Section headers, accent text
    pub accent: Color,
    /// Warnings
    pub bad: Color,

    // Map terrain
    pub map_floor: Color,
    pub map_wall: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            border_accent: Color::Cyan,
            accent: Color::Cyan,
            bad: Color::Red,
            map_floor: Color::White,
            map_wall: Color::Gray,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            border_accent: Color::Blue,
            accent: Color::Blue,
            bad: Color::Red,
            map_floor: Color::Black,
            map_wall: Color::DarkGray,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    fn is_light_background() -> bool {
        // Explicit override via environment variable
        if let Ok(val) = std::env::var("DG_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is set by many terminals (xterm, rxvt, iTerm2, etc.)
        // Format: "fg;bg" where values are color indices (0-15)
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
