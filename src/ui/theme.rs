use crossterm::style::{Color, Stylize};

/// Theme constants for terminal output.
///
/// - Only 5 semantic colors (`colors::*`)
/// - Icons come from `icons::*` with an ASCII fallback
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: (&str, &str) = ("✓", "[OK]");
    pub const WARNING: (&str, &str) = ("⚠", "[WARN]");
    pub const ERROR: (&str, &str) = ("✗", "[ERR]");
    pub const FOLDER: (&str, &str) = ("▸", ">");
}

/// Pick the unicode or ASCII variant of an icon
pub fn icon(pair: (&'static str, &'static str), unicode: bool) -> &'static str {
    if unicode {
        pair.0
    } else {
        pair.1
    }
}

/// Apply `color` when color output is enabled
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("{}", text.with(color))
    } else {
        text.to_string()
    }
}
