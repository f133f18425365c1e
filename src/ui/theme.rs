use crossterm::style::{Color, Stylize};

/// Design tokens for the nua-deploy CLI.
///
/// Only 5 semantic colors; icons come from `icons` / `icons_ascii`.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "->";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
}

impl Icon {
    pub fn glyph(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Icon::Success, true) => icons::SUCCESS,
            (Icon::Error, true) => icons::ERROR,
            (Icon::Warning, true) => icons::WARNING,
            (Icon::Progress, true) => icons::PROGRESS,
            (Icon::Arrow, true) => icons::ARROW,
            (Icon::Success, false) => icons_ascii::SUCCESS,
            (Icon::Error, false) => icons_ascii::ERROR,
            (Icon::Warning, false) => icons_ascii::WARNING,
            (Icon::Progress, false) => icons_ascii::PROGRESS,
            (Icon::Arrow, false) => icons_ascii::ARROW,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning => colors::WARNING,
            Icon::Progress => colors::INFO,
            Icon::Arrow => colors::DIM,
        }
    }

    pub fn render(self, color: bool, unicode: bool) -> String {
        paint(self.glyph(unicode), self.color(), color)
    }
}

/// Color `text` when enabled, otherwise return it untouched
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_is_plain_without_color() {
        assert_eq!(paint("galene", colors::INFO, false), "galene");
    }

    #[test]
    fn paint_wraps_in_escape_codes_with_color() {
        let painted = paint("galene", colors::ERROR, true);
        assert!(painted.contains("galene"));
        assert!(painted.starts_with('\u{1b}'));
    }

    #[test]
    fn ascii_icons_for_plain_terminals() {
        assert_eq!(Icon::Success.glyph(false), "[OK]");
        assert_eq!(Icon::Error.render(false, true), "✗");
    }
}
