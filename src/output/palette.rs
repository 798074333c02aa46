//! Color roles and the rendering mode that decides how they are emitted.

use crossterm::style::{Color, Stylize, style};
use std::env;

/// How colors are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// 24-bit RGB escapes
    TrueColor,
    /// xterm 256-color palette escapes
    Ansi256,
    /// The basic 16 ANSI colors
    Ansi16,
    /// Plain text
    None,
}

impl ColorMode {
    /// Picks a mode from `NO_COLOR`, `COLORTERM` and `TERM`.
    ///
    /// Whether stdout is a terminal is deliberately not consulted: the shell
    /// wrapper captures the output and echoes it back to the terminal.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_env(
            env::var("NO_COLOR").ok().as_deref(),
            env::var("COLORTERM").ok().as_deref(),
            env::var("TERM").ok().as_deref(),
        )
    }

    /// Mode selection from explicit environment values.
    #[must_use]
    pub fn from_env(no_color: Option<&str>, colorterm: Option<&str>, term: Option<&str>) -> Self {
        if no_color.is_some_and(|value| !value.is_empty()) {
            return Self::None;
        }
        if matches!(colorterm, Some("truecolor" | "24bit")) {
            return Self::TrueColor;
        }
        match term {
            None | Some("" | "dumb") => Self::None,
            Some(term) if term.contains("256color") => Self::Ansi256,
            Some(_) => Self::Ansi16,
        }
    }

    /// Whether any escape sequences are emitted.
    #[must_use]
    pub fn is_colored(self) -> bool {
        self != Self::None
    }
}

/// Semantic styling slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Shortcut names
    Shortcut,
    /// Targets that exist
    Path,
    /// Targets missing from the filesystem
    PathStale,
    /// The shortcut bound to the working directory
    Current,
    /// Error messages
    Error,
}

/// One role's color at each depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RoleColor {
    /// 24-bit value
    rgb: (u8, u8, u8),
    /// Nearest xterm-256 index
    ansi256: u8,
    /// Closest basic color
    ansi16: Color,
}

impl RoleColor {
    /// Default colors per role.
    const fn for_role(role: Role) -> Self {
        match role {
            Role::Shortcut => Self {
                rgb: (0xff, 0x80, 0x00),
                ansi256: 208,
                ansi16: Color::DarkYellow,
            },
            Role::Path => Self {
                rgb: (0x00, 0xff, 0xff),
                ansi256: 51,
                ansi16: Color::Cyan,
            },
            Role::PathStale => Self {
                rgb: (0x80, 0x80, 0x80),
                ansi256: 244,
                ansi16: Color::DarkGrey,
            },
            Role::Current => Self {
                rgb: (0xff, 0xff, 0x00),
                ansi256: 226,
                ansi16: Color::Yellow,
            },
            Role::Error => Self {
                rgb: (0xff, 0x40, 0x40),
                ansi256: 203,
                ansi16: Color::Red,
            },
        }
    }
}

/// Maps roles to terminal styling for one rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Active rendering mode
    mode: ColorMode,
}

impl Palette {
    /// Creates a palette for `mode`.
    #[must_use]
    pub const fn new(mode: ColorMode) -> Self {
        Self { mode }
    }

    /// The active rendering mode.
    #[must_use]
    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Terminal color for `role`, or `None` when colors are off.
    #[must_use]
    pub const fn color(&self, role: Role) -> Option<Color> {
        let color = RoleColor::for_role(role);
        match self.mode {
            ColorMode::TrueColor => Some(Color::Rgb {
                r: color.rgb.0,
                g: color.rgb.1,
                b: color.rgb.2,
            }),
            ColorMode::Ansi256 => Some(Color::AnsiValue(color.ansi256)),
            ColorMode::Ansi16 => Some(color.ansi16),
            ColorMode::None => None,
        }
    }

    /// Styles `text` for `role`.
    ///
    /// The reset sequence is emitted before any trailing newline the caller
    /// adds, so shells that re-echo captured output still see the line end.
    #[must_use]
    pub fn paint(&self, role: Role, text: &str) -> String {
        match self.color(role) {
            Some(color) => style(text).with(color).to_string(),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_wins() {
        assert_eq!(
            ColorMode::from_env(Some("1"), Some("truecolor"), Some("xterm-256color")),
            ColorMode::None
        );
    }

    #[test]
    fn test_empty_no_color_is_ignored() {
        assert_eq!(
            ColorMode::from_env(Some(""), Some("24bit"), None),
            ColorMode::TrueColor
        );
    }

    #[test]
    fn test_term_detection() {
        assert_eq!(
            ColorMode::from_env(None, None, Some("xterm-256color")),
            ColorMode::Ansi256
        );
        assert_eq!(ColorMode::from_env(None, None, Some("xterm")), ColorMode::Ansi16);
        assert_eq!(ColorMode::from_env(None, None, Some("dumb")), ColorMode::None);
        assert_eq!(ColorMode::from_env(None, None, None), ColorMode::None);
    }

    #[test]
    fn test_is_colored() {
        assert!(ColorMode::Ansi16.is_colored());
        assert!(!ColorMode::None.is_colored());
    }

    #[test]
    fn test_role_colors_per_mode() {
        assert_eq!(
            Palette::new(ColorMode::TrueColor).color(Role::Shortcut),
            Some(Color::Rgb {
                r: 0xff,
                g: 0x80,
                b: 0x00
            })
        );
        assert_eq!(
            Palette::new(ColorMode::Ansi256).color(Role::PathStale),
            Some(Color::AnsiValue(244))
        );
        assert_eq!(
            Palette::new(ColorMode::Ansi16).color(Role::Error),
            Some(Color::Red)
        );
        assert_eq!(Palette::new(ColorMode::None).color(Role::Current), None);
    }

    #[test]
    fn test_plain_paint() {
        let palette = Palette::new(ColorMode::None);
        assert_eq!(palette.paint(Role::Path, "~/src"), "~/src");
    }

    #[test]
    fn test_colored_paint_keeps_text() {
        let palette = Palette::new(ColorMode::Ansi16);
        assert!(palette.paint(Role::Path, "~/src").contains("~/src"));
    }
}
