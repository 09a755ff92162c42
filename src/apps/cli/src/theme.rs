//! Theme palettes mapped onto terminal colors.

use neoncode_core::frame::Hue;
use neoncode_core_types::Theme;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub secondary: Color,
    pub highlight: Color,
    pub leaf: Color,
    pub text: Color,
    pub dim: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Cyberpunk => Self {
                accent: Color::Cyan,
                secondary: Color::Magenta,
                highlight: Color::Yellow,
                leaf: Color::Green,
                text: Color::White,
                dim: Color::DarkGray,
            },
            Theme::Hacker => Self {
                accent: Color::Green,
                secondary: Color::LightGreen,
                highlight: Color::White,
                leaf: Color::Green,
                text: Color::LightGreen,
                dim: Color::DarkGray,
            },
            Theme::Dark => Self {
                accent: Color::Blue,
                secondary: Color::Gray,
                highlight: Color::LightBlue,
                leaf: Color::Cyan,
                text: Color::Gray,
                dim: Color::DarkGray,
            },
            Theme::Neon => Self {
                accent: Color::LightMagenta,
                secondary: Color::LightCyan,
                highlight: Color::LightYellow,
                leaf: Color::LightGreen,
                text: Color::White,
                dim: Color::DarkGray,
            },
        }
    }

    pub fn hue(&self, hue: Hue) -> Color {
        match hue {
            Hue::Accent => self.accent,
            Hue::Secondary => self.secondary,
            Hue::Highlight => self.highlight,
            Hue::Leaf => self.leaf,
        }
    }
}
