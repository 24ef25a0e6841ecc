use ratatui::style::Color;

use super::helpers::hex_to_color;
use crate::color;
use crate::types::{ActivityLevel, Theme};

/// Colors for the active theme.
#[derive(Clone, Copy)]
pub struct Palette {
    theme: Theme,
}

impl Palette {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Primary branding color
    pub fn primary(&self) -> Color {
        hex_to_color(color::accent(self.theme)).unwrap_or(Color::Magenta)
    }

    /// Panel borders
    pub fn secondary(&self) -> Color {
        match self.theme {
            Theme::Light => Color::Cyan,
            Theme::Dark => Color::LightRed,
        }
    }

    /// Loaded card
    pub fn success(&self) -> Color {
        Color::Green
    }

    /// Selection marker/arrow
    pub fn selection_marker(&self) -> Color {
        self.primary()
    }

    pub fn dim(&self) -> Color {
        Color::DarkGray
    }

    pub fn text(&self) -> Color {
        Color::White
    }

    pub fn accent(&self) -> Color {
        match self.theme {
            Theme::Light => Color::LightBlue,
            Theme::Dark => Color::LightMagenta,
        }
    }

    /// Heatmap cell
    pub fn level(&self, level: ActivityLevel) -> Color {
        hex_to_color(color::level_color(self.theme, level)).unwrap_or(Color::DarkGray)
    }
}
