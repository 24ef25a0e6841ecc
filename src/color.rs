/// Hex colors for the themed panels and heatmap.
use crate::types::{ActivityLevel, Theme};

/// Heatmap colors indexed by activity level: blues for light, reds for dark.
pub fn heatmap_palette(theme: Theme) -> [&'static str; 5] {
    match theme {
        Theme::Light => ["#ebedf0", "#c6e3ff", "#7cc4fa", "#2196f3", "#1976d2"],
        Theme::Dark => ["#161b22", "#ffcdd2", "#ef9a9a", "#e57373", "#f44336"],
    }
}

pub fn level_color(theme: Theme, level: ActivityLevel) -> &'static str {
    heatmap_palette(theme)[usize::from(level.as_u8())]
}

/// Accent for the music panel and selection marker.
pub fn accent(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "#00a6fb",
        Theme::Dark => "#ff4040",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_colors_follow_theme() {
        assert_eq!(level_color(Theme::Light, ActivityLevel::None), "#ebedf0");
        assert_eq!(level_color(Theme::Dark, ActivityLevel::Peak), "#f44336");
    }
}
