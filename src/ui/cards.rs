use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::clamp_name;
use super::theme::Palette;
use crate::app::App;
use crate::cards::stack_layout;
use crate::types::LoadState;

/// Glyph leaning the same way as the card's tilt.
fn tilt_glyph(rotation: f64) -> &'static str {
    if rotation >= 0.0 { "╱" } else { "╲" }
}

pub fn build_cards_text(app: &App, palette: Palette) -> Text<'static> {
    let visible = app.visible_cards();
    if visible.is_empty() {
        return Text::from(vec![
            Line::from(Span::styled(
                "  No images found",
                Style::default().fg(palette.dim()),
            )),
            Line::from(Span::styled(
                format!(
                    "  Add images to {}/{}/",
                    app.config.photos_dir.display(),
                    app.theme
                ),
                Style::default().fg(palette.dim()),
            )),
        ]);
    }

    let layout = stack_layout(&visible, app.config.card_offset);
    let mut lines = Vec::new();
    for (index, (card, placement)) in visible.iter().zip(layout.iter()).enumerate() {
        let selected = index == app.selected_card_index;
        let marker_style = if selected {
            Style::default()
                .fg(palette.selection_marker())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.dim())
        };
        let state_style = match card.load_state {
            LoadState::Loaded => Style::default().fg(palette.success()),
            _ => Style::default().fg(palette.dim()),
        };
        let mut name_style = Style::default().fg(palette.text());
        if placement.z_index == visible.len() {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }

        lines.push(Line::from(vec![
            Span::styled(if selected { "> " } else { "  " }, marker_style),
            Span::raw(" ".repeat(usize::from(placement.offset))),
            Span::styled(format!("{} ", tilt_glyph(placement.rotation)), Style::default().fg(palette.accent())),
            Span::styled(clamp_name(&card.alt, 28), name_style),
            Span::styled(
                format!(" {:+5.1}°", placement.rotation),
                Style::default().fg(palette.dim()),
            ),
            Span::styled(" ●", state_style),
        ]));
    }
    Text::from(lines)
}
