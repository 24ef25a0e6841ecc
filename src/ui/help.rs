use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Palette;

pub fn build_help_text(palette: Palette) -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(palette.accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global", palette));
    lines.extend(section_lines(
        &["q: Quit", "?: Toggle help", "t: Toggle light/dark theme", "r: Reload photos and activity"],
        palette,
    ));

    lines.push(Line::from(""));
    lines.push(section_title("Photos", palette));
    lines.extend(section_lines(
        &["Up/Down: Select card", "Enter/space: Send card to the back"],
        palette,
    ));

    lines.push(Line::from(""));
    lines.push(section_title("Music", palette));
    lines.extend(section_lines(
        &["n: Next song", "p: Previous song", "m: Play/pause"],
        palette,
    ));

    lines.push(Line::from(""));
    lines.push(section_title("Activity", palette));
    lines.extend(section_lines(
        &["bento import wakatime|github <file>: Load a saved feed"],
        palette,
    ));

    Text::from(lines)
}

fn section_title(title: &str, palette: Palette) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(palette.secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str], palette: Palette) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(palette.text()),
            ))
        })
        .collect()
}
