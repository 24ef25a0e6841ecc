use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::clamp_name;
use super::theme::Palette;
use crate::playlist::Playlist;

pub fn build_music_text(playlist: &Playlist, palette: Palette) -> Text<'static> {
    let Some(song) = playlist.current() else {
        return Text::from(Span::styled(
            "  No songs for this theme",
            Style::default().fg(palette.dim()),
        ));
    };

    let state = if playlist.playing { "▶ playing" } else { "❚❚ paused" };
    Text::from(vec![
        Line::from(Span::styled(
            format!("  {}", clamp_name(&song.name, 36)),
            Style::default()
                .fg(palette.text())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", clamp_name(&song.artist, 36)),
            Style::default().fg(palette.accent()),
        )),
        Line::from(Span::styled(
            format!("  {}", clamp_name(&song.album, 36)),
            Style::default().fg(palette.dim()),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {state}"), Style::default().fg(palette.primary())),
            Span::styled(
                format!("   {}/{}", playlist.index() + 1, playlist.songs().len()),
                Style::default().fg(palette.dim()),
            ),
        ]),
    ])
}
