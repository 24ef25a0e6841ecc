mod calendar;
mod cards;
mod help;
mod helpers;
mod marquee;
mod music;
mod theme;

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::activity::{select_window, window_start};
use crate::app::{App, AppView};
use crate::types::Activity;
use theme::Palette;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::new(app.theme);
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    frame.render_widget(header(app, palette), layout[0]);

    match app.view {
        AppView::Help => {
            frame.render_widget(panel(help::build_help_text(palette), " Help ", palette), layout[1]);
        }
        AppView::Dashboard => draw_bento(frame, app, palette, layout[1]),
    }

    let marquee_width = usize::from(layout[2].width.saturating_sub(4));
    let marquee = marquee::marquee_line(
        &app.config.tech_stack,
        app.ticks,
        app.config.marquee_speed,
        marquee_width,
    );
    frame.render_widget(
        panel(
            Text::from(Span::styled(format!(" {marquee}"), Style::default().fg(palette.accent()))),
            " Tech Stack ",
            palette,
        ),
        layout[2],
    );
}

fn draw_bento(frame: &mut Frame, app: &App, palette: Palette, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    frame.render_widget(
        panel(cards::build_cards_text(app, palette), " Gallery ", palette),
        top[0],
    );
    frame.render_widget(
        panel(music::build_music_text(&app.playlist, palette), " Music ", palette),
        top[1],
    );
    frame.render_widget(
        calendar_panel(app, &app.wakatime, " Wakatime ", bottom[0], palette),
        bottom[0],
    );
    frame.render_widget(
        calendar_panel(app, &app.github, " GitHub ", bottom[1], palette),
        bottom[1],
    );
}

fn calendar_panel<'a>(
    app: &App,
    activities: &[Activity],
    title: &'a str,
    area: Rect,
    palette: Palette,
) -> Paragraph<'a> {
    if activities.is_empty() {
        return panel(
            Text::from(Span::styled("  No data found.", Style::default().fg(palette.dim()))),
            title,
            palette,
        );
    }

    let inner_width = area.width.saturating_sub(2);
    let window_days = if inner_width >= calendar::calendar_width(app.config.window_days) {
        app.config.window_days
    } else {
        app.config.narrow_window_days
    };
    let as_of = Local::now().date_naive();
    let start = window_start(as_of, window_days);

    let selected = select_window(activities, window_days, as_of);
    let total_minutes = selected.iter().map(|activity| activity.count).sum();
    let weeks = calendar::calendar_grid(&selected, start, as_of);
    panel(calendar::build_calendar_text(&weeks, total_minutes, palette), title, palette)
}

fn header(app: &App, palette: Palette) -> Paragraph<'static> {
    let mut spans = vec![
        Span::styled(
            "  Bento  ",
            Style::default().fg(Color::Black).bg(palette.primary()),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{} theme", app.theme),
            Style::default()
                .fg(palette.secondary())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   ?: help", Style::default().fg(palette.dim())),
    ];
    if let Some(status) = &app.status {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(status.clone(), Style::default().fg(Color::Yellow)));
    }
    Paragraph::new(Text::from(Line::from(spans)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(palette.secondary())),
        )
}

fn panel<'a>(text: Text<'a>, title: &'a str, palette: Palette) -> Paragraph<'a> {
    Paragraph::new(text)
        .style(Style::default().fg(palette.text()))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(palette.secondary()))
                .title(title),
        )
}
