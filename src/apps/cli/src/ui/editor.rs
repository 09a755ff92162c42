//! Editor panel: the demo buffer with line numbers, the suggestion
//! list, and the complexity summary.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use neoncode_core::editor::{SuggestionKind, SUGGESTIONS};

use crate::app::{App, Focus};
use crate::theme::Palette;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(SUGGESTIONS.len() as u16 + 2),
            Constraint::Length(5),
        ])
        .split(area);

    draw_buffer(frame, chunks[0], app, palette);
    draw_suggestions(frame, chunks[1], app, palette);
    draw_analysis(frame, chunks[2], app, palette);
}

fn draw_buffer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let lines: Vec<Line> = app
        .editor
        .lines()
        .enumerate()
        .map(|(i, text)| {
            Line::from(vec![
                Span::styled(format!("{:>3} ", i + 1), Style::default().fg(palette.dim)),
                Span::styled(text.to_string(), Style::default().fg(palette.text)),
            ])
        })
        .collect();
    let border = if app.focus == Focus::Editor {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };
    let buffer = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" main.js  JavaScript ")
            .border_style(border),
    );
    frame.render_widget(buffer, area);
}

fn draw_suggestions(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let title = if app.editor.is_analyzing() {
        " AI Suggestions (analyzing...) "
    } else {
        " AI Suggestions (Up/Down + Enter to apply) "
    };
    let items: Vec<ListItem> = SUGGESTIONS
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let (marker, color) = match suggestion.kind {
                SuggestionKind::Optimization => ("⚡", palette.highlight),
                SuggestionKind::Bug => ("✗", palette.secondary),
                SuggestionKind::Enhancement => ("✦", palette.accent),
                SuggestionKind::Info => ("i", palette.dim),
            };
            let mut style = Style::default().fg(palette.text);
            if app.focus == Focus::Editor && i == app.suggestion_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(color)),
                Span::styled(suggestion.text, style),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(palette.dim)),
    );
    frame.render_widget(list, area);
}

fn draw_analysis(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let analysis = app.editor.analysis();
    let lines = vec![
        row("Time complexity", analysis.time_complexity, palette),
        row("Space complexity", analysis.space_complexity, palette),
        row(
            "Optimization potential",
            analysis.optimization_potential.label(),
            palette,
        ),
    ];
    let summary = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Code Analysis ")
            .border_style(Style::default().fg(palette.dim)),
    );
    frame.render_widget(summary, area);
}

fn row<'a>(label: &'a str, value: &'a str, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(palette.dim)),
        Span::styled(value, Style::default().fg(palette.accent)),
    ])
}
