//! Collaboration sidebar: team chat, the roster, and recent changes.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use neoncode_core::collab::{ChangeKind, CHANGES, COLLABORATORS};

use crate::app::{App, Focus};
use crate::theme::Palette;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(COLLABORATORS.len() as u16 + 2),
            Constraint::Min(4),
            Constraint::Length(CHANGES.len() as u16 + 2),
            Constraint::Length(3),
        ])
        .split(area);

    draw_roster(frame, chunks[0], app, palette);
    draw_messages(frame, chunks[1], app, palette);
    draw_changes(frame, chunks[2], palette);

    let border = if app.focus == Focus::Collab {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };
    let input = Paragraph::new(app.collab_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Message the team ")
            .border_style(border),
    );
    frame.render_widget(input, chunks[3]);
}

fn draw_roster(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let lines: Vec<Line> = COLLABORATORS
        .iter()
        .map(|member| {
            let (dot, color) = if member.online {
                ("●", palette.leaf)
            } else {
                ("○", palette.dim)
            };
            Line::from(vec![
                Span::styled(format!("{dot} "), Style::default().fg(color)),
                Span::styled(member.name, Style::default().fg(palette.text)),
                Span::styled(
                    format!("  {}", member.last_active),
                    Style::default().fg(palette.dim),
                ),
            ])
        })
        .collect();
    let roster = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Team ({} online) ", app.collab.online_count()))
            .border_style(Style::default().fg(palette.dim)),
    );
    frame.render_widget(roster, area);
}

fn draw_messages(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let now = app.now();
    let mut lines = Vec::new();
    for message in app.collab.messages() {
        let name_color = if message.is_new(now) {
            palette.highlight
        } else {
            palette.secondary
        };
        let name_style = Style::default().fg(name_color).add_modifier(Modifier::BOLD);
        lines.push(Line::from(vec![
            Span::styled(message.author.clone(), name_style),
            Span::styled(
                format!("  {}", message.time_label),
                Style::default().fg(palette.dim),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            message.text.clone(),
            Style::default().fg(palette.text),
        )));
    }
    if app.collab.is_replying() {
        lines.push(Line::from(Span::styled(
            "AI Assistant is typing...",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let messages = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Chat ")
                .border_style(Style::default().fg(palette.dim)),
        );
    frame.render_widget(messages, area);
}

fn draw_changes(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines: Vec<Line> = CHANGES
        .iter()
        .map(|change| {
            let marker = match change.kind {
                ChangeKind::Commit => "◆",
                ChangeKind::Branch => "⎇",
                ChangeKind::Merge => "⇄",
            };
            Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(palette.accent)),
                Span::styled(change.message, Style::default().fg(palette.text)),
                Span::styled(
                    format!("  {} {}", change.user, change.time),
                    Style::default().fg(palette.dim),
                ),
            ])
        })
        .collect();
    let changes = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Recent Changes ")
            .border_style(Style::default().fg(palette.dim)),
    );
    frame.render_widget(changes, area);
}
