//! AI assistant sidebar: message history plus the input line.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use neoncode_core_types::MessageRole;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::theme::Palette;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(area);

    let mut lines = Vec::new();
    for message in app.chat.messages() {
        let (name, color) = match message.role {
            MessageRole::Assistant => ("AI Assistant", palette.accent),
            MessageRole::User => (app.session.user().username.as_str(), palette.secondary),
        };
        lines.push(Line::from(vec![
            Span::styled(
                name.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", message.clock_label()),
                Style::default().fg(palette.dim),
            ),
        ]));
        for text_line in message.text.lines() {
            lines.push(Line::from(Span::styled(
                text_line.to_string(),
                Style::default().fg(palette.text),
            )));
        }
        lines.push(Line::default());
    }
    if app.chat.is_thinking() {
        lines.push(Line::from(Span::styled(
            "AI is thinking...",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    // Keep the tail visible in a fixed-height panel.
    let inner_height = chunks[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let history = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" AI Assistant ")
                .border_style(border_style(app, palette)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(history, chunks[0]);

    // Keep the tail of a long input visible, wide chars included.
    let budget = chunks[1].width.saturating_sub(2) as usize;
    let mut visible = app.chat_input.as_str();
    while visible.width() > budget {
        let mut chars = visible.chars();
        chars.next();
        visible = chars.as_str();
    }
    let input = Paragraph::new(visible).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Ask anything (Up: saved prompts, Ctrl+S: save) ")
            .border_style(border_style(app, palette)),
    );
    frame.render_widget(input, chunks[1]);
}

fn border_style(app: &App, palette: &Palette) -> Style {
    if app.focus == Focus::Chat {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    }
}
