//! Mock terminal panel at the bottom of the workspace.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::theme::Palette;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let lines: Vec<Line> = app
        .shell
        .output()
        .iter()
        .map(|entry| {
            let style = if entry.starts_with("> ") {
                Style::default().fg(palette.accent)
            } else {
                Style::default().fg(palette.text)
            };
            Line::from(Span::styled(entry.as_str(), style))
        })
        .collect();

    let inner_height = chunks[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let border = if app.focus == Focus::Shell {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };
    let output = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Terminal ")
                .border_style(border),
        )
        .scroll((scroll, 0));
    frame.render_widget(output, chunks[0]);

    let prompt = if app.shell.is_executing() {
        "executing..."
    } else {
        "$"
    };
    let input = Paragraph::new(Line::from(vec![
        Span::styled(format!("{prompt} "), Style::default().fg(palette.leaf)),
        Span::styled(app.shell_input.as_str(), Style::default().fg(palette.text)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(input, chunks[1]);
}
