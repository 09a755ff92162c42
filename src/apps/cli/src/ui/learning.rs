//! Learning mode overlay: one tutorial step at a time.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::theme::Palette;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if area.width < 4 || area.height < 6 {
        return;
    }
    frame.render_widget(Clear, area);

    let step = app.lessons.current();
    let mut lines = vec![
        Line::from(Span::styled(
            step.title,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(step.content, Style::default().fg(palette.text))),
        Line::default(),
    ];
    for code_line in step.code.lines() {
        lines.push(Line::from(Span::styled(
            format!("  {code_line}"),
            Style::default().fg(palette.leaf),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            "Your task: ",
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(step.task, Style::default().fg(palette.text)),
    ]));
    if app.lessons.hint_shown() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                "Hint: ",
                Style::default()
                    .fg(palette.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(step.hint, Style::default().fg(palette.text)),
        ]));
    }
    lines.push(Line::default());
    let progress = if app.lessons.at_end() {
        "Completed!  Esc:close".to_string()
    } else {
        format!(
            "Step {}/{}  Right:next  Left:back  h:hint  Esc:close",
            app.lessons.index() + 1,
            app.lessons.len()
        )
    };
    lines.push(Line::from(Span::styled(
        progress,
        Style::default().fg(palette.dim),
    )));

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Learning Mode ")
            .border_style(Style::default().fg(palette.accent)),
    );
    frame.render_widget(panel, area);
}
