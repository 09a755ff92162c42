//! Voice command overlay. A typed transcript stands in for speech.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use neoncode_core::voice::VoicePhase;

use crate::app::App;
use crate::theme::Palette;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if area.width < 4 || area.height < 4 {
        return;
    }
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    match app.voice.phase() {
        VoicePhase::Idle => {
            lines.push(Line::from(Span::styled(
                "Press Enter to start listening",
                Style::default().fg(palette.text),
            )));
        }
        VoicePhase::Listening => {
            lines.push(Line::from(Span::styled(
                "● Listening... type your command, Enter to send",
                Style::default()
                    .fg(palette.secondary)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("\u{201c}{}\u{201d}", app.voice.transcript()),
                Style::default().fg(palette.accent),
            )));
        }
        VoicePhase::Processing => {
            lines.push(Line::from(Span::styled(
                "Processing command...",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        VoicePhase::Responded => {
            if let Some(outcome) = app.voice.outcome() {
                let color = if outcome.success {
                    palette.leaf
                } else {
                    palette.secondary
                };
                lines.push(Line::from(Span::styled(
                    outcome.response,
                    Style::default().fg(color),
                )));
            }
        }
    }
    lines.push(Line::default());
    let feedback = if app.voice.feedback_enabled() {
        "voice feedback on"
    } else {
        "voice feedback off"
    };
    lines.push(Line::from(Span::styled(
        format!("{feedback}  Ctrl+F:toggle  Esc:close"),
        Style::default().fg(palette.dim),
    )));

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Voice Command ")
            .border_style(Style::default().fg(palette.accent)),
    );
    frame.render_widget(panel, area);
}
