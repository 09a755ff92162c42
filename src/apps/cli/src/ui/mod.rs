//! TUI interface module
//!
//! Build terminal user interface using ratatui

pub mod chat;
pub mod collab;
pub mod editor;
pub mod learning;
pub mod shell;
pub mod visualizer;
pub mod voice;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;

use crate::app::{App, Focus, Overlay};
use crate::theme::Palette;

/// Initialize terminal
pub fn init_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.session.theme());
    let area = frame.area();

    let mut rows = vec![Constraint::Min(8)];
    if app.session.terminal_open() {
        rows.push(Constraint::Length(12));
    }
    rows.push(Constraint::Length(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows)
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(44)])
        .split(chunks[0]);

    editor::draw(frame, main[0], app, &palette);
    if app.session.multiplayer_mode() {
        collab::draw(frame, main[1], app, &palette);
    } else {
        chat::draw(frame, main[1], app, &palette);
    }

    if app.session.terminal_open() {
        shell::draw(frame, chunks[1], app, &palette);
    }
    draw_status_bar(frame, chunks[chunks.len() - 1], app, &palette);

    match app.overlay {
        Overlay::Debug => visualizer::draw(frame, centered(area, 80, 80), app, &palette),
        Overlay::Learning => learning::draw(frame, centered(area, 70, 80), app, &palette),
        Overlay::Voice => voice::draw(frame, centered(area, 50, 40), app, &palette),
        Overlay::None => {}
    }
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focus = match app.focus {
        Focus::Chat => "chat",
        Focus::Editor => "editor",
        Focus::Shell => "terminal",
        Focus::Collab => "team",
    };
    let sound = if app.session.sound_playing() {
        format!("{} ♪", app.session.sound_theme().label())
    } else {
        app.session.sound_theme().label().to_string()
    };
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.session.user().username),
            Style::default().fg(palette.accent),
        ),
        Span::styled(
            format!("[{}] {} | {}", focus, app.session.theme().label(), sound),
            Style::default().fg(palette.dim),
        ),
    ];
    if let Some(ref notice) = app.notice {
        spans.push(Span::styled(
            format!("  {notice}"),
            Style::default().fg(palette.highlight),
        ));
    }
    // Presentation mode keeps the bar clean for screen sharing.
    if !app.session.presentation_mode() {
        spans.push(Span::styled(
            "  Tab:focus F2:voice F3:debug F4:learn F5:team F6:theme F9:present Ctrl+T:term Ctrl+Q:quit",
            Style::default().fg(palette.dim),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Centered sub-rect sized by percentage of the parent.
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
