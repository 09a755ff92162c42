//! Debug visualization overlay: draws one planned frame of the
//! recursion tree on a braille canvas.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Clear, Paragraph, Wrap,
    },
    Frame,
};

use neoncode_core::frame::{plan_frame, EdgeStyle, FramePlan};
use neoncode_core::trace::{FIB_EXPLANATIONS, FIB_NODES, FIB_STEPS};

use crate::app::App;
use crate::theme::Palette;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if area.width < 4 || area.height < 6 {
        return;
    }
    let Some(animator) = app.animator.as_ref() else {
        return;
    };

    frame.render_widget(Clear, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(4)])
        .split(area);

    let index = animator.index();
    let plan = plan_frame(
        &FIB_NODES,
        &FIB_STEPS[index],
        index,
        FIB_STEPS.len(),
        FIB_EXPLANATIONS.get(index).copied(),
        (400.0, 300.0),
        app.rotation,
    );

    let title = format!(
        " Debug Visualization  {}  {} speed  {} ",
        plan.step_counter,
        animator.speed().label(),
        if animator.is_playing() { "▶" } else { "⏸" },
    );
    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(palette.secondary)),
        )
        .x_bounds([0.0, plan.width])
        .y_bounds([0.0, plan.height])
        .paint(|ctx| paint_plan(ctx, &plan, palette));
    frame.render_widget(canvas, chunks[0]);

    let mut lines = Vec::new();
    if let Some(ref explanation) = plan.explanation {
        lines.push(Line::from(Span::styled(
            explanation.clone(),
            Style::default().fg(palette.text),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Space:play/pause  Left/Right:step  1/2/3:speed  Esc:close",
        Style::default().fg(palette.dim),
    )));
    let footer = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.dim)),
        );
    frame.render_widget(footer, chunks[1]);
}

fn paint_plan(ctx: &mut ratatui::widgets::canvas::Context, plan: &FramePlan, palette: &Palette) {
    // Canvas y grows upward; the plan uses screen coordinates.
    let flip = |y: f64| plan.height - y;

    for line in &plan.grid {
        ctx.draw(&CanvasLine {
            x1: line.x1,
            y1: flip(line.y1),
            x2: line.x2,
            y2: flip(line.y2),
            color: palette.dim,
        });
    }

    for edge in &plan.edges {
        match edge.style {
            EdgeStyle::Highlight => ctx.draw(&CanvasLine {
                x1: edge.x1,
                y1: flip(edge.y1),
                x2: edge.x2,
                y2: flip(edge.y2),
                color: palette.highlight,
            }),
            EdgeStyle::Gradient { from, to } => {
                // Two half-segments stand in for the gradient stroke.
                let mx = (edge.x1 + edge.x2) / 2.0;
                let my = (edge.y1 + edge.y2) / 2.0;
                ctx.draw(&CanvasLine {
                    x1: edge.x1,
                    y1: flip(edge.y1),
                    x2: mx,
                    y2: flip(my),
                    color: palette.hue(from),
                });
                ctx.draw(&CanvasLine {
                    x1: mx,
                    y1: flip(my),
                    x2: edge.x2,
                    y2: flip(edge.y2),
                    color: palette.hue(to),
                });
            }
        }
    }

    for node in &plan.nodes {
        ctx.draw(&Circle {
            x: node.x,
            y: flip(node.y),
            radius: node.radius,
            color: palette.hue(node.role.hue()),
        });
        ctx.print(
            node.x,
            flip(node.y),
            Line::from(Span::styled(
                node.label,
                Style::default().fg(palette.text),
            )),
        );
        if let Some(ref caption) = node.caption {
            ctx.print(
                node.x,
                flip(node.y + node.radius + 10.0),
                Line::from(Span::styled(
                    caption.clone(),
                    Style::default().fg(palette.highlight),
                )),
            );
        }
    }
}
