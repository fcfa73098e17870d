//! Screen layout: a one-line status header above the board canvas.
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, canvas::Canvas},
};
use sim_core::ShapeKind;

use super::scene::Scene;

pub const HEADER_HEIGHT: u16 = 3;

/// Numbers shown in the header.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hud {
    pub frame: u64,
    pub captured: usize,
    pub paused: bool,
}

fn split(area: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area)
}

fn board_block() -> Block<'static> {
    Block::default().borders(Borders::ALL).title(" board ")
}

/// Interior of the board panel for a terminal of the given size.
///
/// One board unit is one terminal cell.
pub fn board_area(area: Rect) -> Rect {
    let [_, board] = split(area);
    board_block().inner(board)
}

pub fn render(frame: &mut Frame, scene: &Scene, hud: &Hud) {
    let [header, board] = split(frame.area());
    render_header(frame, header, scene, hud);
    render_board(frame, board, scene);
}

fn render_header(frame: &mut Frame, area: Rect, scene: &Scene, hud: &Hud) {
    let value = Style::default().fg(Color::Yellow);
    let mut spans = vec![
        Span::raw("Frame: "),
        Span::styled(hud.frame.to_string(), value),
        Span::raw(" | Captured: "),
        Span::styled(hud.captured.to_string(), value),
        Span::raw(" | Targets: "),
        Span::styled(scene.count(ShapeKind::Target).to_string(), value),
        Span::raw(" | Actors: "),
        Span::styled(scene.count(ShapeKind::Actor).to_string(), value),
    ];
    if hud.paused {
        spans.push(Span::styled(
            " [PAUSED]",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" seeker | q: quit  p: pause "),
    );
    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, area: Rect, scene: &Scene) {
    let height = scene.height();
    let canvas = Canvas::default()
        .block(board_block())
        .marker(Marker::Dot)
        .x_bounds([0.0, scene.width()])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            for sprite in scene.sprites() {
                // Board y grows downwards, canvas y grows upwards.
                let origin = sprite.transform.origin;
                let glyph = Span::styled(sprite.glyph(), style(sprite.kind));
                ctx.print(origin.x, height - origin.y, glyph);
            }
        });
    frame.render_widget(canvas, area);
}

fn style(kind: ShapeKind) -> Style {
    match kind {
        ShapeKind::Actor => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        ShapeKind::Target => Style::default().fg(Color::Yellow),
        ShapeKind::Wanderer => Style::default().fg(Color::DarkGray),
    }
}
