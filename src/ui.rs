//! Terminal UI rendering with ratatui

use crate::game::Game;
use crate::menu::Menu;
use crate::piece::Piece;
use crate::settings::Settings;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Total width of the centered app area
const APP_WIDTH: u16 = 58;
/// Total height of the centered app area
const APP_HEIGHT: u16 = 24;

/// Render the whole simulator screen
pub fn render(frame: &mut Frame, game: &Game, menu: &Menu, settings: &Settings) {
    let area = center_rect(frame.area(), APP_WIDTH, APP_HEIGHT);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // title
            Constraint::Length(3),  // queue
            Constraint::Length(3),  // stack
            Constraint::Length(2),  // messages
            Constraint::Min(10),    // menu
        ])
        .split(area);

    render_title(frame, layout[0]);
    render_queue(frame, layout[1], game, settings);
    render_stack(frame, layout[2], game, settings);
    render_messages(frame, layout[3], game);
    render_menu(frame, layout[4], menu, game);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::styled(
        "T E T R I S   S T A C K",
        Style::default().fg(Color::Cyan).bold(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Queue panel, front piece first
fn render_queue(frame: &mut Frame, area: Rect, game: &Game, settings: &Settings) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Next pieces (front → back) ")
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = pieces_line(&game.queue_snapshot(), settings, "queue is empty");
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), inner);
}

/// Stack panel, top piece first
fn render_stack(frame: &mut Frame, area: Rect, game: &Game, settings: &Settings) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Reserve (top → base) ")
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = pieces_line(&game.stack_snapshot(), settings, "reserve is empty");
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), inner);
}

/// Build a display line for a container snapshot
fn pieces_line(pieces: &[Piece], settings: &Settings, empty_text: &'static str) -> Line<'static> {
    if pieces.is_empty() {
        return Line::styled(empty_text, Style::default().fg(Color::DarkGray));
    }

    let mut spans = Vec::with_capacity(pieces.len() * 2);
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(piece_span(piece, settings));
    }
    Line::from(spans)
}

/// One colored cell for a piece
fn piece_span(piece: &Piece, settings: &Settings) -> Span<'static> {
    let style = Style::default().fg(piece.kind.color());
    let text = match (settings.visual.cell_style.as_str(), settings.visual.show_ids) {
        ("solid", true) => format!("█{} {}█", piece.kind.symbol(), piece.id),
        ("solid", false) => format!("█{}█", piece.kind.symbol()),
        (_, true) => format!("[{} {}]", piece.kind.symbol(), piece.id),
        (_, false) => format!("[{}]", piece.kind.symbol()),
    };
    Span::styled(text, style)
}

/// Last action and last error lines
fn render_messages(frame: &mut Frame, area: Rect, game: &Game) {
    let mut lines = Vec::new();
    if let Some(ref action) = game.last_action {
        lines.push(Line::styled(
            action.clone(),
            Style::default().fg(Color::Green),
        ));
    }
    if let Some(ref error) = game.last_error {
        lines.push(Line::styled(error.clone(), Style::default().fg(Color::Red)));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_menu(frame: &mut Frame, area: Rect, menu: &Menu, game: &Game) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));

    for (i, item) in menu.items.iter().enumerate() {
        let is_selected = i == menu.selected;
        let prefix = if is_selected { "▶ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::styled(
            format!("{}{} - {}", prefix, item.shortcut, item.label),
            style,
        ));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!(
            "played: {}   reserved used: {}",
            game.pieces_played, game.reserved_used
        ),
        Style::default().fg(Color::DarkGray),
    ));
    lines.push(Line::styled(
        "↑/↓ select | Enter confirm | 1-5 direct | 0/q quit",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Center a fixed-size rect inside the available area
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
