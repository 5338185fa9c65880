//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Everything here is a pure function of the terminal area and the planet
//! count, so the handler can ask "what is under the pointer" without keeping
//! any render-time state.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

pub struct QuizLayout {
    pub header: Rect,
    pub tray: Rect,
    pub board: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(5), // Planet tiles
            Constraint::Length(1), // Gap
            Constraint::Length(5), // Sun + placeholders
            Constraint::Min(0),    // Filler
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    QuizLayout {
        header: chunks[0],
        tray: chunks[1],
        board: chunks[3],
        status_bar: chunks[5],
    }
}

fn split_row(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count as u32)))
        .split(area)
        .to_vec()
}

/// One rect per tray tile, in tray order.
pub fn tile_rects(area: Rect, count: usize) -> Vec<Rect> {
    split_row(compute_layout(area).tray, count)
}

pub struct BoardRects {
    pub sun: Rect,
    pub slots: Vec<Rect>,
}

/// The decorative sun cell followed by one placeholder per planet, in slot
/// order.
pub fn board_rects(area: Rect, count: usize) -> BoardRects {
    let mut cells = split_row(compute_layout(area).board, count + 1);
    let sun = cells.remove(0);
    BoardRects { sun, slots: cells }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardHit {
    Sun,
    Slot(usize),
}

pub fn tile_at(area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    let pos = Position::new(column, row);
    tile_rects(area, count).iter().position(|r| r.contains(pos))
}

pub fn board_at(area: Rect, count: usize, column: u16, row: u16) -> Option<BoardHit> {
    let pos = Position::new(column, row);
    let board = board_rects(area, count);
    if board.sun.contains(pos) {
        return Some(BoardHit::Sun);
    }
    board.slots.iter().position(|r| r.contains(pos)).map(BoardHit::Slot)
}

/// Placeholder index under the pointer. The sun never counts.
pub fn slot_at(area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    match board_at(area, count, column, row)? {
        BoardHit::Slot(index) => Some(index),
        BoardHit::Sun => None,
    }
}

pub struct OverlayLayout {
    pub modal: Rect,
    pub button: Rect,
}

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 13;
const BUTTON_WIDTH: u16 = 16;
const BUTTON_HEIGHT: u16 = 3;

/// Centered modal with its single call-to-action button on the bottom rows.
pub fn overlay_layout(area: Rect) -> OverlayLayout {
    let width = MODAL_WIDTH.min(area.width);
    let height = MODAL_HEIGHT.min(area.height);
    let modal = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let button_width = BUTTON_WIDTH.min(modal.width);
    let button_height = BUTTON_HEIGHT.min(modal.height);
    let button = Rect::new(
        modal.x + (modal.width - button_width) / 2,
        (modal.y + modal.height).saturating_sub(button_height + 1).max(modal.y),
        button_width,
        button_height,
    );

    OverlayLayout { modal, button }
}

pub fn button_at(area: Rect, column: u16, row: u16) -> bool {
    overlay_layout(area).button.contains(Position::new(column, row))
}
