mod board;
pub mod layout;
mod overlay;
mod status_bar;
mod theme;
mod tray;

use crate::app::state::{AppState, DragSource};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, state: &AppState) {
    let screen = frame.area();
    let quiz_layout = layout::compute_layout(screen);

    frame.render_widget(Block::default().style(Theme::background()), screen);
    render_header(frame, quiz_layout.header);
    tray::render(frame, screen, state);
    board::render(frame, screen, state);
    status_bar::render(frame, quiz_layout.status_bar, state);
    render_drag_ghost(frame, screen, state);
    overlay::render(frame, screen, state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled("✦ Planets quiz ✦", Theme::title())),
        Line::from(Span::styled(
            "Drag the planets into the correct order",
            Theme::subtitle(),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

/// Label following the pointer while a tile is dragged with the mouse.
fn render_drag_ghost(frame: &mut Frame, screen: Rect, state: &AppState) {
    let Some(drag) = state.drag.as_ref() else {
        return;
    };
    if drag.source != DragSource::Mouse {
        return;
    }
    let Some(planet) = state.quiz.planet(&drag.planet) else {
        return;
    };

    let label = format!(" {} ", planet.display_name());
    let width = (label.width() as u16).min(screen.width);
    let x = drag.column.min(screen.right().saturating_sub(width));
    let y = drag.row.min(screen.bottom().saturating_sub(1));
    let area = Rect::new(x, y, width, 1).intersection(screen);
    frame.render_widget(Paragraph::new(label).style(Theme::ghost()), area);
}

/// Cut `text` to at most `max` display columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
