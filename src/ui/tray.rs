//! The row of draggable planet tiles, in tray order.

use crate::app::state::{AppState, TileLook};
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::truncate_to_width;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// `screen` is the whole terminal area; tile positions come from the shared
/// layout so they match mouse hit-testing.
pub fn render(frame: &mut Frame, screen: Rect, state: &AppState) {
    let planets = state.quiz.planets();
    let rects = layout::tile_rects(screen, planets.len());

    for (index, (planet, rect)) in planets.iter().zip(rects).enumerate() {
        let look = state.tile_look(index, planet);
        let (border_style, border_type) = match look {
            TileLook::Selected => (Theme::border_selected(), Theme::border_type_active()),
            TileLook::Checked => (Theme::border_checked(), Theme::border_type()),
            TileLook::Dragging | TileLook::Idle => (Theme::border(), Theme::border_type()),
        };
        let name_style = match look {
            TileLook::Dragging => Theme::tile_dragging(),
            TileLook::Checked => Theme::tile_checked(),
            TileLook::Idle | TileLook::Selected => Theme::planet(&planet.color),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style);

        let mut lines = vec![Line::from(Span::styled("●", Theme::planet(&planet.color)))];
        let inner = rect.width.saturating_sub(4) as usize;
        let mut label = vec![Span::styled(
            truncate_to_width(&planet.display_name(), inner),
            name_style,
        )];
        if look == TileLook::Checked {
            label.push(Span::styled(" ✔", Theme::tick()));
        }
        lines.push(Line::from(label));

        let tile = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(tile, rect);
    }
}
