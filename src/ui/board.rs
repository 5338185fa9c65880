//! The sun followed by one placeholder per planet, in slot order.

use crate::app::state::{AppState, SlotLook};
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::truncate_to_width;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, screen: Rect, state: &AppState) {
    let slots = state.quiz.slots();
    let board = layout::board_rects(screen, slots.len());

    // Decorative only; never a drop target.
    let sun = Paragraph::new(vec![
        Line::from(Span::styled("☀", Theme::sun())),
        Line::from(Span::styled("Sun", Theme::sun())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::sun()),
    );
    frame.render_widget(sun, board.sun);

    for (index, (planet, rect)) in slots.iter().zip(board.slots).enumerate() {
        let look = state.slot_look(index, planet);
        let inner = rect.width.saturating_sub(2) as usize;

        let (border_style, border_type, lines) = match look {
            SlotLook::Filled => (
                Theme::border_checked(),
                Theme::border_type(),
                vec![
                    Line::from(Span::styled("●", Theme::planet(&planet.color))),
                    Line::from(Span::styled(
                        truncate_to_width(&planet.display_name(), inner),
                        Theme::planet(&planet.color),
                    )),
                ],
            ),
            SlotLook::Hovered => (
                Theme::border_hovered(),
                Theme::border_type_active(),
                vec![
                    Line::from(Span::styled("?", Theme::border_hovered())),
                    Line::from(Span::styled(format!("#{}", index + 1), Theme::placeholder())),
                ],
            ),
            SlotLook::Empty => (
                Theme::border(),
                Theme::border_type(),
                vec![
                    Line::from(Span::styled("?", Theme::placeholder())),
                    Line::from(Span::styled(format!("#{}", index + 1), Theme::placeholder())),
                ],
            ),
        };

        let slot = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        );
        frame.render_widget(slot, rect);
    }
}
