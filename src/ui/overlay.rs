//! Intro and winner modals.

use crate::app::state::AppState;
use crate::quiz::Phase;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, screen: Rect, state: &AppState) {
    let (title, body, button) = match state.quiz.phase() {
        Phase::Intro => (
            "Planet quiz".to_string(),
            vec![
                "Drag the planets in the correct order as fast as you can!".to_string(),
                String::new(),
                "Mouse: drag a tile onto its placeholder.".to_string(),
                "Keys: ←/→ choose, Enter pick up and drop, Esc cancel.".to_string(),
            ],
            "Let's go!",
        ),
        Phase::Won => (
            win_title(state),
            vec![
                "You are a proper clever clogs!".to_string(),
                "Why not challenge a friend and see if they are as smart as you?".to_string(),
            ],
            "Try again",
        ),
        Phase::Playing => return,
    };

    let overlay = layout::overlay_layout(screen);
    frame.render_widget(Clear, overlay.modal);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Theme::title())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(Theme::border_type_active())
        .border_style(Theme::border_hovered())
        .style(Theme::modal());

    let text: Vec<Line> = std::iter::once(Line::default())
        .chain(body.into_iter().map(Line::from))
        .collect();
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, overlay.modal);

    let button = Paragraph::new(vec![Line::default(), Line::from(button)])
        .alignment(Alignment::Center)
        .style(Theme::button());
    frame.render_widget(button, overlay.button);
}

fn win_title(state: &AppState) -> String {
    match state.quiz.final_time() {
        Some(time) => format!("Well done, you won in {:.2} seconds", time.as_secs_f64()),
        None => format!("Well done, you won in {}", state.quiz.elapsed_label()),
    }
}
