use crate::app::state::AppState;
use crate::quiz::Phase;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Timer is only meaningful while playing; the win modal shows the result.
    if state.quiz.phase() == Phase::Playing {
        parts.push(Span::styled(
            format!(" {} ", state.quiz.elapsed_label()),
            Theme::timer().bg(Color::DarkGray),
        ));
    }

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let hint = match state.quiz.phase() {
        Phase::Intro => "Enter start  q quit",
        Phase::Playing if state.is_carrying() => "←/→ target  Enter drop  Esc cancel",
        Phase::Playing => "←/→ select  Enter pick up  r restart  q quit",
        Phase::Won => "Enter/r try again  q quit",
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hint.width() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(format!(" {} ", hint), Theme::status_hint()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
