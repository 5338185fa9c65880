use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const SPACE: Color = Color::Rgb(12, 14, 32);
    pub const STAR: Color = Color::Rgb(90, 96, 140);
    pub const TEXT_MUTED: Color = Color::Rgb(120, 124, 150);
    pub const ACCENT: Color = Color::Rgb(255, 196, 87);
    pub const CHECK: Color = Color::Rgb(92, 214, 140);

    pub fn background() -> Style {
        Style::default().bg(Self::SPACE)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::STAR)
    }

    pub fn border_selected() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_hovered() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn border_checked() -> Style {
        Style::default().fg(Self::CHECK)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_active() -> BorderType {
        BorderType::Thick
    }

    pub fn tile_dragging() -> Style {
        Style::default().fg(Self::TEXT_MUTED).add_modifier(Modifier::DIM)
    }

    pub fn tile_checked() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn tick() -> Style {
        Style::default().fg(Self::CHECK).add_modifier(Modifier::BOLD)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn sun() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    /// Planet colour from config (`"#rrggbb"` or a colour name).
    pub fn planet(color: &str) -> Style {
        Style::default()
            .fg(color.parse::<Color>().unwrap_or(Color::White))
            .add_modifier(Modifier::BOLD)
    }

    pub fn ghost() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn modal() -> Style {
        Style::default().fg(Color::White).bg(Color::Rgb(28, 32, 64))
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn timer() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_hint() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
