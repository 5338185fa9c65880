use crate::app::event::TimerGeneration;
use crate::quiz::{Phase, Planet, QuizGame};
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    Mouse,
    Keyboard,
}

/// A planet tile currently picked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    pub planet: String,
    pub source: DragSource,
    /// Last pointer position (mouse drags only).
    pub column: u16,
    pub row: u16,
    /// Placeholder (slot order index) the tile would land on if released now.
    pub target: Option<usize>,
}

/// How a tray tile should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileLook {
    Idle,
    Selected,
    Dragging,
    Checked,
}

/// How a placeholder should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLook {
    Empty,
    Hovered,
    Filled,
}

pub struct AppState {
    pub quiz: QuizGame,
    pub viewport: Rect,
    pub drag: Option<DragState>,
    pub tray_cursor: usize,
    /// Timer run whose ticks are accepted; `None` while stopped.
    pub active_timer: Option<TimerGeneration>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(quiz: QuizGame, viewport: Rect) -> Self {
        Self {
            quiz,
            viewport,
            drag: None,
            tray_cursor: 0,
            active_timer: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn dragging(&self) -> Option<&str> {
        self.drag.as_ref().map(|d| d.planet.as_str())
    }

    pub fn is_carrying(&self) -> bool {
        matches!(&self.drag, Some(d) if d.source == DragSource::Keyboard)
    }

    pub fn tile_look(&self, index: usize, planet: &Planet) -> TileLook {
        if self.dragging() == Some(planet.name.as_str()) {
            TileLook::Dragging
        } else if planet.solved {
            TileLook::Checked
        } else if self.drag.is_none()
            && self.quiz.phase() == Phase::Playing
            && index == self.tray_cursor
        {
            TileLook::Selected
        } else {
            TileLook::Idle
        }
    }

    pub fn slot_look(&self, index: usize, planet: &Planet) -> SlotLook {
        if planet.solved {
            SlotLook::Filled
        } else if self.drag.as_ref().and_then(|d| d.target) == Some(index) {
            SlotLook::Hovered
        } else {
            SlotLook::Empty
        }
    }

    pub fn status_line(&self) -> String {
        let total = self.quiz.planets().len();
        match self.quiz.phase() {
            Phase::Intro => "Press Enter to start".to_string(),
            Phase::Playing => {
                let mut s = format!("Placed: {}/{}", self.quiz.solved_count(), total);
                if let Some(name) = self.dragging() {
                    s.push_str(&format!(" | Holding {}", name));
                }
                s
            }
            Phase::Won => format!("Placed: {}/{} | Solved!", total, total),
        }
    }

    pub fn move_tray_cursor(&mut self, forward: bool) {
        let len = self.quiz.planets().len();
        if len == 0 {
            return;
        }
        self.tray_cursor = step(self.tray_cursor, len, forward);
        self.dirty = true;
    }

    /// Move the keyboard-carried tile to the neighbouring placeholder.
    pub fn move_carry_target(&mut self, forward: bool) {
        let len = self.quiz.planets().len();
        if let Some(drag) = self.drag.as_mut() {
            let current = drag.target.unwrap_or(0);
            drag.target = Some(step(current, len, forward));
            self.dirty = true;
        }
    }

    /// First placeholder still waiting for its planet.
    pub fn first_open_slot(&self) -> Option<usize> {
        self.quiz.slots().iter().position(|p| !p.solved)
    }

    /// Forget any in-flight drag and cursor positions.
    pub fn clear_interaction(&mut self) {
        self.drag = None;
        self.tray_cursor = 0;
        self.dirty = true;
    }
}

fn step(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::planet::default_catalog;

    fn state() -> AppState {
        let mut quiz = QuizGame::new(default_catalog()).unwrap();
        quiz.start_game();
        AppState::new(quiz, Rect::new(0, 0, 90, 30))
    }

    #[test]
    fn test_tile_look_follows_state() {
        let mut state = state();
        let venus = state.quiz.planets()[0].clone();
        assert_eq!(state.tile_look(0, &venus), TileLook::Selected);
        assert_eq!(state.tile_look(1, &state.quiz.planets()[1].clone()), TileLook::Idle);

        state.drag = Some(DragState {
            planet: "venus".into(),
            source: DragSource::Mouse,
            column: 0,
            row: 0,
            target: None,
        });
        assert_eq!(state.tile_look(0, &venus), TileLook::Dragging);

        state.drag = None;
        state.quiz.submit_drop("venus", "venus").unwrap();
        let venus = state.quiz.planets()[0].clone();
        assert_eq!(state.tile_look(0, &venus), TileLook::Checked);
    }

    #[test]
    fn test_slot_look_follows_state() {
        let mut state = state();
        let mercury = state.quiz.slots()[0].clone();
        assert_eq!(state.slot_look(0, &mercury), SlotLook::Empty);

        state.drag = Some(DragState {
            planet: "mars".into(),
            source: DragSource::Keyboard,
            column: 0,
            row: 0,
            target: Some(0),
        });
        assert_eq!(state.slot_look(0, &mercury), SlotLook::Hovered);

        state.drag = None;
        state.quiz.submit_drop("mercury", "mercury").unwrap();
        let mercury = state.quiz.slots()[0].clone();
        assert_eq!(state.slot_look(0, &mercury), SlotLook::Filled);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut state = state();
        state.move_tray_cursor(false);
        assert_eq!(state.tray_cursor, 7);
        state.move_tray_cursor(true);
        assert_eq!(state.tray_cursor, 0);
    }

    #[test]
    fn test_status_line() {
        let mut state = state();
        assert_eq!(state.status_line(), "Placed: 0/8");
        state.quiz.submit_drop("earth", "earth").unwrap();
        assert_eq!(state.status_line(), "Placed: 1/8");
    }

    #[test]
    fn test_first_open_slot() {
        let mut state = state();
        assert_eq!(state.first_open_slot(), Some(0));
        state.quiz.submit_drop("mercury", "mercury").unwrap();
        assert_eq!(state.first_open_slot(), Some(1));
    }
}
