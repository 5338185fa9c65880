use crate::app::action::Action;
use crate::app::event::{AppEvent, TimerGeneration};
use crate::app::state::*;
use crate::quiz::{DropOutcome, Phase};
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::{debug, warn};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::TimerTick {
            generation,
            elapsed_secs,
        } => {
            handle_tick(state, generation, elapsed_secs);
            vec![]
        }
        AppEvent::InputClosed => {
            warn!("terminal input closed, shutting down");
            vec![Action::Quit]
        }
    }
}

fn handle_tick(state: &mut AppState, generation: TimerGeneration, elapsed_secs: u64) {
    if state.active_timer != Some(generation) {
        debug!(generation, "dropping tick from a stopped timer");
        return;
    }
    if state.quiz.record_elapsed(elapsed_secs) {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.quiz.phase() {
        Phase::Intro => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => start_game(state),
            KeyCode::Esc | KeyCode::Char('q') => vec![Action::Quit],
            _ => vec![],
        },
        Phase::Won => match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => reset_game(state),
            KeyCode::Esc | KeyCode::Char('q') => vec![Action::Quit],
            _ => vec![],
        },
        Phase::Playing => handle_playing_key(state, key),
    }
}

fn handle_playing_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let carrying = state.is_carrying();
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            if carrying {
                state.move_carry_target(false);
            } else {
                state.move_tray_cursor(false);
            }
            vec![]
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if carrying {
                state.move_carry_target(true);
            } else {
                state.move_tray_cursor(true);
            }
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if carrying {
                match state.drag.take() {
                    Some(drag) => release(state, drag),
                    None => vec![],
                }
            } else {
                pick_up_selected(state);
                vec![]
            }
        }
        KeyCode::Esc => {
            if carrying {
                state.drag = None;
                vec![]
            } else {
                vec![Action::Quit]
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => reset_game(state),
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn pick_up_selected(state: &mut AppState) {
    let Some(planet) = state.quiz.planets().get(state.tray_cursor) else {
        return;
    };
    let name = planet.name.clone();
    let target = Some(state.first_open_slot().unwrap_or(0));
    state.drag = Some(DragState {
        planet: name,
        source: DragSource::Keyboard,
        column: 0,
        row: 0,
        target,
    });
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    let (column, row) = (mouse.column, mouse.row);
    let viewport = state.viewport;
    let count = state.quiz.planets().len();

    match state.quiz.phase() {
        Phase::Intro => {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                && layout::button_at(viewport, column, row)
            {
                return start_game(state);
            }
            vec![]
        }
        Phase::Won => {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                && layout::button_at(viewport, column, row)
            {
                return reset_game(state);
            }
            vec![]
        }
        Phase::Playing => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = layout::tile_at(viewport, count, column, row) {
                    let name = state.quiz.planets()[index].name.clone();
                    state.tray_cursor = index;
                    state.drag = Some(DragState {
                        planet: name,
                        source: DragSource::Mouse,
                        column,
                        row,
                        target: None,
                    });
                    state.dirty = true;
                }
                vec![]
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(drag) = state.drag.as_mut() {
                    if drag.source == DragSource::Mouse {
                        drag.column = column;
                        drag.row = row;
                        drag.target = layout::slot_at(viewport, count, column, row);
                        state.dirty = true;
                    }
                }
                vec![]
            }
            MouseEventKind::Up(MouseButton::Left) => {
                match state.drag.take() {
                    Some(mut drag) if drag.source == DragSource::Mouse => {
                        drag.target = layout::slot_at(viewport, count, column, row);
                        release(state, drag)
                    }
                    other => {
                        state.drag = other;
                        vec![]
                    }
                }
            }
            _ => vec![],
        },
    }
}

/// Drop a picked-up tile on its current target. Anything but a correct match
/// leaves the quiz untouched and the tile returns to the tray.
fn release(state: &mut AppState, drag: DragState) -> Vec<Action> {
    state.dirty = true;
    let Some(index) = drag.target else {
        debug!(planet = %drag.planet, "released outside the placeholders");
        return vec![];
    };
    let Some(target) = state.quiz.slots().get(index).map(|p| p.name.clone()) else {
        return vec![];
    };

    match state.quiz.submit_drop(&drag.planet, &target) {
        Ok(DropOutcome::Won) => vec![Action::StopTimer],
        Ok(DropOutcome::Placed) => {
            advance_tray_cursor(state);
            vec![]
        }
        Ok(_) => vec![],
        Err(e) => {
            warn!(error = %e, "drop failed");
            vec![]
        }
    }
}

/// After a placement, move the tray cursor to the next unsolved tile.
fn advance_tray_cursor(state: &mut AppState) {
    let planets = state.quiz.planets();
    let len = planets.len();
    if let Some(next) = (1..=len)
        .map(|offset| (state.tray_cursor + offset) % len)
        .find(|&i| !planets[i].solved)
    {
        state.tray_cursor = next;
    }
}

fn start_game(state: &mut AppState) -> Vec<Action> {
    if state.quiz.start_game() {
        state.clear_interaction();
        vec![Action::StartTimer]
    } else {
        vec![]
    }
}

fn reset_game(state: &mut AppState) -> Vec<Action> {
    state.quiz.reset_game();
    state.clear_interaction();
    vec![Action::StartTimer]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::planet::default_catalog;
    use crate::quiz::QuizGame;
    use crossterm::event::KeyEventState;

    const SOLAR_ORDER: [&str; 8] = [
        "mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune",
    ];

    fn screen() -> Rect {
        Rect::new(0, 0, 90, 30)
    }

    fn new_state() -> AppState {
        AppState::new(QuizGame::new(default_catalog()).unwrap(), screen())
    }

    fn playing_state() -> AppState {
        let mut state = new_state();
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(actions, vec![Action::StartTimer]);
        state.active_timer = Some(1);
        state
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn center(r: Rect) -> (u16, u16) {
        (r.x + r.width / 2, r.y + r.height / 2)
    }

    fn tile_center(state: &AppState, name: &str) -> (u16, u16) {
        let index = state.quiz.planets().iter().position(|p| p.name == name).unwrap();
        center(layout::tile_rects(screen(), 8)[index])
    }

    fn slot_center(state: &AppState, name: &str) -> (u16, u16) {
        let index = state.quiz.slots().iter().position(|p| p.name == name).unwrap();
        center(layout::board_rects(screen(), 8).slots[index])
    }

    /// Press on `dragged`'s tile, move, release over `target`'s placeholder.
    fn drag_drop(state: &mut AppState, dragged: &str, target: &str) -> Vec<Action> {
        let (fx, fy) = tile_center(state, dragged);
        let (tx, ty) = slot_center(state, target);
        let mut actions = handle_event(state, mouse(MouseEventKind::Down(MouseButton::Left), fx, fy));
        actions.extend(handle_event(state, mouse(MouseEventKind::Drag(MouseButton::Left), tx, ty)));
        actions.extend(handle_event(state, mouse(MouseEventKind::Up(MouseButton::Left), tx, ty)));
        actions
    }

    #[test]
    fn test_enter_starts_game_once() {
        let mut state = playing_state();
        assert_eq!(state.quiz.phase(), Phase::Playing);
        // Enter while playing picks a tile up instead of restarting.
        assert!(handle_event(&mut state, key(KeyCode::Enter)).is_empty());
        assert!(state.is_carrying());
    }

    #[test]
    fn test_click_start_button() {
        let mut state = new_state();
        let (x, y) = center(layout::overlay_layout(screen()).button);
        let actions = handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), x, y));
        assert_eq!(actions, vec![Action::StartTimer]);
        assert_eq!(state.quiz.phase(), Phase::Playing);
    }

    #[test]
    fn test_drag_drop_correct_planet() {
        let mut state = playing_state();
        let actions = drag_drop(&mut state, "venus", "venus");
        assert!(actions.is_empty());
        assert!(state.quiz.planet("venus").unwrap().solved);
        assert_eq!(state.quiz.solved_count(), 1);
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_drag_drop_mismatch() {
        let mut state = playing_state();
        drag_drop(&mut state, "mars", "venus");
        assert_eq!(state.quiz.solved_count(), 0);
        assert_eq!(state.quiz.phase(), Phase::Playing);
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_drag_hover_marks_target() {
        let mut state = playing_state();
        let (fx, fy) = tile_center(&state, "earth");
        let (tx, ty) = slot_center(&state, "earth");
        handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), fx, fy));
        handle_event(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), tx, ty));
        let drag = state.drag.as_ref().unwrap();
        assert_eq!(drag.planet, "earth");
        assert_eq!(drag.target, Some(2));
    }

    #[test]
    fn test_release_on_sun_is_ignored() {
        let mut state = playing_state();
        let (fx, fy) = tile_center(&state, "mercury");
        let (sx, sy) = center(layout::board_rects(screen(), 8).sun);
        handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), fx, fy));
        handle_event(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), sx, sy));
        assert_eq!(state.quiz.solved_count(), 0);
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut state = playing_state();
        let (tx, ty) = slot_center(&state, "venus");
        let actions = handle_event(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), tx, ty));
        assert!(actions.is_empty());
        assert_eq!(state.quiz.solved_count(), 0);
    }

    #[test]
    fn test_repeat_drop_is_noop() {
        let mut state = playing_state();
        drag_drop(&mut state, "venus", "venus");
        drag_drop(&mut state, "venus", "venus");
        assert_eq!(state.quiz.solved_count(), 1);
    }

    #[test]
    fn test_full_game_stops_timer() {
        let mut state = playing_state();
        let mut last = Vec::new();
        for name in SOLAR_ORDER {
            last = drag_drop(&mut state, name, name);
        }
        assert_eq!(last, vec![Action::StopTimer]);
        assert_eq!(state.quiz.phase(), Phase::Won);
    }

    #[test]
    fn test_keyboard_carry_and_drop() {
        let mut state = playing_state();
        // Tray starts on venus; carried tiles aim at the first open slot (mercury).
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.drag.as_ref().unwrap().target, Some(0));
        handle_event(&mut state, key(KeyCode::Right));
        handle_event(&mut state, key(KeyCode::Enter));
        assert!(state.quiz.planet("venus").unwrap().solved);
        assert!(!state.is_carrying());
        // Cursor moved on to the next unsolved tile.
        assert_eq!(state.tray_cursor, 1);
    }

    #[test]
    fn test_keyboard_escape_cancels_carry() {
        let mut state = playing_state();
        handle_event(&mut state, key(KeyCode::Enter));
        assert!(handle_event(&mut state, key(KeyCode::Esc)).is_empty());
        assert!(state.drag.is_none());
        assert_eq!(handle_event(&mut state, key(KeyCode::Esc)), vec![Action::Quit]);
    }

    #[test]
    fn test_reset_after_win() {
        let mut state = playing_state();
        for name in SOLAR_ORDER {
            drag_drop(&mut state, name, name);
        }
        let actions = handle_event(&mut state, key(KeyCode::Char('r')));
        assert_eq!(actions, vec![Action::StartTimer]);
        assert_eq!(state.quiz.phase(), Phase::Playing);
        assert_eq!(state.quiz.solved_count(), 0);
        assert_eq!(state.quiz.elapsed_secs(), 0);
    }

    #[test]
    fn test_reset_mid_game() {
        let mut state = playing_state();
        drag_drop(&mut state, "saturn", "saturn");
        let actions = handle_event(&mut state, key(KeyCode::Char('r')));
        assert_eq!(actions, vec![Action::StartTimer]);
        assert_eq!(state.quiz.solved_count(), 0);
    }

    #[test]
    fn test_ticks_update_elapsed() {
        let mut state = playing_state();
        handle_event(
            &mut state,
            AppEvent::TimerTick {
                generation: 1,
                elapsed_secs: 4,
            },
        );
        assert_eq!(state.quiz.elapsed_secs(), 4);
    }

    #[test]
    fn test_stale_ticks_dropped() {
        let mut state = playing_state();
        handle_event(
            &mut state,
            AppEvent::TimerTick {
                generation: 0,
                elapsed_secs: 9,
            },
        );
        assert_eq!(state.quiz.elapsed_secs(), 0);

        state.active_timer = None;
        handle_event(
            &mut state,
            AppEvent::TimerTick {
                generation: 1,
                elapsed_secs: 9,
            },
        );
        assert_eq!(state.quiz.elapsed_secs(), 0);
    }

    #[test]
    fn test_ctrl_c_quits_in_any_phase() {
        let mut state = new_state();
        let event = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, event), vec![Action::Quit]);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut state = new_state();
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(120, 40)));
        assert_eq!(state.viewport, Rect::new(0, 0, 120, 40));
    }

    #[test]
    fn test_input_closed_quits_from_any_phase() {
        let mut state = new_state();
        assert_eq!(handle_event(&mut state, AppEvent::InputClosed), vec![Action::Quit]);

        let mut state = playing_state();
        assert_eq!(handle_event(&mut state, AppEvent::InputClosed), vec![Action::Quit]);
    }
}
