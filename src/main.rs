mod app;
mod config;
mod logging;
mod quiz;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::quiz::timer::TimerService;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event as CEvent, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::{Stream, StreamExt};
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config and build the quiz before touching the terminal
    let cfg = config::load_config()?;
    if let Some(path) = logging::init(&cfg.logging)? {
        tracing::debug!(path = %path.display(), "logging to file");
    }
    let quiz = config::build_game(&cfg)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, quiz).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "planet-quiz exited with an error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    quiz: quiz::QuizGame,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let size = terminal.size()?;
    let mut state = AppState::new(quiz, Rect::new(0, 0, size.width, size.height));
    let mut timer = TimerService::new(event_tx.clone(), cfg.timer.tick_interval());

    // Spawn terminal input task. The timer keeps its own sender, so the
    // channel never closes on its own; the task reports the end of input.
    tokio::spawn(forward_input(EventStream::new(), event_tx));

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        let actions = handler::handle_event(&mut state, event);
        for action in actions {
            dispatch(&mut state, &mut timer, action);
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    if timer.is_running() {
        tracing::debug!(generation = ?timer.generation(), "stopping timer on exit");
        timer.stop();
    }
    Ok(())
}

/// Forward terminal events to the app until the stream ends or fails, then
/// send `InputClosed` so the event loop can shut down.
async fn forward_input<S>(events: S, tx: mpsc::UnboundedSender<AppEvent>)
where
    S: Stream<Item = io::Result<CEvent>>,
{
    let mut events = std::pin::pin!(events);
    loop {
        match events.next().await {
            Some(Ok(event)) => {
                if tx.send(AppEvent::Terminal(event)).is_err() {
                    return;
                }
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "terminal input stream failed");
                break;
            }
            None => break,
        }
    }
    let _ = tx.send(AppEvent::InputClosed);
}

/// Carry out one side effect requested by the handler.
fn dispatch(state: &mut AppState, timer: &mut TimerService, action: Action) {
    match action {
        Action::StartTimer => {
            state.active_timer = Some(timer.start());
        }
        Action::StopTimer => {
            state.active_timer = None;
            if let Some(elapsed) = timer.stop() {
                state.quiz.record_final_time(elapsed);
                state.dirty = true;
            }
        }
        Action::Quit => {
            tracing::info!("quit requested");
            state.should_quit = true;
        }
    }
}
