//! Quiz timer.
//!
//! Runs at most one ticker task. Each tick reports whole seconds since the
//! run started (`now - start`, not a counter), so missed ticks cannot skew
//! the display. Every run gets a fresh generation number; ticks that were
//! already queued when a run was stopped carry the old number and the event
//! handler drops them.

use crate::app::event::{AppEvent, TimerGeneration};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

struct RunningTimer {
    generation: TimerGeneration,
    started: Instant,
    handle: JoinHandle<()>,
}

pub struct TimerService {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    interval: Duration,
    next_generation: TimerGeneration,
    running: Option<RunningTimer>,
}

impl TimerService {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>, interval: Duration) -> Self {
        Self {
            event_tx,
            interval,
            next_generation: 0,
            running: None,
        }
    }

    /// Start a new run, stopping the previous one first. Must be called from
    /// within a tokio runtime.
    pub fn start(&mut self) -> TimerGeneration {
        self.stop();

        self.next_generation += 1;
        let generation = self.next_generation;
        let started = Instant::now();
        let period = self.interval;
        let tick_tx = self.event_tx.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(started + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                let elapsed_secs = started.elapsed().as_secs();
                if tick_tx
                    .send(AppEvent::TimerTick {
                        generation,
                        elapsed_secs,
                    })
                    .is_err()
                {
                    break;
                }
            }
        });

        debug!(generation, interval_ms = period.as_millis() as u64, "timer started");
        self.running = Some(RunningTimer {
            generation,
            started,
            handle,
        });
        generation
    }

    /// Stop the current run and return how long it lasted. `None` when
    /// nothing was running.
    pub fn stop(&mut self) -> Option<Duration> {
        let run = self.running.take()?;
        run.handle.abort();
        let elapsed = run.started.elapsed();
        debug!(
            generation = run.generation,
            elapsed_ms = elapsed.as_millis() as u64,
            "timer stopped"
        );
        Some(elapsed)
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Generation of the active run, if any.
    pub fn generation(&self) -> Option<TimerGeneration> {
        self.running.as_ref().map(|run| run.generation)
    }
}

impl Drop for TimerService {
    fn drop(&mut self) {
        self.stop();
    }
}
