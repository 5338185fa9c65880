//! The quiz state machine.
//!
//! `Intro -> Playing -> Won`, with `reset_game` returning to `Playing` from any
//! phase. The solved count is always derived from the planets' `solved` flags.
//! Timer control lives with the caller: the app shell starts the ticker after
//! [`QuizGame::start_game`] / [`QuizGame::reset_game`] and stops it when a drop
//! returns [`DropOutcome::Won`].

use super::error::QuizError;
use super::planet::{Planet, SUN};
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Playing,
    Won,
}

/// Result of a drop that reached the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Not playing; nothing happened.
    Ignored,
    /// Target slot was already filled.
    AlreadySolved,
    /// Wrong planet for this slot. The tile snaps back.
    Mismatch,
    /// Correct planet, quiz not finished yet.
    Placed,
    /// Correct planet and it was the last one.
    Won,
}

#[derive(Debug, Clone)]
pub struct QuizGame {
    planets: Vec<Planet>,
    phase: Phase,
    elapsed_secs: u64,
    final_time: Option<Duration>,
}

impl QuizGame {
    /// Build a game over `planets`, kept in the given (tray) order.
    pub fn new(planets: Vec<Planet>) -> Result<Self, QuizError> {
        validate_catalog(&planets)?;
        let mut planets = planets;
        for planet in &mut planets {
            planet.solved = false;
        }
        Ok(Self {
            planets,
            phase: Phase::Intro,
            elapsed_secs: 0,
            final_time: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Planets in tray order.
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn planet(&self, name: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.name == name)
    }

    /// Planets in slot order (ascending `order`).
    pub fn slots(&self) -> Vec<&Planet> {
        let mut slots: Vec<_> = self.planets.iter().collect();
        slots.sort_by_key(|p| p.order);
        slots
    }

    pub fn solved_count(&self) -> usize {
        self.planets.iter().filter(|p| p.solved).count()
    }

    pub fn is_complete(&self) -> bool {
        self.planets.iter().all(|p| p.solved)
    }

    #[cfg(test)]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn elapsed_label(&self) -> String {
        format!("{} seconds", self.elapsed_secs)
    }

    /// Precise time of the winning run, once the timer has been stopped.
    pub fn final_time(&self) -> Option<Duration> {
        self.final_time
    }

    /// Leave the intro. Returns `false` (and changes nothing) from any other
    /// phase.
    pub fn start_game(&mut self) -> bool {
        if self.phase != Phase::Intro {
            return false;
        }
        self.phase = Phase::Playing;
        info!(planets = self.planets.len(), "quiz started");
        true
    }

    pub fn submit_drop(&mut self, dragged: &str, target: &str) -> Result<DropOutcome, QuizError> {
        if self.phase != Phase::Playing {
            return Ok(DropOutcome::Ignored);
        }

        let slot = self
            .planets
            .iter_mut()
            .find(|p| p.name == target)
            .ok_or_else(|| QuizError::UnknownPlanet(target.to_string()))?;

        if slot.solved {
            return Ok(DropOutcome::AlreadySolved);
        }
        if dragged != target {
            debug!(dragged, target, "drop rejected");
            return Ok(DropOutcome::Mismatch);
        }

        slot.solved = true;
        debug!(planet = target, solved = self.solved_count(), "planet placed");

        if self.is_complete() {
            self.phase = Phase::Won;
            info!(elapsed_secs = self.elapsed_secs, "quiz solved");
            return Ok(DropOutcome::Won);
        }
        Ok(DropOutcome::Placed)
    }

    /// Clear every placement and go straight back to `Playing`.
    pub fn reset_game(&mut self) {
        for planet in &mut self.planets {
            planet.solved = false;
        }
        self.elapsed_secs = 0;
        self.final_time = None;
        self.phase = Phase::Playing;
        info!("quiz reset");
    }

    /// Apply a timer reading. Ignored outside `Playing`, which is what keeps
    /// the displayed time frozen after a win. Returns whether it changed.
    pub fn record_elapsed(&mut self, secs: u64) -> bool {
        if self.phase != Phase::Playing || self.elapsed_secs == secs {
            return false;
        }
        self.elapsed_secs = secs;
        true
    }

    /// Capture the stopped timer's reading for the win screen. Only the first
    /// call after a win counts.
    pub fn record_final_time(&mut self, elapsed: Duration) -> bool {
        if self.phase != Phase::Won || self.final_time.is_some() {
            return false;
        }
        self.final_time = Some(elapsed);
        self.elapsed_secs = elapsed.as_secs();
        true
    }
}

fn validate_catalog(planets: &[Planet]) -> Result<(), QuizError> {
    if planets.is_empty() {
        return Err(QuizError::EmptyCatalog);
    }
    let mut names = HashSet::new();
    let mut orders: HashMap<u32, &str> = HashMap::new();
    for planet in planets {
        if planet.name.eq_ignore_ascii_case(SUN) {
            return Err(QuizError::ReservedName(planet.name.clone()));
        }
        if !names.insert(planet.name.as_str()) {
            return Err(QuizError::DuplicateName(planet.name.clone()));
        }
        if let Some(first) = orders.insert(planet.order, &planet.name) {
            return Err(QuizError::DuplicateOrder {
                order: planet.order,
                first: first.to_string(),
                second: planet.name.clone(),
            });
        }
    }
    Ok(())
}
