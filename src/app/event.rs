use crossterm::event::Event as CrosstermEvent;

/// Identifies one run of the quiz timer.
pub type TimerGeneration = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event (keys, mouse, resize)
    Terminal(CrosstermEvent),

    /// Elapsed-time reading from the timer run `generation`
    TimerTick {
        generation: TimerGeneration,
        elapsed_secs: u64,
    },

    /// The terminal input stream ended or failed; nothing more will arrive
    InputClosed,
}
