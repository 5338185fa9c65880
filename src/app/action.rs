/// Side effects requested by the event handler, executed by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start (or restart) the timer from zero.
    StartTimer,
    /// Stop the timer and record the winning time.
    StopTimer,
    Quit,
}
