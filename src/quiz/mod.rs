//! Quiz core: planets, the game state machine, and the elapsed-time ticker.

pub mod error;
pub mod game;
pub mod planet;
pub mod timer;

pub use game::{DropOutcome, Phase, QuizGame};
pub use planet::Planet;
