use thiserror::Error;

/// Failures raised by the quiz core. A wrong planet on a slot is an outcome,
/// not an error; see [`DropOutcome`](super::game::DropOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("no planet named '{0}' in this quiz")]
    UnknownPlanet(String),

    #[error("a quiz needs at least one planet")]
    EmptyCatalog,

    #[error("planet name '{0}' is listed more than once")]
    DuplicateName(String),

    #[error("planets '{first}' and '{second}' share order {order}")]
    DuplicateOrder {
        order: u32,
        first: String,
        second: String,
    },

    #[error("'{0}' is reserved for the decorative slot")]
    ReservedName(String),
}
