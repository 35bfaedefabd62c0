use thiserror::Error;

/// Errors surfaced by the engine and the environment adapter
///
/// Game events such as dying or an ignored reversal are not errors; they are
/// reported through the game state instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnakeError {
    #[error("invalid action index {index}: expected a value in 0..{count}")]
    InvalidAction { index: usize, count: usize },
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}
