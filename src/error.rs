//! Centralized error types.
//!
//! The game rules themselves have no failure modes (being caught is a loss,
//! not a fault), so errors only arise at the session boundary: drawing a
//! frame through the external renderer, or driving a session that does not
//! exist.

/// Main error type for the arcade games.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
