//! Centralized error types for the pursuit core.
//!
//! All fallible paths live in session construction; the tick path itself
//! operates on in-memory numeric state and cannot fail.

/// Main error type for the pursuit core.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Could not place guardian home after {attempts} attempts (separation {separation} too large for playfield)")]
    HomePlacement { attempts: usize, separation: f32 },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
