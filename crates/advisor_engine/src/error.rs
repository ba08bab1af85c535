//! Error types for the move advisor engine
//!
//! Covers position parsing, move application against the rules provider,
//! search invariant violations and configuration problems. Legitimate game
//! states (game over, wrong turn, no legal moves) are not errors; they are
//! reported through [`crate::api::Recommendation`].

use thiserror::Error;

/// Errors that can occur in the engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Position string could not be turned into a legal position
    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Move is not legal in the current position
    #[error("Illegal move {mv} in the current position")]
    IllegalMove { mv: String },

    /// Undo requested without a matching apply
    #[error("Cannot undo: no move has been applied")]
    EmptyHistory,

    /// Search recursed past the configured ply ceiling
    #[error("Search exceeded the ply limit of {limit} (reached ply {ply})")]
    PlyLimitExceeded { ply: usize, limit: usize },

    /// Search configuration cannot be used for the requested depth
    #[error("Invalid search configuration: {message}")]
    InvalidConfig { message: String },

    /// Search algorithm error - logic error detected during search
    #[error("Search algorithm error: {message}")]
    SearchError { message: String },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
