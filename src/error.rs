//! Error types shared across the crate.

use thiserror::Error;

/// Everything that can go wrong while narrowing a candidate set.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Feedback tokens were malformed or miscounted. Recoverable: the caller
    /// should re-prompt; no session state has changed.
    #[error("invalid feedback: {0}")]
    InvalidFeedback(String),

    /// A word was not exactly five lowercase ASCII letters.
    #[error("invalid word {0:?}: expected exactly 5 ASCII letters")]
    InvalidWord(String),

    /// A session operation was called in the wrong state: feedback before
    /// any guess was issued, or a new guess after the session ended.
    #[error("out of turn: {0}")]
    OutOfTurn(String),

    /// Filtering eliminated every candidate, so the observed feedback
    /// contradicts an earlier round or the target is outside the pool.
    /// Terminal for the session.
    #[error("no candidates remain consistent with the observed feedback")]
    EmptyCandidateSet,

    /// The word list produced no usable words. Fatal at startup.
    #[error("word list is empty")]
    EmptyWordList,

    /// The persisted entropy table is missing, corrupt, or stale. Non-fatal:
    /// the cache layer recomputes on this.
    #[error("entropy cache unavailable: {0}")]
    CacheUnavailable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SolverError>;
