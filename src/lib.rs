//! # Entrodle
//!
//! A multithreaded Wordle assistant that picks guesses by expected
//! information gain.
//!
//! Each round, every word in the guess pool is scored by the Shannon
//! entropy of the feedback distribution it would induce over the remaining
//! candidates, and the maximizer is played. The expensive first round is
//! computed once per word list and cached on disk.

pub mod cache;
pub mod entropy;
pub mod error;
pub mod feedback;
pub mod session;
pub mod word;

pub use cache::{EntropyCache, EntropyTable, Fingerprint};
pub use entropy::{entropy, select_best_guess, Executor, RayonExecutor, SerialExecutor};
pub use error::{Result, SolverError};
pub use feedback::{Pattern, Tile};
pub use session::{filter_candidates, GuessPoolSource, Round, Session, SessionConfig, Status};
pub use word::{load_dictionary, load_word_list, Word};

/// Word length for Wordle.
pub const WORD_LENGTH: usize = 5;

/// Attempts allowed per game.
pub const MAX_ATTEMPTS: usize = 6;
