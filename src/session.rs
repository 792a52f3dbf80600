//! Candidate filtering and the per-game session state machine.

use crate::cache::EntropyTable;
use crate::entropy::{select_best_guess, Executor};
use crate::error::{Result, SolverError};
use crate::feedback::Pattern;
use crate::word::Word;
use crate::MAX_ATTEMPTS;

/// Keep exactly the candidates whose feedback against `guess` would be
/// `pattern`. Pure and non-mutating; an empty result means the observed
/// feedback contradicts every remaining word and the session must end.
pub fn filter_candidates(guess: Word, pattern: Pattern, candidates: &[Word]) -> Vec<Word> {
    candidates
        .iter()
        .copied()
        .filter(|&word| Pattern::compute(guess, word) == pattern)
        .collect()
}

/// Where guesses after round one are drawn from.
///
/// Round one always comes from the cached full-pool table. Afterwards,
/// `Candidates` guesses only words that can still be the answer, while
/// `FullList` keeps probing with the entire pool even when those words have
/// been ruled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessPoolSource {
    FullList,
    Candidates,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub max_attempts: usize,
    pub pool_source: GuessPoolSource,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            pool_source: GuessPoolSource::Candidates,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Initializing,
    AwaitingFeedback,
    Solved,
    Exhausted,
}

/// Outcome of feeding one observed pattern into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Round {
    /// Another guess was produced; keep playing.
    Continue { guess: Word, remaining: usize },
    /// The all-green pattern arrived.
    Solved { attempts: usize },
    /// Attempts ran out without solving.
    Exhausted,
}

/// One candidate-narrowing game.
///
/// `Initializing → AwaitingFeedback → {AwaitingFeedback | Solved |
/// Exhausted}`; the terminal states absorb. The candidate set is replaced,
/// never mutated, once per round and can only shrink. The full history of
/// (guess, pattern) pairs is kept for auditing.
pub struct Session {
    pool: Vec<Word>,
    candidates: Vec<Word>,
    config: SessionConfig,
    attempts_used: usize,
    current_guess: Option<Word>,
    history: Vec<(Word, Pattern)>,
    status: Status,
}

impl Session {
    pub fn new(pool: Vec<Word>, config: SessionConfig) -> Result<Self> {
        if pool.is_empty() {
            return Err(SolverError::EmptyWordList);
        }
        Ok(Self {
            candidates: pool.clone(),
            pool,
            config,
            attempts_used: 0,
            current_guess: None,
            history: Vec::new(),
            status: Status::Initializing,
        })
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    pub fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    pub fn max_attempts(&self) -> usize {
        self.config.max_attempts
    }

    pub fn current_guess(&self) -> Option<Word> {
        self.current_guess
    }

    /// The (guess, pattern) audit trail, in play order.
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    /// Issue the opening guess from the precomputed full-pool table.
    ///
    /// Only valid while `Initializing`: the terminal states absorb, and a
    /// session that is already awaiting feedback has a guess outstanding.
    pub fn first_guess(&mut self, table: &EntropyTable) -> Result<Word> {
        if self.status != Status::Initializing {
            return Err(SolverError::OutOfTurn(
                "session has already started".to_string(),
            ));
        }
        let guess = table.best().ok_or(SolverError::EmptyWordList)?;
        self.attempts_used = 1;
        self.current_guess = Some(guess);
        self.status = Status::AwaitingFeedback;
        Ok(guess)
    }

    /// Apply one observed feedback pattern for the outstanding guess.
    ///
    /// All-green resolves the session as `Solved`. Otherwise the candidates
    /// are filtered; an empty result ends the session as `Exhausted` with
    /// `EmptyCandidateSet` (feedback contradicted an earlier round, or the
    /// target is outside the pool). With candidates and attempts remaining,
    /// the next guess is selected and the session keeps awaiting feedback.
    /// Observing on a finished session returns its terminal round unchanged.
    pub fn observe<E: Executor>(&mut self, pattern: Pattern, executor: &E) -> Result<Round> {
        match self.status {
            Status::Solved => {
                return Ok(Round::Solved {
                    attempts: self.attempts_used,
                })
            }
            Status::Exhausted => return Ok(Round::Exhausted),
            Status::Initializing => {
                return Err(SolverError::OutOfTurn(
                    "no guess is outstanding yet".to_string(),
                ))
            }
            Status::AwaitingFeedback => {}
        }
        let guess = self
            .current_guess
            .ok_or_else(|| SolverError::OutOfTurn("no guess is outstanding yet".to_string()))?;

        self.history.push((guess, pattern));

        if pattern.is_solved() {
            self.status = Status::Solved;
            return Ok(Round::Solved {
                attempts: self.attempts_used,
            });
        }

        let narrowed = filter_candidates(guess, pattern, &self.candidates);
        if narrowed.is_empty() {
            self.status = Status::Exhausted;
            return Err(SolverError::EmptyCandidateSet);
        }
        self.candidates = narrowed;

        if self.attempts_used >= self.config.max_attempts {
            self.status = Status::Exhausted;
            return Ok(Round::Exhausted);
        }

        let pool: &[Word] = match self.config.pool_source {
            GuessPoolSource::FullList => &self.pool,
            GuessPoolSource::Candidates => &self.candidates,
        };
        let next = select_best_guess(pool, &self.candidates, executor)
            .ok_or(SolverError::EmptyCandidateSet)?;

        self.attempts_used += 1;
        self.current_guess = Some(next);
        Ok(Round::Continue {
            guess: next,
            remaining: self.candidates.len(),
        })
    }
}
