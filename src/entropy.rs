//! Entropy scoring and best-guess selection.
//!
//! The expected information gain of a guess is the Shannon entropy of the
//! distribution of feedback patterns it induces over the current candidate
//! set. Each round we score every word in the guess pool and keep the
//! maximizer.

use rayon::prelude::*;

use crate::feedback::Pattern;
use crate::word::Word;

/// Expected information gain, in bits, of playing `guess` against a
/// uniformly distributed target drawn from `candidates`.
///
/// Partitions the candidates by feedback pattern and computes
/// `-Σ p·log2(p)` over the non-empty groups. Defined as 0 when one or zero
/// candidates remain: there is nothing left to learn. The result always
/// lies in `[0, log2(|candidates|)]`.
pub fn entropy(guess: Word, candidates: &[Word]) -> f64 {
    let n = candidates.len() as f64;
    if candidates.len() <= 1 {
        return 0.0;
    }

    let mut counts = [0u32; Pattern::SPACE];
    for &candidate in candidates {
        counts[Pattern::compute(guess, candidate).as_index()] += 1;
    }

    let mut bits = 0.0;
    for &count in &counts {
        if count > 0 {
            let p = count as f64 / n;
            bits -= p * p.log2();
        }
    }
    bits
}

/// How the per-guess entropy evaluations are scheduled.
///
/// Each unit of work is pure and reads the candidate set immutably, so
/// implementations need no locking; they only decide how the guess dimension
/// is partitioned. `score_pool` must return one entropy per pool word, in
/// pool order, and only once every evaluation has completed.
pub trait Executor: Sync {
    fn score_pool(&self, pool: &[Word], candidates: &[Word]) -> Vec<f64>;
}

/// Production executor: fan the guess pool out across rayon's thread pool
/// and collect in order.
#[derive(Debug, Default, Clone, Copy)]
pub struct RayonExecutor;

impl Executor for RayonExecutor {
    fn score_pool(&self, pool: &[Word], candidates: &[Word]) -> Vec<f64> {
        pool.par_iter()
            .map(|&guess| entropy(guess, candidates))
            .collect()
    }
}

/// Single-threaded executor. Selection results must be identical to the
/// parallel executor's for any pool and candidate set.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialExecutor;

impl Executor for SerialExecutor {
    fn score_pool(&self, pool: &[Word], candidates: &[Word]) -> Vec<f64> {
        pool.iter()
            .map(|&guess| entropy(guess, candidates))
            .collect()
    }
}

/// Pick the pool word with maximum entropy against the candidate set.
///
/// Ties go to the earliest pool position, so the choice is a pure function
/// of (pool order, candidates) no matter how the executor partitions the
/// work. Returns `None` only for an empty pool.
pub fn select_best_guess<E: Executor>(
    pool: &[Word],
    candidates: &[Word],
    executor: &E,
) -> Option<Word> {
    let scores = executor.score_pool(pool, candidates);

    let mut best: Option<(usize, f64)> = None;
    for (i, &bits) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if bits <= top => {}
            _ => best = Some((i, bits)),
        }
    }
    best.map(|(i, _)| pool[i])
}
