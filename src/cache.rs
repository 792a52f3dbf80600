//! Persistent first-round entropy table.
//!
//! Scoring the full guess pool against itself is the most expensive step of
//! a session and depends only on the pool, so we do it once and keep the
//! result on disk. The table is a single versioned JSON document carrying a
//! SHA-256 fingerprint of the pool it was computed from; any mismatch, a
//! missing file, or a parse failure counts as a cache miss and triggers a
//! full recompute. The table is never repaired in place.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::entropy::{entropy, Executor};
use crate::error::{Result, SolverError};
use crate::word::Word;

/// Cache schema version. Bump on any change to the table layout.
pub const TABLE_VERSION: u32 = 1;

/// Hex SHA-256 digest over the pool words, in iteration order.
///
/// Order-sensitive on purpose: guess tie-breaking is defined by pool order,
/// so a reordered list is a different pool and must invalidate the table.
/// Concatenating the words without a separator is unambiguous because every
/// word has the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn of_pool(pool: &[Word]) -> Self {
        let mut hasher = Sha256::new();
        for word in pool {
            hasher.update(word.bytes());
        }
        let digest = hasher.finalize();
        let mut hex = String::with_capacity(digest.len() * 2);
        for byte in digest {
            hex.push_str(&format!("{:02x}", byte));
        }
        Self(hex)
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

/// One scored pool word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableEntry {
    pub word: Word,
    pub entropy: f64,
}

/// The full first-round entropy table.
///
/// Entries are stored in pool order, so taking the first strict maximum
/// reproduces the same tie-break as live selection. serde_json round-trips
/// `f64` exactly, so reloaded entropies are bit-identical to computed ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntropyTable {
    pub version: u32,
    pub fingerprint: String,
    pub entries: Vec<TableEntry>,
}

impl EntropyTable {
    /// The highest-entropy word, ties broken by earliest pool position.
    pub fn best(&self) -> Option<Word> {
        let mut best: Option<&TableEntry> = None;
        for entry in &self.entries {
            match best {
                Some(top) if entry.entropy <= top.entropy => {}
                _ => best = Some(entry),
            }
        }
        best.map(|entry| entry.word)
    }

    /// The top `n` entries by entropy, descending; equal entropies keep
    /// their pool order.
    pub fn top(&self, n: usize) -> Vec<&TableEntry> {
        let mut ranked: Vec<&TableEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| {
            b.entropy
                .partial_cmp(&a.entropy)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(n);
        ranked
    }

    pub fn lookup(&self, word: Word) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.entropy)
    }
}

/// Score every pool word against the full pool (round one: candidates equal
/// the pool) using the given executor.
pub fn compute_table<E: Executor>(pool: &[Word], executor: &E) -> EntropyTable {
    let fingerprint = Fingerprint::of_pool(pool);
    let scores = executor.score_pool(pool, pool);
    let entries = pool
        .iter()
        .zip(scores)
        .map(|(&word, entropy)| TableEntry { word, entropy })
        .collect();
    EntropyTable {
        version: TABLE_VERSION,
        fingerprint: fingerprint.0,
        entries,
    }
}

/// Disk-backed store for the first-round entropy table.
pub struct EntropyCache {
    path: PathBuf,
}

impl EntropyCache {
    pub const DEFAULT_FILE: &'static str = "initial_entropy.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the table for `pool`, loading it from disk when the stored
    /// fingerprint matches and recomputing (then rewriting) otherwise.
    pub fn get_or_compute<E: Executor>(
        &self,
        pool: &[Word],
        executor: &E,
    ) -> Result<EntropyTable> {
        let fingerprint = Fingerprint::of_pool(pool);
        match self.load(&fingerprint) {
            Ok(table) => Ok(table),
            Err(SolverError::CacheUnavailable(_)) => {
                let table = compute_table(pool, executor);
                self.store(&table)?;
                Ok(table)
            }
            Err(err) => Err(err),
        }
    }

    /// Load the stored table, requiring its fingerprint to match.
    ///
    /// Every failure mode (missing file, unparsable JSON, wrong schema
    /// version, stale fingerprint) maps to `CacheUnavailable`; a torn table
    /// is a miss, never partial data.
    pub fn load(&self, expected: &Fingerprint) -> Result<EntropyTable> {
        let text = fs::read_to_string(&self.path).map_err(|err| {
            SolverError::CacheUnavailable(format!("{}: {}", self.path.display(), err))
        })?;
        let table: EntropyTable = serde_json::from_str(&text).map_err(|err| {
            SolverError::CacheUnavailable(format!("{}: {}", self.path.display(), err))
        })?;
        if table.version != TABLE_VERSION {
            return Err(SolverError::CacheUnavailable(format!(
                "schema version {} (wanted {})",
                table.version, TABLE_VERSION
            )));
        }
        if table.fingerprint != expected.as_hex() {
            return Err(SolverError::CacheUnavailable(
                "pool fingerprint changed".to_string(),
            ));
        }
        Ok(table)
    }

    /// Write the table atomically: serialize to a sibling temp file, then
    /// rename over the destination.
    pub fn store(&self, table: &EntropyTable) -> Result<()> {
        let json = serde_json::to_string(table).map_err(|err| {
            SolverError::CacheUnavailable(format!("serializing table: {}", err))
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
