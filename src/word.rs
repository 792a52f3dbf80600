//! The `Word` value type and word-list loading.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolverError};
use crate::WORD_LENGTH;

/// A five-letter lowercase ASCII word.
///
/// Equality and ordering are exact byte comparison. The type is `Copy` so
/// candidate sets can be rebuilt each round without cloning strings.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word, requiring exactly five ASCII letters. Uppercase input
    /// is folded to lowercase; anything else is rejected.
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != WORD_LENGTH {
            return Err(SolverError::InvalidWord(s.to_string()));
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_alphabetic() {
                return Err(SolverError::InvalidWord(s.to_string()));
            }
            letters[i] = b.to_ascii_lowercase();
        }
        Ok(Self(letters))
    }

    /// The letter at position `i` as a byte in `b'a'..=b'z'`.
    pub fn letter(&self, i: usize) -> u8 {
        self.0[i]
    }

    /// The letter at position `i` as an index in `0..26`.
    pub fn letter_index(&self, i: usize) -> usize {
        (self.0[i] - b'a') as usize
    }

    pub fn bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self)
    }
}

impl TryFrom<String> for Word {
    type Error = SolverError;

    fn try_from(s: String) -> Result<Self> {
        Word::parse(&s)
    }
}

impl From<Word> for String {
    fn from(w: Word) -> String {
        w.to_string()
    }
}

impl std::str::FromStr for Word {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Word::parse(s)
    }
}

/// Keep the lines of a word list that parse as five-letter words.
///
/// Lines are trimmed and lowercased; anything that is not exactly five ASCII
/// letters is skipped. Diacritic folding is the list producer's job, not
/// ours.
fn parse_word_list(text: &str) -> Vec<Word> {
    text.lines()
        .filter_map(|line| Word::parse(line.trim()).ok())
        .collect()
}

/// Load the embedded dictionary shipped with the crate.
pub fn load_dictionary() -> Vec<Word> {
    parse_word_list(include_str!("../dictionary/wordlist.txt"))
}

/// Load a word list from a file, one word per line.
///
/// Fails with `EmptyWordList` if no usable words remain after filtering; the
/// solver never proceeds without a non-empty pool.
pub fn load_word_list(path: &Path) -> Result<Vec<Word>> {
    let text = fs::read_to_string(path)?;
    let words = parse_word_list(&text);
    if words.is_empty() {
        return Err(SolverError::EmptyWordList);
    }
    Ok(words)
}
