//! Feedback patterns: computing them and decoding user-typed tokens.
//!
//! A pattern records, for each of the five positions, whether the guessed
//! letter was in the right place (green), elsewhere in the target (yellow),
//! or absent (gray).

use std::fmt;

use crate::error::{Result, SolverError};
use crate::word::Word;
use crate::WORD_LENGTH;

/// The outcome for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Letter not in the word (or all its occurrences already claimed).
    Gray,
    /// Letter in the word but in a different position.
    Yellow,
    /// Letter in the correct position.
    Green,
}

impl Tile {
    fn bits(self) -> u16 {
        match self {
            Tile::Gray => 0b00,
            Tile::Yellow => 0b01,
            Tile::Green => 0b10,
        }
    }

    fn from_bits(bits: u16) -> Tile {
        match bits {
            0b01 => Tile::Yellow,
            0b10 => Tile::Green,
            _ => Tile::Gray,
        }
    }

    /// Parse one feedback token: full color name or single-letter alias,
    /// case-insensitive. `b` (black) is the alias for gray.
    fn from_token(token: &str) -> Option<Tile> {
        match token.to_ascii_lowercase().as_str() {
            "g" | "green" => Some(Tile::Green),
            "y" | "yellow" => Some(Tile::Yellow),
            "b" | "gray" => Some(Tile::Gray),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Tile::Green => '🟩',
            Tile::Yellow => '🟨',
            Tile::Gray => '⬛',
        }
    }
}

/// A complete feedback pattern for a five-letter guess.
///
/// Packed into a `u16` with two bits per position, most significant position
/// first: `00` gray, `01` yellow, `10` green. Position 0 occupies bits 9..8,
/// position 4 bits 1..0, so values range over `0..1024`. The all-green
/// pattern is `0b10_10_10_10_10` = 682.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u16);

impl Pattern {
    /// The unique terminal "solved" pattern: green in every position.
    pub const ALL_GREEN: Self = Self(0b10_10_10_10_10);

    /// Size of the packed encoding space (4^5). Not every value is reachable
    /// for a given guess, but the encoding places no restriction.
    pub const SPACE: usize = 1 << (2 * WORD_LENGTH);

    /// Pack five per-position tiles, position 0 most significant.
    pub fn new(tiles: [Tile; WORD_LENGTH]) -> Self {
        let mut packed: u16 = 0;
        for tile in tiles {
            packed = (packed << 2) | tile.bits();
        }
        Self(packed)
    }

    /// Compute the feedback a guess would receive against a target.
    ///
    /// Pass 1 marks greens and removes each matched target letter from
    /// further consideration. Pass 2 walks the remaining guess positions
    /// left to right and marks yellow while the letter still has an
    /// unconsumed occurrence among the non-green target letters, consuming
    /// one occurrence per match. Pure: no hidden caching anywhere.
    pub fn compute(guess: Word, target: Word) -> Self {
        let mut tiles = [Tile::Gray; WORD_LENGTH];
        let mut remaining = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess.letter(i) == target.letter(i) {
                tiles[i] = Tile::Green;
            } else {
                remaining[target.letter_index(i)] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if tiles[i] != Tile::Green {
                let idx = guess.letter_index(i);
                if remaining[idx] > 0 {
                    tiles[i] = Tile::Yellow;
                    remaining[idx] -= 1;
                }
            }
        }

        Self::new(tiles)
    }

    /// Decode a sequence of feedback tokens into a pattern.
    ///
    /// Requires exactly five tokens from {g, y, b, green, yellow, gray},
    /// case-insensitive and in position order. Splitting raw input on
    /// whitespace or commas is the caller's concern.
    pub fn decode_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        if tokens.len() != WORD_LENGTH {
            return Err(SolverError::InvalidFeedback(format!(
                "expected {} tokens, got {}",
                WORD_LENGTH,
                tokens.len()
            )));
        }
        let mut tiles = [Tile::Gray; WORD_LENGTH];
        for (i, token) in tokens.iter().enumerate() {
            let token = token.as_ref();
            tiles[i] = Tile::from_token(token).ok_or_else(|| {
                SolverError::InvalidFeedback(format!(
                    "unrecognized token {:?}: use g/green, y/yellow, b/gray",
                    token
                ))
            })?;
        }
        Ok(Self::new(tiles))
    }

    /// Unpack into per-position tiles, position 0 first.
    pub fn tiles(self) -> [Tile; WORD_LENGTH] {
        let mut tiles = [Tile::Gray; WORD_LENGTH];
        for (i, tile) in tiles.iter_mut().enumerate() {
            let shift = 2 * (WORD_LENGTH - 1 - i);
            *tile = Tile::from_bits((self.0 >> shift) & 0b11);
        }
        tiles
    }

    /// The tile at position `i`, which must be below `WORD_LENGTH`.
    pub fn tile(self, i: usize) -> Tile {
        debug_assert!(i < WORD_LENGTH, "tile position {} out of range", i);
        let shift = 2 * (WORD_LENGTH - 1 - i);
        Tile::from_bits((self.0 >> shift) & 0b11)
    }

    /// Whether this is the terminal all-green pattern.
    pub fn is_solved(self) -> bool {
        self == Self::ALL_GREEN
    }

    /// The packed value, usable as an index into `0..Pattern::SPACE`.
    pub fn as_index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in self.tiles() {
            write!(f, "{}", tile.to_char())?;
        }
        Ok(())
    }
}
