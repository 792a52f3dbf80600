use entrodle::{Pattern, SolverError, Tile, Word};

fn word(s: &str) -> Word {
    Word::parse(s).expect("valid test word")
}

#[test]
fn test_self_feedback_is_all_green() {
    for s in ["crane", "fuzzy", "geese", "aabbb", "close"] {
        let pattern = Pattern::compute(word(s), word(s));
        assert!(pattern.is_solved());
        assert_eq!(pattern, Pattern::ALL_GREEN);
    }
}

#[test]
fn test_all_gray() {
    let pattern = Pattern::compute(word("quick"), word("dream"));
    assert_eq!(pattern, Pattern::new([Tile::Gray; 5]));
}

#[test]
fn test_mixed_feedback() {
    let tiles = Pattern::compute(word("crane"), word("charm")).tiles();
    assert_eq!(tiles[0], Tile::Green);
    assert_eq!(tiles[1], Tile::Yellow);
    assert_eq!(tiles[2], Tile::Green);
    assert_eq!(tiles[3], Tile::Gray);
    assert_eq!(tiles[4], Tile::Gray);
}

#[test]
fn test_all_yellow_reversal() {
    // "abcde" against "edcba": no position matches, every letter present.
    let pattern = Pattern::compute(word("abcde"), word("edcba"));
    assert_eq!(pattern, Pattern::new([Tile::Yellow; 5]));
    assert_eq!(pattern.as_index(), 0b01_01_01_01_01);
}

#[test]
fn test_duplicate_letters_guess_index_order() {
    // "aabbb" vs "ababa": the second 'a' takes the one unconsumed 'a', the
    // first non-green 'b' takes the one unconsumed 'b', the last 'b' grays.
    let tiles = Pattern::compute(word("aabbb"), word("ababa")).tiles();
    assert_eq!(
        tiles,
        [Tile::Green, Tile::Yellow, Tile::Yellow, Tile::Green, Tile::Gray]
    );
}

#[test]
fn test_duplicate_letters_in_guess() {
    let tiles = Pattern::compute(word("speed"), word("creep")).tiles();
    assert_eq!(
        tiles,
        [Tile::Gray, Tile::Yellow, Tile::Green, Tile::Green, Tile::Gray]
    );
}

#[test]
fn test_duplicate_guess_limited_target() {
    let tiles = Pattern::compute(word("geese"), word("creep")).tiles();
    assert_eq!(
        tiles,
        [Tile::Gray, Tile::Yellow, Tile::Green, Tile::Gray, Tile::Gray]
    );
}

#[test]
fn test_green_iff_position_match_and_letter_accounting() {
    let words: Vec<Word> = ["crane", "creep", "ababa", "aabbb", "geese", "those", "sores"]
        .iter()
        .map(|s| word(s))
        .collect();

    for &guess in &words {
        for &target in &words {
            let tiles = Pattern::compute(guess, target).tiles();

            for (i, &tile) in tiles.iter().enumerate() {
                assert_eq!(
                    tile == Tile::Green,
                    guess.letter(i) == target.letter(i),
                    "green must mean exact position match: {} vs {}",
                    guess,
                    target
                );
            }

            // Green + yellow marks for a letter never exceed its target count.
            for letter in b'a'..=b'z' {
                let marked = (0..5)
                    .filter(|&i| guess.letter(i) == letter && tiles[i] != Tile::Gray)
                    .count();
                let available = (0..5).filter(|&i| target.letter(i) == letter).count();
                assert!(
                    marked <= available,
                    "over-marked {} in {} vs {}",
                    letter as char,
                    guess,
                    target
                );
            }
        }
    }
}

#[test]
fn test_packed_encoding() {
    assert_eq!(Pattern::ALL_GREEN.as_index(), 682);
    assert_eq!(Pattern::new([Tile::Gray; 5]).as_index(), 0);
    // Position 0 occupies the most significant field.
    let green_first = Pattern::new([Tile::Green, Tile::Gray, Tile::Gray, Tile::Gray, Tile::Gray]);
    assert_eq!(green_first.as_index(), 0b10_00_00_00_00);
    let green_last = Pattern::new([Tile::Gray, Tile::Gray, Tile::Gray, Tile::Gray, Tile::Green]);
    assert_eq!(green_last.as_index(), 0b10);
}

#[test]
fn test_tiles_round_trip() {
    let cases = [
        [Tile::Green, Tile::Yellow, Tile::Gray, Tile::Yellow, Tile::Green],
        [Tile::Yellow; 5],
        [Tile::Gray; 5],
        [Tile::Green; 5],
    ];
    for tiles in cases {
        let pattern = Pattern::new(tiles);
        assert_eq!(pattern.tiles(), tiles);
        for (i, &tile) in tiles.iter().enumerate() {
            assert_eq!(pattern.tile(i), tile);
        }
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "out of range")]
fn test_tile_position_out_of_range_panics() {
    Pattern::ALL_GREEN.tile(5);
}

#[test]
fn test_decode_tokens() {
    let pattern = Pattern::decode_tokens(&["g", "y", "b", "b", "g"]).unwrap();
    assert_eq!(
        pattern,
        Pattern::new([Tile::Green, Tile::Yellow, Tile::Gray, Tile::Gray, Tile::Green])
    );

    // Full names and mixed case are equivalent to the aliases.
    let same = Pattern::decode_tokens(&["GREEN", "Yellow", "gray", "B", "Green"]).unwrap();
    assert_eq!(pattern, same);
}

#[test]
fn test_decode_tokens_wrong_count() {
    for tokens in [vec!["g", "y", "b", "b"], vec!["g"; 6], vec![]] {
        let err = Pattern::decode_tokens(&tokens).unwrap_err();
        assert!(matches!(err, SolverError::InvalidFeedback(_)));
    }
}

#[test]
fn test_decode_tokens_unrecognized() {
    let err = Pattern::decode_tokens(&["g", "y", "z", "b", "g"]).unwrap_err();
    assert!(matches!(err, SolverError::InvalidFeedback(_)));
    // "grey" is not in the vocabulary.
    let err = Pattern::decode_tokens(&["grey", "y", "b", "b", "g"]).unwrap_err();
    assert!(matches!(err, SolverError::InvalidFeedback(_)));
}

#[test]
fn test_word_parse() {
    assert_eq!(word("CRANE"), word("crane"));
    assert!(Word::parse("crane").is_ok());
    assert!(matches!(Word::parse("cran"), Err(SolverError::InvalidWord(_))));
    assert!(matches!(Word::parse("cranes"), Err(SolverError::InvalidWord(_))));
    assert!(matches!(Word::parse("cr4ne"), Err(SolverError::InvalidWord(_))));
    assert!(matches!(Word::parse("crané"), Err(SolverError::InvalidWord(_))));
}

#[test]
fn test_word_ordering_is_byte_order() {
    assert!(word("apple") < word("apply"));
    assert!(word("crane") < word("crate"));
    assert_eq!(word("crane").to_string(), "crane");
}
