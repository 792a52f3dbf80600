//! Entrodle CLI
//!
//! Interactive assistant: prints the highest-entropy guess each round and
//! narrows the candidate set from the feedback you type back in.

use std::io::{self, BufRead, Write};
use std::path::Path;

use entrodle::cache::compute_table;
use entrodle::{
    load_dictionary, load_word_list, EntropyCache, EntropyTable, Fingerprint, Pattern,
    RayonExecutor, Round, Session, SessionConfig, SolverError, Word,
};

const USAGE: &str = "\
entrodle - entropy-driven Wordle assistant

USAGE:
    entrodle            play an interactive session
    entrodle top [N]    show the top N opening words by entropy (default 10)
    entrodle --help     show this message

During a session, answer each guess with five feedback tokens separated by
spaces or commas: g/green, y/yellow, b/gray. Example: g y b b g

The word list is read from wordlist.txt in the current directory when
present, otherwise the embedded dictionary is used. The first-round entropy
table is cached in initial_entropy.json.";

/// Prefer a wordlist.txt next to the process, fall back to the embedded
/// dictionary.
fn load_words() -> Vec<Word> {
    let path = Path::new("wordlist.txt");
    if path.exists() {
        match load_word_list(path) {
            Ok(words) => {
                println!("Loaded {} words from {}.", words.len(), path.display());
                return words;
            }
            Err(err) => {
                eprintln!("Could not use {}: {}", path.display(), err);
                std::process::exit(1);
            }
        }
    }
    let words = load_dictionary();
    println!("Loaded {} words from the embedded dictionary.", words.len());
    words
}

/// Load the cached first-round table or compute and persist it.
fn first_round_table(words: &[Word]) -> EntropyTable {
    let cache = EntropyCache::new(EntropyCache::DEFAULT_FILE);
    let fingerprint = Fingerprint::of_pool(words);
    match cache.load(&fingerprint) {
        Ok(table) => {
            println!("Loaded first-round entropy table from {}.", cache.path().display());
            table
        }
        Err(_) => {
            println!("Computing first-round entropy table; this can take a moment...");
            let table = compute_table(words, &RayonExecutor);
            match cache.store(&table) {
                Ok(()) => println!("Saved entropy table to {}.", cache.path().display()),
                Err(err) => eprintln!("Warning: could not persist entropy table: {}", err),
            }
            table
        }
    }
}

/// Read one line of feedback tokens, re-prompting until they decode.
/// Returns None on EOF.
fn read_pattern(stdin: &io::Stdin) -> Option<Pattern> {
    loop {
        print!("Feedback (e.g. g y b b g): ");
        io::stdout().flush().ok()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).ok()? == 0 {
            return None;
        }

        let cleaned = line.replace(',', " ");
        let tokens: Vec<&str> = cleaned.split_whitespace().collect();
        match Pattern::decode_tokens(&tokens) {
            Ok(pattern) => return Some(pattern),
            Err(err) => {
                println!("{}", err);
                println!("Please enter the feedback again.");
            }
        }
    }
}

fn run_interactive() {
    let words = load_words();
    let table = first_round_table(&words);

    let mut session = match Session::new(words, SessionConfig::default()) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    println!();
    println!("Answer each guess with five tokens: g=green, y=yellow, b=gray.");
    println!();

    let first = match session.first_guess(&table) {
        Ok(guess) => guess,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    println!(
        "Attempt 1/{}: {}",
        session.max_attempts(),
        first.to_string().to_uppercase()
    );

    let stdin = io::stdin();
    let executor = RayonExecutor;

    loop {
        let pattern = match read_pattern(&stdin) {
            Some(pattern) => pattern,
            None => break,
        };

        match session.observe(pattern, &executor) {
            Ok(Round::Solved { attempts }) => {
                println!("Solved in {} attempts!", attempts);
                break;
            }
            Ok(Round::Continue { guess, remaining }) => {
                println!("Remaining possible words: {}", remaining);
                println!(
                    "Attempt {}/{}: {}",
                    session.attempts_used(),
                    session.max_attempts(),
                    guess.to_string().to_uppercase()
                );
            }
            Ok(Round::Exhausted) => {
                println!("Out of attempts without solving.");
                break;
            }
            Err(SolverError::EmptyCandidateSet) => {
                println!("No possible words remaining. Please check the feedback for errors.");
                break;
            }
            Err(err) => {
                eprintln!("{}", err);
                break;
            }
        }
    }

    if !session.history().is_empty() {
        println!();
        println!("Session history:");
        for (i, (guess, pattern)) in session.history().iter().enumerate() {
            println!("  {}. {} {}", i + 1, guess.to_string().to_uppercase(), pattern);
        }
    }
}

fn run_top(n: usize) {
    let words = load_words();
    let table = first_round_table(&words);

    println!();
    println!("Top {} opening words by entropy:", n);
    for (rank, entry) in table.top(n).iter().enumerate() {
        println!(
            "{:>3}. {}  ({:.4} bits)",
            rank + 1,
            entry.word.to_string().to_uppercase(),
            entry.entropy
        );
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE);
            }
            "top" => {
                let n: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10);
                run_top(n);
            }
            _ => {
                eprintln!("Unknown command: {}", args[1]);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    } else {
        run_interactive();
    }
}
