//! Word source for solo games
//!
//! Embeds the built-in word list at build time and picks words at random.

use once_cell::sync::Lazy;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Embedded word list, lowercase, one word or phrase per line
static WORDS_DATA: &str = include_str!("../../data/words.txt");

/// Parsed word list with blank lines and duplicates removed
static CORPUS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut words: Vec<&'static str> = Vec::new();
    for line in WORDS_DATA.lines().map(str::trim) {
        if !line.is_empty() && !words.contains(&line) {
            words.push(line);
        }
    }
    words
});

/// Supplies secret words to the engine
pub trait WordSource {
    /// Up to `count` words, ready to use as-is
    fn next_words(&mut self, count: usize) -> Vec<String>;
}

/// Random picks from the built-in word list
#[derive(Debug, Clone)]
pub struct WordBank {
    rng: StdRng,
}

impl Default for WordBank {
    fn default() -> Self {
        Self::new()
    }
}

impl WordBank {
    /// Create a word bank seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a word bank with a fixed seed (for testing/replays)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// All words the bank can produce
    pub fn words() -> &'static [&'static str] {
        &CORPUS
    }
}

impl WordSource for WordBank {
    fn next_words(&mut self, count: usize) -> Vec<String> {
        CORPUS
            .choose_multiple(&mut self.rng, count)
            .map(|w| w.to_string())
            .collect()
    }
}
