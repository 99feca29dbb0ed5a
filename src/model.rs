//! Read-only game data shared by every session.

use std::collections::HashMap;

use crate::config::Config;
use crate::error::Result;
use crate::table::PatternTable;
use crate::word::{load_word_list, Word};

/// The pattern table plus lookups from words to their rows and columns.
#[derive(Debug)]
pub struct GameModel {
    table: PatternTable,
    guess_index: HashMap<Word, usize>,
    solution_index: HashMap<Word, usize>,
    /// Table row of each solution, when that solution is also an allowed guess.
    solution_rows: Vec<Option<usize>>,
}

impl GameModel {
    pub fn new(table: PatternTable) -> Self {
        let guess_index: HashMap<Word, usize> = table
            .guesses()
            .iter()
            .enumerate()
            .map(|(idx, &word)| (word, idx))
            .collect();
        let solution_index = table
            .solutions()
            .iter()
            .enumerate()
            .map(|(idx, &word)| (word, idx))
            .collect();
        let solution_rows = table
            .solutions()
            .iter()
            .map(|word| guess_index.get(word).copied())
            .collect();

        Self {
            table,
            guess_index,
            solution_index,
            solution_rows,
        }
    }

    /// Build the table in memory from two word lists.
    pub fn from_words(guesses: Vec<Word>, solutions: Vec<Word>) -> Result<Self> {
        Ok(Self::new(PatternTable::build(guesses, solutions)?))
    }

    /// Load the word lists and the persisted table they must match.
    pub fn open(config: &Config) -> Result<Self> {
        let guesses = load_word_list(&config.guesses_path(), "guess")?;
        let solutions = load_word_list(&config.solutions_path(), "solution")?;
        let table = PatternTable::load_checked(&config.cache_dir, &guesses, &solutions)?;
        Ok(Self::new(table))
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    pub fn guesses(&self) -> &[Word] {
        self.table.guesses()
    }

    pub fn solutions(&self) -> &[Word] {
        self.table.solutions()
    }

    pub fn guess_index(&self, word: &Word) -> Option<usize> {
        self.guess_index.get(word).copied()
    }

    pub fn solution_index(&self, word: &Word) -> Option<usize> {
        self.solution_index.get(word).copied()
    }

    /// Table row for the solution at `solution`, if it can be guessed.
    pub fn solution_row(&self, solution: usize) -> Option<usize> {
        self.solution_rows[solution]
    }
}
