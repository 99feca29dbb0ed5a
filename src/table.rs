//! The guess × solution feedback table.
//!
//! Scoring a guess needs the feedback it produces against every remaining
//! candidate, every turn. Computing those on the fly is far too slow for the
//! full guess list, so the whole matrix is built once, written to disk and
//! read back by later runs.
//!
//! On disk a table is two files in one directory:
//! - `pattern.bin`: `rows * cols` bytes, row-major, one feedback code per cell
//! - `meta.json`: the ordered word lists the rows and columns stand for

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::feedback::FeedbackPattern;
use crate::word::Word;

pub const PATTERN_FILE: &str = "pattern.bin";
pub const META_FILE: &str = "meta.json";

/// Dense matrix of feedback codes, row = guess index, column = solution index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable {
    guesses: Vec<Word>,
    solutions: Vec<Word>,
    codes: Vec<u8>,
}

/// Sidecar describing what a persisted table was built from.
#[derive(Debug, Serialize, Deserialize)]
struct TableMeta {
    rows: usize,
    cols: usize,
    dtype: String,
    guesses: Vec<Word>,
    solutions: Vec<Word>,
}

impl PatternTable {
    /// Encode every (guess, solution) pair.
    ///
    /// Rows are filled in parallel; each cell only depends on its own pair,
    /// so the result is identical for identical word lists.
    pub fn build(guesses: Vec<Word>, solutions: Vec<Word>) -> Result<Self> {
        if guesses.is_empty() {
            return Err(Error::EmptyWordList { kind: "guess" });
        }
        if solutions.is_empty() {
            return Err(Error::EmptyWordList { kind: "solution" });
        }

        log::info!(
            "building pattern table ({} guesses x {} solutions)",
            guesses.len(),
            solutions.len()
        );

        let cols = solutions.len();
        let mut codes = vec![0u8; guesses.len() * cols];
        codes
            .par_chunks_mut(cols)
            .zip(guesses.par_iter())
            .for_each(|(row, guess)| {
                for (cell, answer) in row.iter_mut().zip(&solutions) {
                    *cell = FeedbackPattern::calculate(guess, answer).0;
                }
            });

        Ok(Self {
            guesses,
            solutions,
            codes,
        })
    }

    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    pub fn rows(&self) -> usize {
        self.guesses.len()
    }

    pub fn cols(&self) -> usize {
        self.solutions.len()
    }

    /// Feedback codes of one guess against every solution.
    pub fn row(&self, guess: usize) -> &[u8] {
        let cols = self.cols();
        &self.codes[guess * cols..(guess + 1) * cols]
    }

    pub fn get(&self, guess: usize, solution: usize) -> FeedbackPattern {
        FeedbackPattern(self.codes[guess * self.cols() + solution])
    }

    /// Whether this table was built from exactly these ordered lists.
    pub fn matches(&self, guesses: &[Word], solutions: &[Word]) -> bool {
        self.guesses == guesses && self.solutions == solutions
    }

    /// Write `pattern.bin` and `meta.json` into `dir`, creating it if needed.
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;

        let meta = TableMeta {
            rows: self.rows(),
            cols: self.cols(),
            dtype: "uint8".to_string(),
            guesses: self.guesses.clone(),
            solutions: self.solutions.clone(),
        };
        fs::write(dir.join(PATTERN_FILE), &self.codes)?;
        fs::write(dir.join(META_FILE), serde_json::to_vec_pretty(&meta)?)?;

        log::info!("saved pattern table to {}", dir.display());
        Ok(())
    }

    /// Read a table persisted by [`PatternTable::save`].
    pub fn load(dir: &Path) -> Result<Self> {
        let meta_bytes = read(&dir.join(META_FILE))?;
        let meta: TableMeta = serde_json::from_slice(&meta_bytes)?;
        let codes = read(&dir.join(PATTERN_FILE))?;

        let corrupt = |reason: String| Error::CorruptTable {
            dir: dir.to_path_buf(),
            reason,
        };
        if meta.rows != meta.guesses.len() || meta.cols != meta.solutions.len() {
            return Err(corrupt(format!(
                "sidecar declares {}x{} but lists {} guesses and {} solutions",
                meta.rows,
                meta.cols,
                meta.guesses.len(),
                meta.solutions.len()
            )));
        }
        if meta.guesses.is_empty() || meta.solutions.is_empty() {
            return Err(corrupt("sidecar has an empty word list".to_string()));
        }
        if codes.len() != meta.rows * meta.cols {
            return Err(corrupt(format!(
                "expected {} bytes, found {}",
                meta.rows * meta.cols,
                codes.len()
            )));
        }
        if let Some(code) = codes
            .iter()
            .find(|&&c| usize::from(c) >= FeedbackPattern::NUM_PATTERNS)
        {
            return Err(corrupt(format!("feedback code {code} out of range")));
        }

        log::info!(
            "loaded pattern table ({} guesses x {} solutions) from {}",
            meta.rows,
            meta.cols,
            dir.display()
        );
        Ok(Self {
            guesses: meta.guesses,
            solutions: meta.solutions,
            codes,
        })
    }

    /// Load the table in `dir` and check it was built from these word lists.
    pub fn load_checked(dir: &Path, guesses: &[Word], solutions: &[Word]) -> Result<Self> {
        let table = Self::load(dir)?;
        if !table.matches(guesses, solutions) {
            return Err(Error::StaleTable {
                dir: dir.to_path_buf(),
            });
        }
        Ok(table)
    }

    /// Reuse the table in `dir` if it is current, otherwise build and save a new one.
    pub fn load_or_build(dir: &Path, guesses: Vec<Word>, solutions: Vec<Word>) -> Result<Self> {
        match Self::load_checked(dir, &guesses, &solutions) {
            Ok(table) => return Ok(table),
            Err(Error::StaleTable { .. }) => {
                log::info!("pattern table in {} is stale, rebuilding", dir.display());
            }
            Err(Error::MissingData { .. } | Error::CorruptTable { .. } | Error::Json(_)) => {
                log::info!("no usable pattern table in {}, building", dir.display());
            }
            Err(e) => return Err(e),
        }
        let table = Self::build(guesses, solutions)?;
        table.save(dir)?;
        Ok(table)
    }
}

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::MissingData {
        path: PathBuf::from(path),
        source,
    })
}
