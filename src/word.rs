//! Five-letter words and the word lists they are loaded from.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::WORD_LENGTH;

/// A word of exactly five uppercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word([u8; WORD_LENGTH]);

/// Rejected input for [`Word::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a five-letter word")]
pub struct InvalidWord(pub String);

impl Word {
    /// Parse a word, ignoring surrounding whitespace and letter case.
    pub fn parse(s: &str) -> Result<Self, InvalidWord> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != WORD_LENGTH || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(InvalidWord(trimmed.to_string()));
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (dst, src) in letters.iter_mut().zip(bytes) {
            *dst = src.to_ascii_uppercase();
        }
        Ok(Self(letters))
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn letter(&self, pos: usize) -> u8 {
        self.0[pos]
    }

    /// Number of different letters in the word, 1 to 5.
    pub fn distinct_letters(&self) -> usize {
        letter_mask(self.0.iter().copied()).count_ones() as usize
    }

    pub fn as_str(&self) -> &str {
        // only ever built from ASCII letters
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

/// Bit set of letters, bit 0 is `A`.
pub(crate) fn letter_mask(letters: impl IntoIterator<Item = u8>) -> u32 {
    letters
        .into_iter()
        .fold(0, |mask, b| mask | letter_bit(b))
}

pub(crate) fn letter_bit(letter: u8) -> u32 {
    1 << (letter - b'A')
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Word {
    type Err = InvalidWord;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Word {
    type Error = InvalidWord;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.as_str().to_string()
    }
}

/// Parse a word list: one word per line, blank lines skipped.
///
/// Repeated words are dropped so every word keeps the index of its first
/// occurrence. `path` is only used for error messages.
pub fn parse_word_list(contents: &str, path: &Path, kind: &'static str) -> Result<Vec<Word>> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for (line_no, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let word = Word::parse(line).map_err(|e| Error::InvalidWord {
            path: path.to_path_buf(),
            line: line_no + 1,
            word: e.0,
        })?;
        if seen.insert(word) {
            words.push(word);
        } else {
            log::warn!("dropping duplicate {kind} word {word} on line {}", line_no + 1);
        }
    }

    if words.is_empty() {
        return Err(Error::EmptyWordList { kind });
    }
    Ok(words)
}

/// Read and parse a word list file.
pub fn load_word_list(path: &Path, kind: &'static str) -> Result<Vec<Word>> {
    let contents = fs::read_to_string(path).map_err(|source| Error::MissingData {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_word_list(&contents, path, kind)?;
    log::info!("loaded {} {kind} words from {}", words.len(), path.display());
    Ok(words)
}
