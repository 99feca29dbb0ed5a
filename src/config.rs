//! Where word lists and the cached table live.

use std::path::PathBuf;

pub const GUESSES_FILE: &str = "guesses.txt";
pub const SOLUTIONS_FILE: &str = "solutions.txt";

/// Filesystem layout used by the command line tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `guesses.txt` and `solutions.txt`
    pub data_dir: PathBuf,
    /// Directory holding `pattern.bin` and `meta.json`
    pub cache_dir: PathBuf,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache_dir: cache_dir.into(),
        }
    }

    pub fn guesses_path(&self) -> PathBuf {
        self.data_dir.join(GUESSES_FILE)
    }

    pub fn solutions_path(&self) -> PathBuf {
        self.data_dir.join(SOLUTIONS_FILE)
    }
}
