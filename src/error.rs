//! Error types shared by every part of the solver.

use std::path::PathBuf;

use thiserror::Error;

use crate::feedback::FeedbackParseError;
use crate::word::Word;

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can stop a game or keep one from starting.
#[derive(Debug, Error)]
pub enum Error {
    /// A word list or table file is absent or unreadable.
    #[error("the file '{}' is missing or unreadable", path.display())]
    MissingData {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the {kind} word list is empty")]
    EmptyWordList { kind: &'static str },

    #[error("'{word}' on line {line} of '{}' is not a five-letter word", path.display())]
    InvalidWord {
        path: PathBuf,
        line: usize,
        word: String,
    },

    /// The persisted table was built from different word lists.
    #[error("the pattern table in '{}' was built from different word lists; run `precompute` again", dir.display())]
    StaleTable { dir: PathBuf },

    #[error("the pattern table in '{}' is corrupt: {reason}", dir.display())]
    CorruptTable { dir: PathBuf, reason: String },

    #[error("no solution fits the given feedback")]
    InconsistentFeedback,

    #[error(transparent)]
    MalformedFeedback(#[from] FeedbackParseError),

    #[error("the secret word {0} is not a valid solution word")]
    InvalidSecret(Word),

    #[error("{0} is not an allowed guess")]
    UnknownGuess(Word),

    #[error("no allowed guess satisfies the hard-mode constraints")]
    NoLegalGuess,

    #[error("there is no turn to undo")]
    NothingToUndo,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
