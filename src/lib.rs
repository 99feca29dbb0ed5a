//! # Wordle Entropy
//!
//! An information-theoretic Wordle solver.
//!
//! The feedback of every allowed guess against every possible solution is
//! precomputed into a [`PatternTable`]. Each turn the solver picks the guess
//! that minimizes the expected number of remaining candidates, then narrows
//! the candidates by the feedback that guess received.

pub mod benchmark;
pub mod candidates;
pub mod config;
pub mod error;
pub mod feedback;
pub mod hard_mode;
pub mod model;
pub mod selector;
pub mod session;
pub mod table;
pub mod word;

pub use candidates::Candidates;
pub use config::Config;
pub use error::{Error, Result};
pub use feedback::{Feedback, FeedbackParseError, FeedbackPattern};
pub use hard_mode::HardModeConstraints;
pub use model::GameModel;
pub use selector::ScoredGuess;
pub use session::{GameRecord, GameSession, Move, Outcome, Turn};
pub use table::PatternTable;
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;
