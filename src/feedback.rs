//! Feedback calculation for Wordle guesses.
//!
//! This module handles computing the feedback pattern (green/yellow/gray)
//! for a guess against an answer, and parsing the feedback a player reports.

use thiserror::Error;

use crate::word::Word;
use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word (gray)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse one feedback symbol: `G`/`2` green, `Y`/`1` yellow, `B`/`0`/`X`/`.` gray.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' | '2' => Some(Feedback::Correct),
            'Y' | '1' => Some(Feedback::Present),
            'B' | '0' | 'X' | '.' => Some(Feedback::Absent),
            _ => None,
        }
    }

    /// The base-3 digit of this colour.
    pub fn trit(self) -> u8 {
        match self {
            Feedback::Absent => 0,
            Feedback::Present => 1,
            Feedback::Correct => 2,
        }
    }

    fn from_trit(trit: u8) -> Self {
        match trit {
            2 => Feedback::Correct,
            1 => Feedback::Present,
            _ => Feedback::Absent,
        }
    }
}

/// Reasons a feedback string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("feedback must have exactly 5 symbols, got {0}")]
    WrongLength(usize),
    #[error("bad feedback symbol {0:?}, use G/Y/B or 2/1/0")]
    InvalidSymbol(char),
}

/// A complete feedback pattern for a 5-letter guess.
/// Encoded as a single u8 value (0-242) for efficiency.
/// Each position can be 0 (absent), 1 (present), or 2 (correct).
/// Pattern = p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackPattern(pub u8);

impl FeedbackPattern {
    /// The pattern indicating all correct (winning)
    pub const ALL_CORRECT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    /// Create a new pattern from individual feedback values
    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        Self::encode(feedbacks.map(Feedback::trit))
    }

    /// Re-encode five little-endian base-3 digits, `None` if any digit is
    /// above 2.
    pub fn from_trits(trits: [u8; WORD_LENGTH]) -> Option<Self> {
        trits
            .iter()
            .all(|&trit| trit <= 2)
            .then(|| Self::encode(trits))
    }

    fn encode(trits: [u8; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for trit in trits {
            pattern += trit * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Calculate the feedback pattern for a guess against an answer.
    ///
    /// Greens are marked first and take their answer letter out of play.
    /// Each remaining guess letter then turns yellow only while an unmatched
    /// copy of it is left in the answer, so a letter repeated in the guess
    /// is never coloured more often than it occurs in the answer.
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess_bytes = guess.letters();
        let answer_bytes = answer.letters();

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut answer_remaining = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess_bytes[i] == answer_bytes[i] {
                feedback[i] = Feedback::Correct;
            } else {
                let idx = (answer_bytes[i] - b'A') as usize;
                answer_remaining[idx] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] != Feedback::Correct {
                let idx = (guess_bytes[i] - b'A') as usize;
                if answer_remaining[idx] > 0 {
                    feedback[i] = Feedback::Present;
                    answer_remaining[idx] -= 1;
                }
            }
        }

        Self::new(feedback)
    }

    /// Decode into five little-endian base-3 digits.
    pub fn to_trits(self) -> [u8; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut trits = [0u8; WORD_LENGTH];
        for trit in trits.iter_mut() {
            *trit = pattern % 3;
            pattern /= 3;
        }
        trits
    }

    /// Convert pattern to array of feedbacks
    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        self.to_trits().map(Feedback::from_trit)
    }

    /// Check if this pattern represents a win (all correct)
    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Parse a pattern from a string like "GYBBB", "21000" or "g y . x 2".
    ///
    /// Case-insensitive; whitespace anywhere in the input is ignored.
    pub fn parse(s: &str) -> Result<Self, FeedbackParseError> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackParseError::WrongLength(symbols.len()));
        }
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for (slot, &c) in feedbacks.iter_mut().zip(&symbols) {
            *slot = Feedback::from_char(c).ok_or(FeedbackParseError::InvalidSymbol(c))?;
        }
        Ok(Self::new(feedbacks))
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_char()).collect()
    }
}

impl std::str::FromStr for FeedbackPattern {
    type Err = FeedbackParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}
