//! Hard mode constraints from previous guesses.

use crate::feedback::FeedbackPattern;
use crate::word::{letter_bit, Word};
use crate::WORD_LENGTH;

/// Everything the feedback so far has revealed, accumulated over a game.
///
/// Letter sets are bit masks with bit 0 standing for `A`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardModeConstraints {
    /// Letters that must be in specific positions (green)
    greens: [Option<u8>; WORD_LENGTH],
    /// Per position, letters known to be present but not there (yellow)
    yellows: [u32; WORD_LENGTH],
    /// Letters absent from the answer (gray, and never green or yellow)
    excludes: u32,
}

impl HardModeConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what a guess's feedback revealed.
    ///
    /// Greens and yellows of the whole guess are recorded before any gray,
    /// so a letter that is gray at one position but green or yellow at
    /// another is never excluded.
    pub fn update(&mut self, guess: &Word, pattern: FeedbackPattern) {
        let trits = pattern.to_trits();

        for (pos, &trit) in trits.iter().enumerate() {
            let letter = guess.letter(pos);
            match trit {
                2 => self.greens[pos] = Some(letter),
                1 => self.yellows[pos] |= letter_bit(letter),
                _ => {}
            }
        }

        let revealed = self.required_letters() | self.green_letters();
        for (pos, &trit) in trits.iter().enumerate() {
            let bit = letter_bit(guess.letter(pos));
            if trit == 0 && revealed & bit == 0 {
                self.excludes |= bit;
            }
        }
    }

    /// Check if a word satisfies all hard mode constraints
    pub fn is_legal(&self, word: &Word) -> bool {
        let mut present = 0u32;
        for pos in 0..WORD_LENGTH {
            let letter = word.letter(pos);
            let bit = letter_bit(letter);
            if matches!(self.greens[pos], Some(g) if g != letter) {
                return false;
            }
            if self.yellows[pos] & bit != 0 {
                return false;
            }
            present |= bit;
        }

        let required = self.required_letters();
        required & present == required && self.excludes & present == 0
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn green(&self, pos: usize) -> Option<u8> {
        self.greens[pos]
    }

    pub fn is_excluded(&self, letter: u8) -> bool {
        self.excludes & letter_bit(letter) != 0
    }

    /// Every letter ever marked yellow.
    fn required_letters(&self) -> u32 {
        self.yellows.iter().fold(0, |acc, &mask| acc | mask)
    }

    fn green_letters(&self) -> u32 {
        self.greens
            .iter()
            .flatten()
            .fold(0, |acc, &letter| acc | letter_bit(letter))
    }
}
