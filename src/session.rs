//! One game: the candidate set, hard mode state and the turns played so far.

use crate::candidates::Candidates;
use crate::error::{Error, Result};
use crate::feedback::FeedbackPattern;
use crate::hard_mode::HardModeConstraints;
use crate::model::GameModel;
use crate::selector::{self, ScoredGuess};
use crate::word::Word;

/// A guess that was played and the feedback it got.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: FeedbackPattern,
    /// Candidates left after this turn
    pub remaining: usize,
}

/// What the solver wants to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Move {
    /// Only one candidate is left.
    Solved(Word),
    Guess(ScoredGuess),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved(Word),
    /// The turn limit was reached first.
    Exhausted,
}

/// Transcript of a finished game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub turns: Vec<Turn>,
    pub outcome: Outcome,
}

impl GameRecord {
    /// Guesses a player needs to finish this game.
    ///
    /// A game solved by deduction still needs the answer to be entered.
    pub fn guess_count(&self) -> usize {
        let won_on_last = self.turns.last().is_some_and(|t| t.feedback.is_win());
        match self.outcome {
            Outcome::Solved(_) if !won_on_last => self.turns.len() + 1,
            _ => self.turns.len(),
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved(_))
    }
}

#[derive(Debug, Clone)]
struct Snapshot {
    candidates: Candidates,
    constraints: HardModeConstraints,
}

/// Mutable state of a single game over a shared [`GameModel`].
#[derive(Debug, Clone)]
pub struct GameSession<'m> {
    model: &'m GameModel,
    hard_mode: bool,
    candidates: Candidates,
    constraints: HardModeConstraints,
    turns: Vec<Turn>,
    undo_stack: Vec<Snapshot>,
}

impl<'m> GameSession<'m> {
    pub fn new(model: &'m GameModel, hard_mode: bool) -> Self {
        Self {
            model,
            hard_mode,
            candidates: Candidates::all(model.solutions().len()),
            constraints: HardModeConstraints::new(),
            turns: Vec::new(),
            undo_stack: Vec::new(),
        }
    }

    pub fn is_hard_mode(&self) -> bool {
        self.hard_mode
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn candidates(&self) -> &Candidates {
        &self.candidates
    }

    /// Words that are still possible answers.
    pub fn possible_answers(&self) -> Vec<Word> {
        let solutions = self.model.solutions();
        self.candidates
            .indices()
            .into_iter()
            .map(|idx| solutions[idx])
            .collect()
    }

    pub fn constraints(&self) -> &HardModeConstraints {
        &self.constraints
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Whether `word` may be played under the current constraints.
    pub fn is_legal(&self, word: &Word) -> bool {
        !self.hard_mode || self.constraints.is_legal(word)
    }

    fn pool(&self) -> Result<Vec<usize>> {
        let constraints = self.hard_mode.then_some(&self.constraints);
        selector::guess_pool(self.model, &self.candidates, constraints)
    }

    /// Pick the next guess, or report the answer once it is certain.
    pub fn next_move(&self) -> Result<Move> {
        if let Some(solution) = self.candidates.sole() {
            return Ok(Move::Solved(self.model.solutions()[solution]));
        }
        let pool = self.pool()?;
        selector::best_guess(self.model, &self.candidates, &pool)
            .map(Move::Guess)
            .ok_or(Error::InconsistentFeedback)
    }

    /// The `n` best guesses this turn, best first.
    pub fn top_guesses(&self, n: usize) -> Result<Vec<ScoredGuess>> {
        if self.candidates.is_empty() {
            return Err(Error::InconsistentFeedback);
        }
        let pool = self.pool()?;
        Ok(selector::top_guesses(self.model, &self.candidates, &pool, n))
    }

    /// Narrow the candidates by the feedback `guess` received.
    ///
    /// Feedback that rules out every candidate is rejected and leaves the
    /// session unchanged. Returns the number of candidates left.
    pub fn apply_feedback(&mut self, guess: Word, feedback: FeedbackPattern) -> Result<usize> {
        let row = self
            .model
            .guess_index(&guess)
            .ok_or(Error::UnknownGuess(guess))?;

        let narrowed = self.candidates.filter(self.model.table().row(row), feedback);
        if narrowed.is_empty() {
            return Err(Error::InconsistentFeedback);
        }

        let previous = Snapshot {
            candidates: std::mem::replace(&mut self.candidates, narrowed),
            constraints: self.constraints.clone(),
        };
        self.undo_stack.push(previous);
        self.constraints.update(&guess, feedback);
        self.turns.push(Turn {
            guess,
            feedback,
            remaining: self.candidates.len(),
        });

        log::debug!("{guess} {feedback}: {} candidates left", self.candidates.len());
        Ok(self.candidates.len())
    }

    /// Take back the last turn.
    pub fn undo(&mut self) -> Result<Turn> {
        let snapshot = self.undo_stack.pop().ok_or(Error::NothingToUndo)?;
        self.candidates = snapshot.candidates;
        self.constraints = snapshot.constraints;
        self.turns.pop().ok_or(Error::NothingToUndo)
    }

    /// Start over with every solution possible again.
    pub fn reset(&mut self) {
        *self = Self::new(self.model, self.hard_mode);
    }

    /// Play until solved, asking `get_feedback` for each suggested guess.
    pub fn solve_with_feedback<F>(
        &mut self,
        max_turns: usize,
        mut get_feedback: F,
    ) -> Result<GameRecord>
    where
        F: FnMut(&ScoredGuess) -> Result<FeedbackPattern>,
    {
        loop {
            let guess = match self.next_move()? {
                Move::Solved(answer) => {
                    return Ok(GameRecord {
                        turns: self.turns.clone(),
                        outcome: Outcome::Solved(answer),
                    })
                }
                Move::Guess(guess) => guess,
            };
            if self.turns.len() >= max_turns {
                return Ok(GameRecord {
                    turns: self.turns.clone(),
                    outcome: Outcome::Exhausted,
                });
            }

            let feedback = get_feedback(&guess)?;
            self.apply_feedback(guess.word, feedback)?;
        }
    }

    /// Solve a puzzle knowing the secret word, reading feedback from the table.
    pub fn play_against(&mut self, secret: Word, max_turns: usize) -> Result<GameRecord> {
        let model = self.model;
        let solution = model
            .solution_index(&secret)
            .ok_or(Error::InvalidSecret(secret))?;
        let table = model.table();
        self.solve_with_feedback(max_turns, |guess| Ok(table.get(guess.index, solution)))
    }
}
