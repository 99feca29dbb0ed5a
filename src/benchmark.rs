//! Play against every solution and collect how many guesses each took.

use rayon::prelude::*;

use crate::error::Result;
use crate::model::GameModel;
use crate::session::GameSession;

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    /// `(guess count, number of games)`, ascending by guess count
    pub distribution: Vec<(usize, usize)>,
    /// Games that hit the turn limit
    pub unsolved: usize,
}

impl BenchmarkReport {
    pub fn games(&self) -> usize {
        self.distribution.iter().map(|(_, count)| count).sum::<usize>() + self.unsolved
    }

    /// Average guesses over solved games.
    pub fn average(&self) -> f64 {
        let solved: usize = self.distribution.iter().map(|(_, count)| count).sum();
        if solved == 0 {
            return 0.0;
        }
        let guesses: usize = self.distribution.iter().map(|(g, count)| g * count).sum();
        guesses as f64 / solved as f64
    }

    /// Solved games that needed more than `limit` guesses.
    pub fn over(&self, limit: usize) -> usize {
        self.distribution
            .iter()
            .filter(|(g, _)| *g > limit)
            .map(|(_, count)| count)
            .sum()
    }
}

/// Get distribution of guess counts across all solutions
pub fn run(model: &GameModel, hard_mode: bool, max_turns: usize) -> Result<BenchmarkReport> {
    log::info!("benchmarking {} solutions", model.solutions().len());

    let counts: Vec<Option<usize>> = model
        .solutions()
        .par_iter()
        .map(|&secret| -> Result<Option<usize>> {
            let record = GameSession::new(model, hard_mode).play_against(secret, max_turns)?;
            Ok(record.is_solved().then(|| record.guess_count()))
        })
        .collect::<Result<_>>()?;

    let max_guesses = counts.iter().flatten().copied().max().unwrap_or(0);
    let mut distribution = vec![0usize; max_guesses + 1];
    let mut unsolved = 0;
    for count in counts {
        match count {
            Some(guesses) => distribution[guesses] += 1,
            None => unsolved += 1,
        }
    }

    Ok(BenchmarkReport {
        distribution: distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect(),
        unsolved,
    })
}
