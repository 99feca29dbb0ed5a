//! Guess selection by expected remaining candidates.
//!
//! Every guess splits the remaining candidates into buckets, one per
//! feedback code it would produce. A guess is scored by the sum of squared
//! bucket sizes: divided by the candidate count this is the expected number
//! of candidates left after playing it, so lower is better. It ranks guesses
//! the way an entropy maximizer would while staying in exact integers.

use std::cmp::Reverse;

use rayon::prelude::*;

use crate::candidates::Candidates;
use crate::error::{Error, Result};
use crate::feedback::FeedbackPattern;
use crate::hard_mode::HardModeConstraints;
use crate::model::GameModel;
use crate::word::Word;

/// Below this many candidates only still-possible answers are considered.
pub const POOL_SHRINK_THRESHOLD: usize = 50;

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGuess {
    /// Row of the guess in the pattern table
    pub index: usize,
    pub word: Word,
    /// Sum of squared bucket sizes
    pub score: u64,
    pub expected_remaining: f64,
    /// Shannon entropy of the bucket distribution in bits, for display only
    pub entropy: f64,
    pub is_possible_answer: bool,
}

/// Histogram of feedback codes of one table row over the given candidates.
pub fn bucket_counts(row: &[u8], candidates: &[usize]) -> [u32; FeedbackPattern::NUM_PATTERNS] {
    let mut counts = [0u32; FeedbackPattern::NUM_PATTERNS];
    for &solution in candidates {
        counts[usize::from(row[solution])] += 1;
    }
    counts
}

/// Sum of squared bucket sizes of a row over the given candidates.
pub fn score(row: &[u8], candidates: &[usize]) -> u64 {
    bucket_counts(row, candidates)
        .iter()
        .map(|&count| u64::from(count) * u64::from(count))
        .sum()
}

fn entropy(counts: &[u32], total: usize) -> f64 {
    let n = total as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / n;
            -p * p.log2()
        })
        .sum()
}

/// Table rows worth scoring this turn.
///
/// With fewer than [`POOL_SHRINK_THRESHOLD`] candidates the pool is the
/// candidates themselves (those that are allowed guesses), otherwise every
/// allowed guess. With `hard_mode` set only legal words stay in the pool.
pub fn guess_pool(
    model: &GameModel,
    candidates: &Candidates,
    hard_mode: Option<&HardModeConstraints>,
) -> Result<Vec<usize>> {
    let legal = |row: &usize| hard_mode.map_or(true, |c| c.is_legal(&model.guesses()[*row]));
    let everything = || (0..model.guesses().len()).filter(legal).collect::<Vec<_>>();

    let pool = if candidates.len() < POOL_SHRINK_THRESHOLD {
        let restricted: Vec<usize> = candidates
            .indices()
            .into_iter()
            .filter_map(|solution| model.solution_row(solution))
            .filter(legal)
            .collect();
        if restricted.is_empty() {
            everything()
        } else {
            restricted
        }
    } else {
        everything()
    };

    if pool.is_empty() {
        return Err(Error::NoLegalGuess);
    }
    Ok(pool)
}

/// Ordering of guesses: lowest score, then most distinct letters, then
/// alphabetical. The row index only separates repeated words.
fn rank_key(word: &Word, score: u64, row: usize) -> (u64, Reverse<usize>, Word, usize) {
    (score, Reverse(word.distinct_letters()), *word, row)
}

fn analyze(
    model: &GameModel,
    candidates: &Candidates,
    cand: &[usize],
    row: usize,
    score: u64,
) -> ScoredGuess {
    let word = model.guesses()[row];
    let counts = bucket_counts(model.table().row(row), cand);
    ScoredGuess {
        index: row,
        word,
        score,
        expected_remaining: score as f64 / cand.len() as f64,
        entropy: entropy(&counts, cand.len()),
        is_possible_answer: model
            .solution_index(&word)
            .is_some_and(|solution| candidates.contains(solution)),
    }
}

/// The best guess of `pool` against the current candidates.
///
/// Scoring runs in parallel; the total order of [`rank_key`] makes the
/// winner independent of scheduling.
pub fn best_guess(
    model: &GameModel,
    candidates: &Candidates,
    pool: &[usize],
) -> Option<ScoredGuess> {
    let cand = candidates.indices();
    if cand.is_empty() {
        return None;
    }
    let guesses = model.guesses();

    let (row, best) = pool
        .par_iter()
        .map(|&row| (row, score(model.table().row(row), &cand)))
        .min_by_key(|&(row, score)| rank_key(&guesses[row], score, row))?;

    log::debug!(
        "scored {} guesses over {} candidates, best {} with {}",
        pool.len(),
        cand.len(),
        guesses[row],
        best
    );
    Some(analyze(model, candidates, &cand, row, best))
}

/// The `n` best guesses of `pool`, best first.
pub fn top_guesses(
    model: &GameModel,
    candidates: &Candidates,
    pool: &[usize],
    n: usize,
) -> Vec<ScoredGuess> {
    let cand = candidates.indices();
    if cand.is_empty() {
        return vec![];
    }
    let guesses = model.guesses();

    let mut scored: Vec<(usize, u64)> = pool
        .par_iter()
        .map(|&row| (row, score(model.table().row(row), &cand)))
        .collect();
    scored.sort_unstable_by_key(|&(row, score)| rank_key(&guesses[row], score, row));
    scored.truncate(n);

    scored
        .into_iter()
        .map(|(row, score)| analyze(model, candidates, &cand, row, score))
        .collect()
}
