//! The set of solutions still consistent with every feedback seen so far.

use crate::feedback::FeedbackPattern;

/// Membership mask over the solution list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    mask: Vec<bool>,
    len: usize,
}

impl Candidates {
    /// Every solution is still possible.
    pub fn all(solutions: usize) -> Self {
        Self {
            mask: vec![true; solutions],
            len: solutions,
        }
    }

    /// Keep only solutions whose code in `row` equals `observed`.
    ///
    /// `row` is the guess's table row, one code per solution.
    pub fn filter(&self, row: &[u8], observed: FeedbackPattern) -> Self {
        debug_assert_eq!(row.len(), self.mask.len());
        let mask: Vec<bool> = self
            .mask
            .iter()
            .zip(row)
            .map(|(&keep, &code)| keep && code == observed.0)
            .collect();
        let len = mask.iter().filter(|&&keep| keep).count();
        Self { mask, len }
    }

    /// Number of remaining candidates.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, solution: usize) -> bool {
        self.mask.get(solution).copied().unwrap_or(false)
    }

    /// Solution indices still in the set, ascending.
    pub fn indices(&self) -> Vec<usize> {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(idx, &keep)| keep.then_some(idx))
            .collect()
    }

    /// The only remaining candidate, if exactly one is left.
    pub fn sole(&self) -> Option<usize> {
        if self.len == 1 {
            self.mask.iter().position(|&keep| keep)
        } else {
            None
        }
    }
}
