//! Forced distribution: maps a rank-ordered list onto a fixed descending ladder of
//! target scores, regardless of how close the underlying raw scores are.

use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ladder {
    slots: &'static [u32],
    /// Symmetric jitter applied to each slot before clamping.
    jitter: i32,
}

/// Candidates ranked for one job.
pub const CANDIDATE_LADDER: Ladder = Ladder {
    slots: &[96, 91, 84, 78, 72, 65, 59, 53, 48, 44, 42, 41],
    jitter: 1,
};

/// Jobs ranked for one candidate.
pub const JOB_LADDER: Ladder = Ladder {
    slots: &[95, 88, 82, 75, 68, 60, 52, 45, 41],
    jitter: 0,
};

impl Ladder {
    pub fn ceiling(&self) -> u32 {
        self.slots[0]
    }

    pub fn floor(&self) -> u32 {
        self.slots[self.slots.len() - 1]
    }

    /// Un-jittered target for `rank` (0-based). Ranks past the ladder get the floor.
    pub fn base(&self, rank: usize) -> u32 {
        self.slots.get(rank).copied().unwrap_or_else(|| self.floor())
    }

    /// Pairs each subject with its target score.
    ///
    /// Jittered scores stay within `floor..=ceiling` and never exceed the previous
    /// rank's score, so the output is non-increasing in input order.
    pub fn distribute<T>(&self, ordered: Vec<T>, rng: &mut dyn RandomSource) -> Vec<(T, u32)> {
        let mut previous = self.ceiling();
        ordered
            .into_iter()
            .enumerate()
            .map(|(rank, subject)| {
                let base = self.base(rank) as i32;
                let jittered = if self.jitter > 0 {
                    base + rng.int_in(-self.jitter, self.jitter)
                } else {
                    base
                };
                let score = (jittered.clamp(self.floor() as i32, self.ceiling() as i32) as u32)
                    .min(previous);
                previous = score;
                (subject, score)
            })
            .collect()
    }
}
