//! Bidirectional matching pipeline.
//!
//! raw score → stable sort → ladder assignment → detailed expansion. Everything here
//! is synchronous; the only state touched is the caller's random source.

pub mod detailed;
pub mod distribution;
pub mod handlers;
pub mod location;
pub mod raw_score;

use tracing::debug;

use crate::matching::detailed::expand;
use crate::matching::distribution::{CANDIDATE_LADDER, JOB_LADDER};
use crate::matching::location::LocationRules;
use crate::models::candidate::Candidate;
use crate::models::job::Job;
use crate::models::match_result::{JobMatchResult, MatchResult};
use crate::random::RandomSource;

/// Sorts descending by raw score. `sort_by` is stable, so ties keep input order.
fn order_by_raw<T>(scored: &mut [(T, f64)]) {
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
}

/// Ranks `candidates` for `job`. One result per candidate, scores non-increasing.
pub fn rank_candidates(
    job: &Job,
    candidates: &[Candidate],
    rules: &LocationRules,
    rng: &mut dyn RandomSource,
) -> Vec<MatchResult> {
    let mut scored: Vec<(&Candidate, f64)> = candidates
        .iter()
        .map(|c| (c, raw_score::score(job, c, rules).raw))
        .collect();
    order_by_raw(&mut scored);

    let ordered: Vec<&Candidate> = scored.into_iter().map(|(c, _)| c).collect();
    let results: Vec<MatchResult> = CANDIDATE_LADDER
        .distribute(ordered, rng)
        .into_iter()
        .map(|(candidate, target)| expand(job, candidate, target, &mut *rng))
        .collect();

    debug!("Ranked {} candidates for job {}", results.len(), job.id);
    results
}

/// Ranks `jobs` for `candidate`, keyed by job id.
pub fn rank_jobs_for_candidate(
    candidate: &Candidate,
    jobs: &[Job],
    rules: &LocationRules,
    rng: &mut dyn RandomSource,
) -> Vec<JobMatchResult> {
    let mut scored: Vec<(&Job, f64)> = jobs
        .iter()
        .map(|j| (j, raw_score::score(j, candidate, rules).raw))
        .collect();
    order_by_raw(&mut scored);

    let ordered: Vec<&Job> = scored.into_iter().map(|(j, _)| j).collect();
    let results: Vec<JobMatchResult> = JOB_LADDER
        .distribute(ordered, rng)
        .into_iter()
        .map(|(job, target)| JobMatchResult {
            result: expand(job, candidate, target, &mut *rng),
            job_id: job.id.clone(),
        })
        .collect();

    debug!("Ranked {} jobs for candidate {}", results.len(), candidate.id);
    results
}
