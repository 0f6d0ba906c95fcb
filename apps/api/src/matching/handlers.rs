//! Axum route handlers for the Matching API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::fixtures::candidates::candidate_pool_for;
use crate::matching::{rank_candidates, rank_jobs_for_candidate};
use crate::models::candidate::Candidate;
use crate::models::job::Job;
use crate::models::match_result::{JobMatchResult, MatchResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RankCandidatesRequest {
    pub job: Job,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct RankJobsRequest {
    pub candidate: Candidate,
    /// Falls back to the cached job feed when omitted.
    pub jobs: Option<Vec<Job>>,
}

/// POST /api/v1/match/candidates
pub async fn handle_rank_candidates(
    State(state): State<AppState>,
    Json(request): Json<RankCandidatesRequest>,
) -> Result<Json<Vec<MatchResult>>, AppError> {
    if request.job.id.trim().is_empty() {
        return Err(AppError::Validation("job.id cannot be empty".to_string()));
    }

    let mut rng = state.rng();
    let results = rank_candidates(
        &request.job,
        &request.candidates,
        &state.location_rules,
        &mut rng,
    );
    Ok(Json(results))
}

/// POST /api/v1/match/jobs
pub async fn handle_rank_jobs(
    State(state): State<AppState>,
    Json(request): Json<RankJobsRequest>,
) -> Result<Json<Vec<JobMatchResult>>, AppError> {
    if request.candidate.id.trim().is_empty() {
        return Err(AppError::Validation(
            "candidate.id cannot be empty".to_string(),
        ));
    }

    let jobs = match request.jobs {
        Some(jobs) => jobs,
        None => state.feed.get_jobs().await,
    };

    let mut rng = state.rng();
    let results = rank_jobs_for_candidate(
        &request.candidate,
        &jobs,
        &state.location_rules,
        &mut rng,
    );
    Ok(Json(results))
}

/// GET /api/v1/jobs/:id/candidates
///
/// Generated candidate pool for a cached job.
pub async fn handle_candidates_for_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Vec<Candidate>>, AppError> {
    let job = state
        .feed
        .get_job(&job_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let mut rng = state.rng();
    Ok(Json(candidate_pool_for(&job, &mut rng)))
}

/// GET /api/v1/jobs/:id/matches
///
/// Generates a candidate pool for a cached job and ranks it.
pub async fn handle_job_matches(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Vec<MatchResult>>, AppError> {
    let job = state
        .feed
        .get_job(&job_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let mut rng = state.rng();
    let candidates = candidate_pool_for(&job, &mut rng);
    let results = rank_candidates(&job, &candidates, &state.location_rules, &mut rng);
    Ok(Json(results))
}
