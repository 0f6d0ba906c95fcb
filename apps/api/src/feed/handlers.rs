//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::job::Job;
use crate::state::AppState;

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    Json(state.feed.get_jobs().await)
}

/// PUT /api/v1/jobs
pub async fn handle_replace_jobs(
    State(state): State<AppState>,
    Json(jobs): Json<Vec<Job>>,
) -> Result<StatusCode, AppError> {
    if jobs.iter().any(|j| j.id.trim().is_empty()) {
        return Err(AppError::Validation("every job needs an id".to_string()));
    }
    state.feed.update(jobs).await;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Job>, AppError> {
    state
        .feed
        .get_job(&job_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}

/// POST /api/v1/jobs/refresh
///
/// Retried scrape. A parsing failure comes back as a non-retryable error so the
/// client can stop polling.
pub async fn handle_refresh_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<Job>>, AppError> {
    let jobs = state.feed.refresh().await?;
    Ok(Json(jobs))
}

/// POST /api/v1/jobs/load-more
pub async fn handle_load_more(State(state): State<AppState>) -> Json<Vec<Job>> {
    Json(state.feed.load_more().await)
}
