pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feed::handlers as jobs;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).put(jobs::handle_replace_jobs),
        )
        .route("/api/v1/jobs/refresh", post(jobs::handle_refresh_jobs))
        .route("/api/v1/jobs/load-more", post(jobs::handle_load_more))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .route(
            "/api/v1/jobs/:id/candidates",
            get(matching::handle_candidates_for_job),
        )
        .route("/api/v1/jobs/:id/matches", get(matching::handle_job_matches))
        // Matching API
        .route(
            "/api/v1/match/candidates",
            post(matching::handle_rank_candidates),
        )
        .route("/api/v1/match/jobs", post(matching::handle_rank_jobs))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::feed::error::FeedError;
    use crate::feed::source::{JobSource, SimulatedJobSource};
    use crate::feed::store::JobStore;
    use crate::feed::{FeedSettings, JobFeed};
    use crate::matching::location::LocationRules;
    use crate::matching::raw_score::fixtures::make_job;
    use crate::models::job::Job;
    use crate::random::SeededRandom;

    struct CorruptSource;

    #[async_trait]
    impl JobSource for CorruptSource {
        async fn scrape(&self, _batch_size: usize) -> Result<Vec<Job>, FeedError> {
            Err(FeedError::parsing("Failed to process job feed: truncated payload"))
        }
    }

    fn app_with(source: Arc<dyn JobSource>) -> Router {
        let config = Config {
            match_seed: Some(17),
            ..Config::default()
        };
        let feed = JobFeed::new(
            JobStore::new(vec![make_job("j1", &["Forklift", "Safety"], 1, "Eagan, MN")]),
            source,
            FeedSettings::default(),
            SeededRandom::from_seed(3),
        );
        build_router(AppState {
            config,
            feed: Arc::new(feed),
            location_rules: LocationRules::default(),
        })
    }

    fn app() -> Router {
        app_with(Arc::new(SimulatedJobSource::new(SeededRandom::from_seed(5), 0.0)))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_cache_size() {
        let (status, body) = send(app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["cached_jobs"], 1);
    }

    #[tokio::test]
    async fn test_unknown_job_is_404() {
        let (status, body) = send(app(), get("/api/v1/jobs/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_rank_candidates_endpoint() {
        let job = serde_json::to_value(make_job("j9", &["Forklift", "Safety"], 1, "Eagan, MN"))
            .unwrap();
        let candidate = |id: &str, skills: Value| {
            json!({
                "id": id,
                "name": "Ava King",
                "title": "Order Picker",
                "location": "Eagan, MN",
                "skills": skills,
                "experienceYears": 2,
                "profileUrl": "#"
            })
        };
        let request = json_request(
            "POST",
            "/api/v1/match/candidates",
            json!({
                "job": job,
                "candidates": [
                    candidate("weak", json!(["Barista"])),
                    candidate("strong", json!(["forklift certified", "safety"]))
                ]
            }),
        );

        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        let results = body.as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["candidateId"], "strong");
        assert!(results[0]["score"].as_u64() >= results[1]["score"].as_u64());
        assert_eq!(results[0]["analysis"]["missingSkills"], json!([]));
    }

    #[tokio::test]
    async fn test_rank_jobs_defaults_to_cache() {
        let request = json_request(
            "POST",
            "/api/v1/match/jobs",
            json!({
                "candidate": {
                    "id": "me",
                    "name": "Noah Hall",
                    "title": "Forklift Operator",
                    "location": "Eagan, MN",
                    "skills": ["Forklift"],
                    "experienceYears": 4,
                    "profileUrl": "#"
                }
            }),
        );

        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["jobId"], "j1");
        assert_eq!(body[0]["score"], 95);
    }

    #[tokio::test]
    async fn test_job_matches_ranks_generated_pool() {
        let (status, body) = send(app(), get("/api/v1/jobs/j1/matches")).await;
        assert_eq!(status, StatusCode::OK);
        let results = body.as_array().unwrap();
        assert_eq!(results.len(), 14);
        let scores: Vec<u64> = results.iter().map(|r| r["score"].as_u64().unwrap()).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{scores:?}");
    }

    #[tokio::test]
    async fn test_refresh_prepends_fresh_jobs() {
        let (status, body) = send(app(), get_post("/api/v1/jobs/refresh")).await;
        assert_eq!(status, StatusCode::OK);
        let jobs = body.as_array().unwrap();
        assert_eq!(jobs.len(), 51);
        assert_eq!(jobs[0]["isNew"], true);
        assert_eq!(jobs[50]["id"], "j1");
    }

    #[tokio::test]
    async fn test_refresh_parsing_error_is_terminal() {
        let app = app_with(Arc::new(CorruptSource));
        let (status, body) = send(app, get_post("/api/v1/jobs/refresh")).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "PARSING_ERROR");
        assert_eq!(body["error"]["retryable"], false);
    }

    #[tokio::test]
    async fn test_replace_then_list() {
        let app = app();
        let jobs = json!([make_job("x1", &[], 0, "Duluth, MN")]);
        let (status, _) = send(app.clone(), json_request("PUT", "/api/v1/jobs", jobs)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(app, get("/api/v1/jobs")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], "x1");
    }

    fn get_post(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }
}
