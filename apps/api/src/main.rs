mod config;
mod errors;
mod feed;
mod fixtures;
mod matching;
mod models;
mod random;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::feed::source::SimulatedJobSource;
use crate::feed::store::JobStore;
use crate::feed::{FeedSettings, JobFeed};
use crate::fixtures::jobs::initial_dataset;
use crate::matching::location::LocationRules;
use crate::random::SeededRandom;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so malformed values fail before anything starts
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentMatch API v{}", env!("CARGO_PKG_VERSION"));

    if let Some(seed) = config.match_seed {
        info!("Deterministic mode: MATCH_SEED={seed}");
    }

    // Seed the job cache
    let mut rng = SeededRandom::new(config.match_seed);
    let store = JobStore::new(initial_dataset(config.feed_initial_jobs, &mut rng));
    info!("Job cache seeded with {} postings", store.len().await);

    // Simulated live feed; refreshes are retried per FEED_MAX_RETRIES / FEED_BASE_DELAY_MS
    let source = Arc::new(SimulatedJobSource::new(
        SeededRandom::new(config.match_seed),
        config.feed_failure_rate,
    ));
    let settings = FeedSettings::from(&config);
    info!(
        "Feed: batch_size={} max_retries={} base_delay={}ms failure_rate={}",
        settings.batch_size,
        settings.retry.max_retries,
        settings.retry.base_delay.as_millis(),
        config.feed_failure_rate
    );
    let feed = Arc::new(JobFeed::new(store, source, settings, rng));

    let location_rules = LocationRules::new(config.region_markers.clone());
    info!("Region markers: {:?}", location_rules.region_markers);

    // Build app state
    let state = AppState {
        config: config.clone(),
        feed,
        location_rules,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
