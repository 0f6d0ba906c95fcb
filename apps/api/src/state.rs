use std::sync::Arc;

use crate::config::Config;
use crate::feed::JobFeed;
use crate::matching::location::LocationRules;
use crate::random::SeededRandom;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Owns the job cache; every job read or write goes through it.
    pub feed: Arc<JobFeed>,
    pub location_rules: LocationRules,
}

impl AppState {
    /// Per-request random source. Seeded when `MATCH_SEED` is configured.
    pub fn rng(&self) -> SeededRandom {
        SeededRandom::new(self.config.match_seed)
    }
}
