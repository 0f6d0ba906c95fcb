//! Job feed. Owns the job cache and the retried refresh path.
//!
//! All job reads and writes go through `JobFeed`; nothing else holds the store.

pub mod error;
pub mod handlers;
pub mod retry;
pub mod source;
pub mod store;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::info;

use crate::config::Config;
use crate::feed::error::FeedError;
use crate::feed::retry::{fetch_with_retry, RetryPolicy};
use crate::feed::source::JobSource;
use crate::feed::store::JobStore;
use crate::fixtures::jobs::generate_job;
use crate::models::job::Job;
use crate::random::SeededRandom;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedSettings {
    pub retry: RetryPolicy,
    pub batch_size: usize,
    /// Simulated latency for list and load-more calls.
    pub latency: Duration,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            batch_size: 50,
            latency: Duration::ZERO,
        }
    }
}

impl From<&Config> for FeedSettings {
    fn from(config: &Config) -> Self {
        Self {
            retry: RetryPolicy::new(config.feed_max_retries, config.feed_base_delay_ms),
            batch_size: config.feed_batch_size,
            latency: Duration::from_millis(config.feed_latency_ms),
        }
    }
}

pub struct JobFeed {
    store: JobStore,
    source: Arc<dyn JobSource>,
    settings: FeedSettings,
    rng: Mutex<SeededRandom>,
}

impl JobFeed {
    pub fn new(
        store: JobStore,
        source: Arc<dyn JobSource>,
        settings: FeedSettings,
        rng: SeededRandom,
    ) -> Self {
        Self {
            store,
            source,
            settings,
            rng: Mutex::new(rng),
        }
    }

    async fn simulate_latency(&self) {
        if !self.settings.latency.is_zero() {
            tokio::time::sleep(self.settings.latency).await;
        }
    }

    pub async fn get_jobs(&self) -> Vec<Job> {
        self.simulate_latency().await;
        self.store.snapshot().await
    }

    pub async fn cached_len(&self) -> usize {
        self.store.len().await
    }

    pub async fn get_job(&self, id: &str) -> Option<Job> {
        self.store.find(id).await
    }

    /// Scrapes a fresh batch with retry and prepends it to the cache.
    pub async fn refresh(&self) -> Result<Vec<Job>, FeedError> {
        let batch_size = self.settings.batch_size;
        let batch =
            fetch_with_retry(self.settings.retry, || self.source.scrape(batch_size)).await?;

        info!("Feed refresh produced {} new jobs", batch.len());
        Ok(self.store.prepend(batch).await)
    }

    /// Appends a generated batch of older postings.
    pub async fn load_more(&self) -> Vec<Job> {
        let batch: Vec<Job> = {
            let mut rng = self.rng.lock().await;
            let stamp = Utc::now().timestamp_millis();
            (0..self.settings.batch_size)
                .map(|i| generate_job(format!("batch-{stamp}-{i}"), false, &mut *rng))
                .collect()
        };

        let updated = self.store.append(batch).await;
        self.simulate_latency().await;
        updated
    }

    /// Replaces the cached list.
    pub async fn update(&self, jobs: Vec<Job>) {
        info!("Job cache replaced ({} jobs)", jobs.len());
        self.store.replace(jobs).await;
    }
}
