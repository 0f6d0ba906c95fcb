//! Job sources feed refreshes. `SimulatedJobSource` stands in for a live scrape: it
//! fails with a network error at a configured rate and otherwise generates a batch of
//! fresh postings.

use anyhow::ensure;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::feed::error::FeedError;
use crate::fixtures::jobs::generate_job;
use crate::models::job::Job;
use crate::random::{RandomSource, SeededRandom};

/// Pluggable source behind `JobFeed::refresh`. Carried as `Arc<dyn JobSource>`.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn scrape(&self, batch_size: usize) -> Result<Vec<Job>, FeedError>;
}

pub struct SimulatedJobSource {
    rng: Mutex<SeededRandom>,
    failure_rate: f64,
}

impl SimulatedJobSource {
    pub fn new(rng: SeededRandom, failure_rate: f64) -> Self {
        Self {
            rng: Mutex::new(rng),
            failure_rate,
        }
    }
}

#[async_trait]
impl JobSource for SimulatedJobSource {
    async fn scrape(&self, batch_size: usize) -> Result<Vec<Job>, FeedError> {
        let mut rng = self.rng.lock().await;

        if rng.chance(self.failure_rate) {
            return Err(FeedError::network("Connection to data stream lost."));
        }

        let stamp = Utc::now().timestamp_millis();
        let jobs: Vec<Job> = (0..batch_size)
            .map(|i| generate_job(format!("scraped-{stamp}-{i}"), true, &mut *rng))
            .collect();

        checked_batch(jobs)
    }
}

/// Passes a batch through `validate_batch`, reporting any failure as a parsing fault.
pub fn checked_batch(jobs: Vec<Job>) -> Result<Vec<Job>, FeedError> {
    validate_batch(&jobs)
        .map_err(|e| FeedError::parsing(format!("Failed to process job feed: {e}")))?;
    Ok(jobs)
}

/// Structural checks on a scraped batch. Any failure here is a processing fault.
pub fn validate_batch(jobs: &[Job]) -> anyhow::Result<()> {
    for job in jobs {
        ensure!(!job.id.trim().is_empty(), "job with empty id");
        ensure!(!job.title.trim().is_empty(), "job {} has no title", job.id);
        ensure!(!job.location.trim().is_empty(), "job {} has no location", job.id);
        ensure!(
            job.pay_rate.starts_with('$'),
            "job {} has malformed pay rate '{}'",
            job.id,
            job.pay_rate
        );
    }
    Ok(())
}
