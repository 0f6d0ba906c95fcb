use tokio::sync::RwLock;

use crate::models::job::Job;

/// The in-memory job cache. Owned by `JobFeed`; readers get cloned snapshots so the
/// matching pipeline never holds the lock.
#[derive(Debug, Default)]
pub struct JobStore {
    jobs: RwLock<Vec<Job>>,
}

impl JobStore {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs: RwLock::new(jobs),
        }
    }

    pub async fn snapshot(&self) -> Vec<Job> {
        self.jobs.read().await.clone()
    }

    pub async fn find(&self, id: &str) -> Option<Job> {
        self.jobs.read().await.iter().find(|j| j.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    /// Puts `batch` in front of the cached jobs. Returns the updated list.
    pub async fn prepend(&self, batch: Vec<Job>) -> Vec<Job> {
        let mut jobs = self.jobs.write().await;
        let mut updated = batch;
        updated.append(&mut jobs);
        *jobs = updated;
        jobs.clone()
    }

    /// Adds `batch` after the cached jobs. Returns the updated list.
    pub async fn append(&self, mut batch: Vec<Job>) -> Vec<Job> {
        let mut jobs = self.jobs.write().await;
        jobs.append(&mut batch);
        jobs.clone()
    }

    pub async fn replace(&self, replacement: Vec<Job>) {
        *self.jobs.write().await = replacement;
    }
}
