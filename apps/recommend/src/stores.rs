//! Store collaborators — the two read-side interfaces the pipeline
//! depends on. Backends are injected as trait objects so the ranking
//! core carries no database client; the in-memory implementations back
//! the unit tests and embedded use.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::job::Job;
use crate::models::resume::Resume;

// ────────────────────────────────────────────────────────────────────────────
// Trait definitions
// ────────────────────────────────────────────────────────────────────────────

/// Read access to stored resumes, keyed by caller identity.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Returns the caller's resume, or `None` if they never created one.
    async fn fetch_resume(&self, user_id: &str) -> Result<Option<Resume>>;
}

/// Read access to job postings.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Returns up to `limit` postings ordered by creation time descending.
    async fn recent_jobs(&self, limit: usize) -> Result<Vec<Job>>;
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory implementations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryResumeStore {
    resumes: HashMap<String, Resume>,
}

impl InMemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user_id: impl Into<String>, resume: Resume) {
        self.resumes.insert(user_id.into(), resume);
    }
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn fetch_resume(&self, user_id: &str) -> Result<Option<Resume>> {
        Ok(self.resumes.get(user_id).cloned())
    }
}

/// Holds postings in insertion order; `recent_jobs` re-sorts by
/// `created_at` descending so the ordering contract holds for fixture
/// data too.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobStore {
    jobs: Vec<Job>,
}

impl InMemoryJobStore {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    pub fn push(&mut self, job: Job) {
        self.jobs.push(job);
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn recent_jobs(&self, limit: usize) -> Result<Vec<Job>> {
        let mut jobs = self.jobs.clone();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        jobs.truncate(limit);
        Ok(jobs)
    }
}
