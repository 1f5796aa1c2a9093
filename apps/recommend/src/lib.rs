//! Content-based job recommendation core.
//!
//! Ranks the most recent job postings against a caller's stored resume
//! using raw term-count vectors over a shared per-request vocabulary and
//! cosine similarity, then returns the top matches. Storage, auth, and
//! the HTTP surface live with the caller; this crate only consumes the
//! injected [`stores::ResumeStore`] / [`stores::JobStore`] collaborators
//! and produces a [`models::job::SuggestedJobs`] payload or a typed
//! [`errors::RecommendError`].

pub mod config;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod similarity;
pub mod stores;
pub mod text;
pub mod vectorize;

pub use config::RecommendConfig;
pub use errors::RecommendError;
pub use models::job::{Job, ScoredJob, SuggestedJobs};
pub use models::resume::Resume;
pub use pipeline::suggest_jobs;
pub use stores::{JobStore, ResumeStore};
