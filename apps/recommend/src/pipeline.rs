//! Ranking pipeline — gather, vectorize, score & select.
//!
//! Request-scoped and synchronous end to end: the vocabulary and vectors
//! live on the stack for one call and are never cached across requests.

use std::cmp::Ordering;

use tracing::{debug, error, info};

use crate::config::RecommendConfig;
use crate::errors::RecommendError;
use crate::models::job::{ScoredJob, SuggestedJobs};
use crate::similarity::cosine_similarity;
use crate::stores::{JobStore, ResumeStore};
use crate::text::{job_text, resume_text};
use crate::vectorize::term_frequency_vectors;

/// Runs the full recommendation pipeline for one caller.
///
/// Fetches the caller's resume and the `config.max_jobs` most recent
/// postings, vectorizes the combined corpus with the user document last,
/// scores each posting by cosine similarity against the user vector, and
/// returns at most `config.top_k` postings with positive scores in
/// descending score order. Fails fast with a typed error at every stage;
/// no retries, no partial results.
pub async fn suggest_jobs(
    resume_store: &dyn ResumeStore,
    job_store: &dyn JobStore,
    user_id: &str,
    config: &RecommendConfig,
) -> Result<SuggestedJobs, RecommendError> {
    // Gather. The two reads are independent, so issue them together.
    let (resume, jobs) = tokio::try_join!(
        resume_store.fetch_resume(user_id),
        job_store.recent_jobs(config.max_jobs),
    )
    .map_err(|e| {
        error!("Upstream fetch failed: {e:#}");
        RecommendError::UpstreamFetchFailure(e)
    })?;

    let resume = resume.ok_or(RecommendError::NoResumeFound)?;

    let user_doc = resume_text(&resume);
    if user_doc.is_empty() {
        return Err(RecommendError::EmptyResumeContent);
    }
    if jobs.is_empty() {
        return Err(RecommendError::NoJobsFound);
    }
    debug!("Gathered {} candidate postings for {user_id}", jobs.len());

    // Vectorize. The user document goes last; popping its vector leaves
    // the remaining vectors aligned with `jobs` in fetch order.
    let mut corpus: Vec<String> = jobs.iter().map(job_text).collect();
    corpus.push(user_doc);
    let (mut vectors, vocabulary) = term_frequency_vectors(&corpus);
    let user_vector = vectors.pop().unwrap_or_default();
    debug!("Built {} vectors over {} terms", vectors.len(), vocabulary.len());

    // Score & select. Stable sort keeps fetch order among equal scores.
    let mut scored: Vec<ScoredJob> = jobs
        .into_iter()
        .zip(vectors)
        .map(|(job, vector)| ScoredJob {
            similarity: cosine_similarity(&vector, &user_vector),
            job,
        })
        .filter(|s| s.similarity > 0.0)
        .collect();

    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    scored.truncate(config.top_k);

    if scored.is_empty() {
        return Err(RecommendError::NoRelevantJobs);
    }

    info!("Returning {} suggested postings for {user_id}", scored.len());
    Ok(SuggestedJobs { suggested: scored })
}
