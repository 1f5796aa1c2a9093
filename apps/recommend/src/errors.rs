use thiserror::Error;

/// Failure conditions surfaced by the recommendation pipeline.
///
/// Every condition is terminal for the request: no stage retries, and no
/// partial results are returned. The transport layer (out of scope here)
/// maps each condition to a status via [`RecommendError::status_hint`].
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The caller has no stored resume. Expected outcome, not a fault.
    #[error("No resume found")]
    NoResumeFound,

    /// A resume exists but yields no usable text after normalization.
    #[error("No meaningful resume content found")]
    EmptyResumeContent,

    /// The job store currently holds zero postings.
    #[error("No jobs found")]
    NoJobsFound,

    /// Every candidate posting scored zero against the resume.
    #[error("No relevant jobs found")]
    NoRelevantJobs,

    /// A store read failed. Logged at the failure site; surfaced to the
    /// caller as a generic internal error.
    #[error("Upstream fetch failed: {0}")]
    UpstreamFetchFailure(#[from] anyhow::Error),
}

impl RecommendError {
    /// Stable machine-readable code for the caller's error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            RecommendError::NoResumeFound => "NO_RESUME_FOUND",
            RecommendError::EmptyResumeContent => "EMPTY_RESUME_CONTENT",
            RecommendError::NoJobsFound => "NO_JOBS_FOUND",
            RecommendError::NoRelevantJobs => "NO_RELEVANT_JOBS",
            RecommendError::UpstreamFetchFailure(_) => "INTERNAL_ERROR",
        }
    }

    /// Advisory HTTP status for the caller's response mapping.
    pub fn status_hint(&self) -> u16 {
        match self {
            RecommendError::NoResumeFound => 404,
            RecommendError::EmptyResumeContent => 400,
            RecommendError::NoJobsFound => 404,
            RecommendError::NoRelevantJobs => 404,
            RecommendError::UpstreamFetchFailure(_) => 500,
        }
    }
}
