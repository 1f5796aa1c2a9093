use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting as delivered by the job store. Field names follow the
/// camelCase document shape the store serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub experience: String,
    pub job_link: String,
    pub last_date: String,
    pub location: String,
    pub position_name: String,
    pub start_date: String,
    pub created_at: DateTime<Utc>,
}

/// A posting augmented with its cosine similarity to the user document.
/// Serializes as the original job fields plus `similarity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: Job,
    pub similarity: f64,
}

/// Success payload returned to the caller: the ordered top matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedJobs {
    pub suggested: Vec<ScoredJob>,
}
