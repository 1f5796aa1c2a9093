use anyhow::{Context, Result};

/// Ranking tunables loaded from environment variables.
/// Both caps default to the production values (100 candidates, top 10)
/// when the variables are unset.
#[derive(Debug, Clone)]
pub struct RecommendConfig {
    /// Maximum number of most-recent postings considered per request.
    pub max_jobs: usize,
    /// Number of scored postings returned to the caller.
    pub top_k: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            max_jobs: 100,
            top_k: 10,
        }
    }
}

impl RecommendConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(RecommendConfig {
            max_jobs: env_or("RECOMMEND_MAX_JOBS", 100)?,
            top_k: env_or("RECOMMEND_TOP_K", 10)?,
        })
    }
}

fn env_or(key: &str, default: usize) -> Result<usize> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("'{key}' must be a non-negative integer")),
        Err(_) => Ok(default),
    }
}
