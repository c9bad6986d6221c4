// Error types for repocard.
// Covers GitHub API failures, cache persistence, and terminal IO.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoCardError {
    #[error("GitHub API error: {0}")]
    Http(#[from] reqwest::Error),

    /// Message from a non-200 GitHub response, surfaced verbatim.
    #[error("{message}")]
    Github { message: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not determine a cache directory for this platform")]
    CacheDir,
}

pub type Result<T> = std::result::Result<T, RepoCardError>;
