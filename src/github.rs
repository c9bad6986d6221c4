// GitHub REST client.
// One unauthenticated endpoint: repository metadata by `owner/name`.

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::error::{RepoCardError, Result};
use crate::models::Repo;

const GITHUB_API: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("repocard/", env!("CARGO_PKG_VERSION"));

/// Error document GitHub returns alongside non-200 statuses.
#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GithubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(GITHUB_API)
    }

    /// Client against an alternate API root. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetch repository metadata. Exactly one attempt, no timeout.
    pub async fn fetch_repo(&self, owner_repo: &str) -> Result<Repo> {
        let url = format!("{}/repos/{owner_repo}", self.base_url);
        debug!(%url, "fetching repository metadata");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::OK {
            Ok(response.json().await?)
        } else {
            let message = response
                .json::<ApiError>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("GitHub returned HTTP {status}"));
            Err(RepoCardError::Github { message })
        }
    }
}
