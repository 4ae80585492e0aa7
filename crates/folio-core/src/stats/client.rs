use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use url::Url;

use super::models::RepoRecord;
use crate::config::StatsConfig;
use crate::{Error, Result};

const PER_PAGE: &str = "100";
const CLIENT_USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Anything that can list a user's repositories
#[async_trait::async_trait]
pub trait RepoSource: Send + Sync {
    async fn list_repos(&self, username: &str) -> Result<Vec<RepoRecord>>;
}

/// Repository API client (GitHub REST v3 shape)
pub struct GithubClient {
    client: Client,
    base_url: Url,
}

impl GithubClient {
    pub fn new(config: &StatsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .default_headers(Self::build_headers())
            .gzip(true)
            .build()?;

        // Trailing slash so joins append instead of replacing the last segment
        let base_url = Url::parse(&format!("{}/", config.api_base_url.trim_end_matches('/')))?;

        Ok(Self { client, base_url })
    }

    fn build_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        headers
    }

    /// `{base}/users/{username}/repos?per_page=100`
    pub fn repos_url(&self, username: &str) -> Result<Url> {
        let mut url = self.base_url.join(&format!("users/{}/repos", username))?;
        url.query_pairs_mut().append_pair("per_page", PER_PAGE);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl RepoSource for GithubClient {
    async fn list_repos(&self, username: &str) -> Result<Vec<RepoRecord>> {
        let url = self.repos_url(username)?;
        tracing::debug!("Fetching repositories from {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
