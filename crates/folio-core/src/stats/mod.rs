//! Repository statistics: fetch, aggregate, fall back
//!
//! The fetch is the only operation that waits on external I/O. Hosts run it
//! on its own task and always get a value set back: the aggregated remote
//! numbers, or the configured fallback when anything goes wrong.

mod aggregate;
mod client;
mod models;

pub use aggregate::{aggregate, is_discord_bot, is_web_app, open_source_percent};
pub use client::{GithubClient, RepoSource};
pub use models::{PortfolioStats, RepoRecord, StatMinimums, StatsOrigin, StatsReport};

use tracing::{info, warn};

use crate::config::StatsConfig;

/// Fetch and aggregate, replacing any failure with the fallback set
pub async fn fetch_or_fallback(source: &dyn RepoSource, config: &StatsConfig) -> StatsReport {
    match source.list_repos(&config.username).await {
        Ok(repos) => {
            let stats = aggregate(&repos, &config.minimums);
            info!(
                user = %config.username,
                repos = repos.len(),
                "Fetched repository statistics"
            );
            StatsReport {
                stats,
                origin: StatsOrigin::Remote,
            }
        }
        Err(e) => {
            warn!(user = %config.username, error = %e, "Repository statistics unavailable, using fallback");
            StatsReport {
                stats: config.fallback.clone(),
                origin: StatsOrigin::Fallback,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Result};

    struct StaticSource(Vec<RepoRecord>);

    #[async_trait::async_trait]
    impl RepoSource for StaticSource {
        async fn list_repos(&self, _username: &str) -> Result<Vec<RepoRecord>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait::async_trait]
    impl RepoSource for FailingSource {
        async fn list_repos(&self, username: &str) -> Result<Vec<RepoRecord>> {
            Err(Error::Api {
                status: 503,
                url: format!("https://example.invalid/users/{}/repos", username),
            })
        }
    }

    #[tokio::test]
    async fn test_remote_stats_are_aggregated() {
        let source = StaticSource(vec![
            RepoRecord::new("discord-bot", Some("TypeScript"), false),
            RepoRecord::new("x", Some("Java"), true),
        ]);
        let report = fetch_or_fallback(&source, &StatsConfig::default()).await;

        assert_eq!(report.origin, StatsOrigin::Remote);
        assert!(report.stats.discord_bots >= 3);
        assert_eq!(report.stats.open_source_percent, 50);
    }

    #[tokio::test]
    async fn test_failure_uses_fallback() {
        let config = StatsConfig::default();
        let report = fetch_or_fallback(&FailingSource, &config).await;

        assert_eq!(report.origin, StatsOrigin::Fallback);
        assert_eq!(report.stats, config.fallback);
    }

    #[tokio::test]
    async fn test_unreachable_api_uses_fallback() {
        let config = StatsConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 2,
            ..StatsConfig::default()
        };
        let client = GithubClient::new(&config).unwrap();
        let report = fetch_or_fallback(&client, &config).await;

        assert_eq!(report.origin, StatsOrigin::Fallback);
        assert_eq!(report.stats, config.fallback);
    }
}
