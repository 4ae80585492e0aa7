use serde::{Deserialize, Serialize};

/// One repository as returned by the repository API
///
/// Unknown fields are ignored; `topics` may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default, rename = "private")]
    pub is_private: bool,
}

impl RepoRecord {
    pub fn new(name: &str, language: Option<&str>, is_private: bool) -> Self {
        Self {
            name: name.to_string(),
            language: language.map(str::to_string),
            topics: Vec::new(),
            is_private,
        }
    }

    pub fn with_topics(mut self, topics: &[&str]) -> Self {
        self.topics = topics.iter().map(|t| t.to_string()).collect();
        self
    }
}

/// Figures shown by the stat counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioStats {
    pub total_projects: u64,
    pub discord_bots: u64,
    pub web_apps: u64,
    pub languages: u64,
    pub open_source_percent: u64,
}

impl PortfolioStats {
    /// Static numbers shown when the API is unreachable
    pub fn fallback() -> Self {
        Self {
            total_projects: 15,
            discord_bots: 5,
            web_apps: 6,
            languages: 6,
            open_source_percent: 100,
        }
    }
}

impl Default for PortfolioStats {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Floor for each derived count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatMinimums {
    pub total_projects: u64,
    pub discord_bots: u64,
    pub web_apps: u64,
    pub languages: u64,
}

impl Default for StatMinimums {
    fn default() -> Self {
        Self {
            total_projects: 3,
            discord_bots: 3,
            web_apps: 2,
            languages: 3,
        }
    }
}

/// Where a value set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsOrigin {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    pub stats: PortfolioStats,
    pub origin: StatsOrigin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_payload() {
        let json = r#"[
            {"id": 1, "name": "discord-nexium", "language": "TypeScript",
             "topics": ["discord", "rpg"], "private": false, "fork": false},
            {"id": 2, "name": "dotfiles", "language": null, "private": false}
        ]"#;
        let repos: Vec<RepoRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].topics, vec!["discord", "rpg"]);
        assert_eq!(repos[1].language, None);
        assert!(repos[1].topics.is_empty());
        assert!(!repos[1].is_private);
    }

    #[test]
    fn test_malformed_payload_is_error() {
        let result: Result<Vec<RepoRecord>, _> = serde_json::from_str(r#"{"message": "Not Found"}"#);
        assert!(result.is_err());
    }
}
