use std::collections::HashSet;

use super::models::{PortfolioStats, RepoRecord, StatMinimums};

const BOT_KEYWORDS: &[&str] = &["discord", "bot"];
const WEB_KEYWORDS: &[&str] = &["web", "site", "react", "frontend", "dashboard"];
const WEB_LANGUAGES: &[&str] = &["typescript", "javascript", "html", "css", "vue"];

fn mentions(repo: &RepoRecord, keywords: &[&str]) -> bool {
    let name = repo.name.to_lowercase();
    keywords.iter().any(|k| {
        name.contains(k) || repo.topics.iter().any(|t| t.to_lowercase().contains(k))
    })
}

/// Name or topics mention Discord or a bot
pub fn is_discord_bot(repo: &RepoRecord) -> bool {
    mentions(repo, BOT_KEYWORDS)
}

/// Web keywords in name/topics, or a web language, for anything not a bot
pub fn is_web_app(repo: &RepoRecord) -> bool {
    if is_discord_bot(repo) {
        return false;
    }
    let web_language = repo
        .language
        .as_deref()
        .map(|l| WEB_LANGUAGES.contains(&l.to_lowercase().as_str()))
        .unwrap_or(false);
    web_language || mentions(repo, WEB_KEYWORDS)
}

/// `round(100 * public / total)`, 100 for an empty list
pub fn open_source_percent(public: usize, total: usize) -> u64 {
    if total == 0 {
        return 100;
    }
    (100.0 * public as f64 / total as f64).round() as u64
}

/// Classify and count repositories, flooring each count at its minimum
pub fn aggregate(repos: &[RepoRecord], minimums: &StatMinimums) -> PortfolioStats {
    let bots = repos.iter().filter(|r| is_discord_bot(r)).count() as u64;
    let web = repos.iter().filter(|r| is_web_app(r)).count() as u64;
    let languages = repos
        .iter()
        .filter_map(|r| r.language.as_deref())
        .map(str::to_lowercase)
        .collect::<HashSet<_>>()
        .len() as u64;
    let public = repos.iter().filter(|r| !r.is_private).count();

    PortfolioStats {
        total_projects: (repos.len() as u64).max(minimums.total_projects),
        discord_bots: bots.max(minimums.discord_bots),
        web_apps: web.max(minimums.web_apps),
        languages: languages.max(minimums.languages),
        open_source_percent: open_source_percent(public, repos.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_repo_example() {
        let repos = vec![
            RepoRecord::new("discord-bot", Some("TypeScript"), false),
            RepoRecord::new("x", Some("Java"), true),
        ];
        let stats = aggregate(&repos, &StatMinimums::default());

        assert!(stats.discord_bots >= 3);
        assert_eq!(stats.open_source_percent, 50);
        assert_eq!(stats.total_projects, 3);
    }

    #[test]
    fn test_counts_above_minimums() {
        let repos: Vec<RepoRecord> = (0..5)
            .map(|i| RepoRecord::new(&format!("bot-{}", i), Some("Rust"), false))
            .chain((0..4).map(|i| {
                RepoRecord::new(&format!("app-{}", i), Some("JavaScript"), false)
            }))
            .chain([
                RepoRecord::new("notes", Some("Python"), false),
                RepoRecord::new("tool", Some("Go"), false),
            ])
            .collect();
        let stats = aggregate(&repos, &StatMinimums::default());

        assert_eq!(stats.total_projects, 11);
        assert_eq!(stats.discord_bots, 5);
        assert_eq!(stats.web_apps, 4);
        assert_eq!(stats.languages, 4);
        assert_eq!(stats.open_source_percent, 100);
    }

    #[test]
    fn test_topics_classify() {
        let repo = RepoRecord::new("nexium", Some("TypeScript"), false).with_topics(&["Discord"]);
        assert!(is_discord_bot(&repo));
        assert!(!is_web_app(&repo));

        let repo = RepoRecord::new("eureka", None, false).with_topics(&["react", "spa"]);
        assert!(is_web_app(&repo));
    }

    #[test]
    fn test_empty_list() {
        let stats = aggregate(&[], &StatMinimums::default());
        assert_eq!(stats.open_source_percent, 100);
        assert_eq!(stats.total_projects, 3);
        assert_eq!(stats.languages, 3);
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(open_source_percent(1, 3), 33);
        assert_eq!(open_source_percent(2, 3), 67);
        assert_eq!(open_source_percent(0, 4), 0);
    }
}
