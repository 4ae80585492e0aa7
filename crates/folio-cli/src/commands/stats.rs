use anyhow::Result;

use folio_core::{
    stats::{fetch_or_fallback, GithubClient, StatsOrigin},
    AppConfig,
};

pub async fn run(config: &AppConfig, user: Option<String>, json: bool) -> Result<()> {
    let mut stats_config = config.stats.clone();
    if let Some(user) = user {
        stats_config.username = user;
    }

    let client = GithubClient::new(&stats_config)?;
    let report = fetch_or_fallback(&client, &stats_config).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.stats)?);
        return Ok(());
    }

    let origin = match report.origin {
        StatsOrigin::Remote => "live",
        StatsOrigin::Fallback => "fallback, API unreachable",
    };
    let stats = &report.stats;

    println!("Repository statistics for {} ({}):\n", stats_config.username, origin);
    println!("  Projects      {}+", stats.total_projects);
    println!("  Discord bots  {}+", stats.discord_bots);
    println!("  Web apps      {}+", stats.web_apps);
    println!("  Languages     {}+", stats.languages);
    println!("  Open source   {}%", stats.open_source_percent);

    Ok(())
}
