use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use salary_stats::{developer_titles, Credentials, StatsConfig};
use tracing::info;

#[derive(Debug, Args)]
pub struct TitlesArgs {
    /// Language to search for (repeatable; defaults to the built-in list)
    #[arg(short, long = "language")]
    pub languages: Vec<String>,
}

pub async fn run(args: TitlesArgs) -> Result<()> {
    let mut config = StatsConfig::default();
    if !args.languages.is_empty() {
        config.languages = args.languages;
    }

    let board = Credentials::from_env()
        .context("Failed to load configuration")?
        .superjob_board(config.superjob_catalogue)
        .context("SuperJob is not configured")?;

    let settings = &config.superjob;
    info!(languages = config.languages.len(), "Collecting SuperJob vacancy titles");
    let titles = developer_titles(
        &board,
        &config.languages,
        |language| settings.query_for(language),
        settings.max_pages,
    )
    .await;

    println!("{}", "SuperJob vacancy titles:".bold());
    for title in &titles {
        println!("{}", title);
    }

    Ok(())
}
