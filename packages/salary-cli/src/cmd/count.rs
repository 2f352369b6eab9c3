use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use salary_stats::{count_vacancies, Credentials, SearchQuery};

#[derive(Debug, Args)]
pub struct CountArgs {
    /// Search text
    #[arg(long, default_value = "программист")]
    pub text: String,

    /// hh.ru area id (1 = Moscow)
    #[arg(long, default_value_t = 1)]
    pub area: u32,

    /// Recent window in days
    #[arg(long, default_value_t = 30)]
    pub period: u32,

    /// How many recent vacancies to show
    #[arg(long, default_value_t = 5)]
    pub sample: usize,
}

pub async fn run(args: CountArgs) -> Result<()> {
    let board = Credentials::from_env()
        .context("Failed to load configuration")?
        .headhunter_board()?;

    let mut query = SearchQuery::new(&args.text, args.area);
    query.page_size = args.sample.clamp(1, 100) as u32;

    let counts = count_vacancies(&board, &query, args.period, args.sample)
        .await
        .context("Failed to count hh.ru vacancies")?;

    println!("{} {}", "All time:".bright_yellow(), counts.all_time);
    println!(
        "{} {}",
        format!("Last {} days:", counts.recency_days).bright_yellow(),
        counts.recent
    );

    if counts.recent_sample.is_empty() {
        return Ok(());
    }

    println!();
    println!("{}", "Recent vacancies:".bold());
    for listing in &counts.recent_sample {
        println!("  {} {}", "Title:".dimmed(), listing.title);
        println!(
            "  {} {}",
            "Employer:".dimmed(),
            listing.employer.as_deref().unwrap_or("-")
        );
        println!("  {} {}", "City:".dimmed(), listing.city.as_deref().unwrap_or("-"));
        println!("  {} {}", "URL:".dimmed(), listing.url.as_deref().unwrap_or("-"));
        println!("  {}", "=".repeat(50));
    }

    Ok(())
}
