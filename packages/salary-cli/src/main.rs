//! Vacancy salary statistics CLI
//!
//! Prints, per programming language, how many vacancies hh.ru and SuperJob
//! report and the average salary of those that publish one.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cmd;

#[derive(Parser)]
#[command(name = "salary-stats")]
#[command(about = "Salary statistics for programming-language vacancies")]
#[command(version)]
struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Average salary per language (default)
    Report(cmd::report::ReportArgs),

    /// hh.ru vacancy counts over all time and the last N days
    Count(cmd::count::CountArgs),

    /// Developer vacancy titles from SuperJob
    Titles(cmd::titles::TitlesArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.quiet);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Report(args)) => cmd::report::run(args).await,
        Some(Commands::Count(args)) => cmd::count::run(args).await,
        Some(Commands::Titles(args)) => cmd::titles::run(args).await,
        None => cmd::report::run(cmd::report::ReportArgs::default()).await,
    }
}

fn init_tracing(quiet: bool) {
    let default_filter = if quiet {
        "warn"
    } else {
        "info,salary_stats=debug,hh_client=info,superjob_client=info"
    };

    // Logs go to stderr; stdout carries the tables.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
