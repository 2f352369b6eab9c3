use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use salary_stats::{
    collect_stats, render_table, ConfigError, Credentials, JobBoard, LanguageReport,
    SourceSettings, StatsConfig,
};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Source {
    Hh,
    Superjob,
    #[default]
    All,
}

impl Source {
    fn includes_hh(self) -> bool {
        matches!(self, Source::Hh | Source::All)
    }

    fn includes_superjob(self) -> bool {
        matches!(self, Source::Superjob | Source::All)
    }
}

#[derive(Debug, Default, Args)]
pub struct ReportArgs {
    /// Which job board to query
    #[arg(long, value_enum, default_value_t = Source::All)]
    pub source: Source,

    /// Language to survey (repeatable; defaults to the built-in list)
    #[arg(short, long = "language")]
    pub languages: Vec<String>,

    /// Only vacancies published within the last N days
    #[arg(long)]
    pub period: Option<u32>,

    /// Vacancies requested per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Give up on a language after this many pages
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Stop once this many salaries are collected for a language
    #[arg(long)]
    pub max_processed: Option<usize>,

    /// Print JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

impl ReportArgs {
    fn apply(&self, config: &mut StatsConfig) {
        if !self.languages.is_empty() {
            config.languages = self.languages.clone();
        }
        for settings in [&mut config.headhunter, &mut config.superjob] {
            if let Some(period) = self.period {
                settings.recency_days = Some(period);
            }
            if let Some(page_size) = self.page_size {
                settings.page_size = page_size;
            }
            if let Some(max_pages) = self.max_pages {
                settings.max_pages = max_pages;
            }
            if self.max_processed.is_some() {
                settings.max_processed = self.max_processed;
            }
        }
    }
}

pub async fn run(args: ReportArgs) -> Result<()> {
    let mut config = StatsConfig::default();
    args.apply(&mut config);
    let credentials = Credentials::from_env().context("Failed to load configuration")?;

    if args.source.includes_hh() {
        let board = credentials.headhunter_board();
        if let Some(report) =
            collect_source("HeadHunter", board, &config.languages, &config.headhunter).await
        {
            print_report("HeadHunter Moscow", &report, args.json)?;
        }
    }

    if args.source.includes_superjob() {
        let board = credentials.superjob_board(config.superjob_catalogue);
        if let Some(report) =
            collect_source("SuperJob", board, &config.languages, &config.superjob).await
        {
            print_report("SuperJob Moscow", &report, args.json)?;
        }
    }

    Ok(())
}

/// Report for one source, or `None` (logged) when its board can't be built.
async fn collect_source<B: JobBoard>(
    source: &str,
    board: Result<B, ConfigError>,
    languages: &[String],
    settings: &SourceSettings,
) -> Option<LanguageReport> {
    match board {
        Ok(board) => {
            info!(source, languages = languages.len(), "Collecting statistics");
            Some(collect_stats(&board, languages, settings).await)
        }
        Err(e) => {
            error!(source, error = %e, "Skipping source");
            None
        }
    }
}

fn print_report(title: &str, report: &LanguageReport, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({ "source": title, "languages": report });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", render_table(title, report));
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use salary_stats::testing::{listing, ScriptedBoard};
    use salary_stats::LanguageStats;

    #[test]
    fn overrides_apply_to_both_sources() {
        let args = ReportArgs {
            languages: vec!["Rust".into()],
            period: Some(7),
            page_size: Some(50),
            max_processed: Some(1000),
            ..Default::default()
        };
        let mut config = StatsConfig::default();
        args.apply(&mut config);

        assert_eq!(config.languages, vec!["Rust"]);
        for settings in [&config.headhunter, &config.superjob] {
            assert_eq!(settings.recency_days, Some(7));
            assert_eq!(settings.page_size, 50);
            assert_eq!(settings.max_processed, Some(1000));
            assert_eq!(settings.max_pages, 100);
        }
        assert_eq!(config.headhunter.currency, "RUR");
        assert_eq!(config.superjob.currency, "rub");
    }

    #[test]
    fn no_overrides_keep_defaults() {
        let mut config = StatsConfig::default();
        ReportArgs::default().apply(&mut config);
        assert_eq!(config, StatsConfig::default());
    }

    #[tokio::test]
    async fn missing_superjob_key_skips_only_superjob() {
        let credentials = Credentials::from_lookup(|_| None).unwrap();
        let languages = vec!["Python".to_string()];
        let settings = SourceSettings {
            query_prefix: None,
            ..SourceSettings::headhunter()
        };
        let hh = ScriptedBoard::new("HeadHunter").with_pages(
            "Python",
            500,
            vec![vec![listing(Some(90000.0), None, "RUR")]],
        );

        let superjob = collect_source(
            "SuperJob",
            credentials.superjob_board(Some(48)),
            &languages,
            &SourceSettings::superjob(),
        )
        .await;
        let headhunter = collect_source("HeadHunter", Ok(hh.clone()), &languages, &settings).await;

        assert!(superjob.is_none());
        let report = headhunter.unwrap();
        assert_eq!(
            report["Python"],
            LanguageStats {
                found: 500,
                processed: 1,
                average: 108000
            }
        );
        assert_eq!(hh.call_count(), 1);
    }
}
