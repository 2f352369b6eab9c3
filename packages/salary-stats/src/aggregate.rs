//! Per-language salary statistics.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::SourceSettings;
use crate::error::FetchError;
use crate::pager::Pager;
use crate::salary::estimate_salary;
use crate::traits::JobBoard;

/// Summary for one language on one board.
///
/// `found` is the board's own total for the query; `processed` counts only
/// listings that produced an estimate, so it can exceed or trail `found`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LanguageStats {
    pub found: u64,
    pub processed: u64,
    pub average: u64,
}

impl LanguageStats {
    pub fn from_estimates(found: u64, estimates: &[f64]) -> Self {
        if estimates.is_empty() {
            return Self {
                found,
                processed: 0,
                average: 0,
            };
        }

        let sum: f64 = estimates.iter().sum();
        Self {
            found,
            processed: estimates.len() as u64,
            average: (sum / estimates.len() as f64).round() as u64,
        }
    }
}

/// Language name to statistics, in the order the languages were given.
pub type LanguageReport = IndexMap<String, LanguageStats>;

/// Fetch and summarize one language. A failed fetch reports zeros.
pub async fn language_stats<B>(board: &B, language: &str, settings: &SourceSettings) -> LanguageStats
where
    B: JobBoard + ?Sized,
{
    match collect_estimates(board, language, settings).await {
        Ok((found, estimates)) => LanguageStats::from_estimates(found, &estimates),
        Err(e) => {
            warn!(
                board = board.name(),
                language,
                error = %e,
                "Fetch failed, reporting no vacancies"
            );
            LanguageStats::default()
        }
    }
}

/// Run [`language_stats`] for every language, one after another.
pub async fn collect_stats<B>(board: &B, languages: &[String], settings: &SourceSettings) -> LanguageReport
where
    B: JobBoard + ?Sized,
{
    let mut report = LanguageReport::with_capacity(languages.len());
    for language in languages {
        let stats = language_stats(board, language, settings).await;
        info!(
            board = board.name(),
            language = %language,
            found = stats.found,
            processed = stats.processed,
            average = stats.average,
            "Language processed"
        );
        report.insert(language.clone(), stats);
    }
    report
}

async fn collect_estimates<B>(
    board: &B,
    language: &str,
    settings: &SourceSettings,
) -> Result<(u64, Vec<f64>), FetchError>
where
    B: JobBoard + ?Sized,
{
    let mut pager = Pager::new(board, settings.query_for(language), settings.max_pages);
    let mut found = 0;
    let mut estimates = Vec::new();

    while let Some(batch) = pager.next_page().await? {
        found = batch.total_found;
        estimates.extend(
            batch
                .listings
                .iter()
                .filter_map(|listing| estimate_salary(listing, &settings.currency)),
        );

        if let Some(cap) = settings.max_processed {
            if estimates.len() >= cap {
                estimates.truncate(cap);
                break;
            }
        }
    }

    Ok((found, estimates))
}
