//! Quick looks at a board beyond salary statistics: vacancy counts over two
//! time windows, and developer job titles.

use chrono::Utc;
use tracing::warn;

use crate::error::FetchError;
use crate::pager::Pager;
use crate::traits::JobBoard;
use crate::types::{Listing, SearchQuery};

/// Vacancy totals for a query over all time and over a recent window.
#[derive(Debug, Clone, PartialEq)]
pub struct VacancyCounts {
    pub all_time: u64,
    pub recent: u64,
    pub recency_days: u32,
    /// First listings of the recent window, in board order.
    pub recent_sample: Vec<Listing>,
}

/// Read the totals from the first page of each window.
pub async fn count_vacancies<B>(
    board: &B,
    query: &SearchQuery,
    recency_days: u32,
    sample_size: usize,
) -> Result<VacancyCounts, FetchError>
where
    B: JobBoard + ?Sized,
{
    let all_time_query = SearchQuery {
        recency_days: None,
        published_after: None,
        ..query.clone()
    };
    let all_time = board.fetch_page(&all_time_query, 0).await?;

    let recent_query = SearchQuery {
        recency_days: Some(recency_days),
        published_after: None,
        ..query.clone()
    }
    .anchored(Utc::now());
    let recent = board.fetch_page(&recent_query, 0).await?;

    Ok(VacancyCounts {
        all_time: all_time.total_found,
        recent: recent.total_found,
        recency_days,
        recent_sample: recent.listings.into_iter().take(sample_size).collect(),
    })
}

const DEVELOPER_TITLES: &[&str] = &["программист", "разработчик"];

/// Whether a job title names a programmer or developer position.
pub fn is_developer_title(title: &str) -> bool {
    let title = title.to_lowercase();
    DEVELOPER_TITLES.iter().any(|word| title.contains(word))
}

/// `"<title>, <city>"` for every developer listing of every language.
///
/// A language whose fetch fails is skipped with a warning.
pub async fn developer_titles<B>(
    board: &B,
    languages: &[String],
    query_for: impl Fn(&str) -> SearchQuery,
    max_pages: u32,
) -> Vec<String>
where
    B: JobBoard + ?Sized,
{
    let mut titles = Vec::new();
    for language in languages {
        let batches = match Pager::new(board, query_for(language), max_pages)
            .collect_all()
            .await
        {
            Ok(batches) => batches,
            Err(e) => {
                warn!(board = board.name(), language = %language, error = %e, "Skipping language");
                continue;
            }
        };

        titles.extend(
            batches
                .iter()
                .flat_map(|b| b.listings.iter())
                .filter(|l| is_developer_title(&l.title))
                .map(|l| match &l.city {
                    Some(city) => format!("{}, {}", l.title, city),
                    None => l.title.clone(),
                }),
        );
    }
    titles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedBoard;
    use crate::types::BoardPage;

    fn titled(title: &str, city: Option<&str>) -> Listing {
        Listing {
            title: title.to_string(),
            city: city.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn developer_titles_are_case_insensitive() {
        assert!(is_developer_title("Ведущий Программист C++"));
        assert!(is_developer_title("РАЗРАБОТЧИК Python"));
        assert!(!is_developer_title("Тестировщик"));
    }

    #[tokio::test]
    async fn counts_both_windows() {
        // The scripted board keys on text only, so both windows see one script.
        let board = ScriptedBoard::new("hh").with_raw_pages(
            "программист",
            vec![BoardPage {
                listings: (0..8).map(|i| titled(&format!("Job {i}"), None)).collect(),
                total_found: 1200,
                has_more: true,
            }],
        );

        let counts = count_vacancies(&board, &SearchQuery::new("программист", 1), 30, 5)
            .await
            .unwrap();

        assert_eq!(counts.all_time, 1200);
        assert_eq!(counts.recent, 1200);
        assert_eq!(counts.recent_sample.len(), 5);
        let queries = board.queries();
        let windows: Vec<Option<u32>> = queries.iter().map(|q| q.recency_days).collect();
        assert_eq!(windows, vec![None, Some(30)]);
        assert!(queries[0].published_after.is_none());
        assert!(queries[1].published_after.is_some());
    }

    #[tokio::test]
    async fn titles_filter_and_skip_failures() {
        let board = ScriptedBoard::new("sj")
            .with_pages(
                "Python",
                3,
                vec![
                    vec![titled("Программист Python", Some("Москва")), titled("Аналитик", Some("Москва"))],
                    vec![titled("Python-разработчик", None)],
                ],
            )
            .with_failure("Java", 0, "503");
        let languages = vec!["Java".to_string(), "Python".to_string()];

        let titles = developer_titles(&board, &languages, |l| SearchQuery::new(l, 4), 10).await;

        assert_eq!(titles, vec!["Программист Python, Москва", "Python-разработчик"]);
    }
}
