use async_trait::async_trait;
use superjob_client::{SuperJobClient, SuperJobError, Vacancy, VacancySearch};

use crate::error::FetchError;
use crate::traits::JobBoard;
use crate::types::{BoardPage, Listing, SalaryRange, SearchQuery};

const NAME: &str = "SuperJob";

/// SuperJob vacancy search. Pagination ends when `more` is false.
///
/// The publication window is taken from [`SearchQuery::published_after`];
/// an unanchored query is sent without one.
#[derive(Debug)]
pub struct SuperJobBoard {
    client: SuperJobClient,
    catalogue: Option<u32>,
}

impl SuperJobBoard {
    pub fn new(client: SuperJobClient) -> Self {
        Self {
            client,
            catalogue: None,
        }
    }

    /// Restrict searches to one catalogue section.
    pub fn with_catalogue(mut self, catalogue: Option<u32>) -> Self {
        self.catalogue = catalogue;
        self
    }

    fn search_for(&self, query: &SearchQuery, page: u32) -> VacancySearch {
        VacancySearch {
            keyword: query.text.clone(),
            town: query.region,
            catalogues: self.catalogue,
            page,
            count: query.page_size,
            date_published_from: query.published_after.map(|t| t.timestamp()),
            no_agreement: query.require_salary.then_some(1),
        }
    }
}

#[async_trait]
impl JobBoard for SuperJobBoard {
    fn name(&self) -> &str {
        NAME
    }

    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<BoardPage, FetchError> {
        let response = self
            .client
            .search_vacancies(&self.search_for(query, page))
            .await
            .map_err(fetch_error)?;

        Ok(BoardPage {
            has_more: response.more,
            total_found: response.total,
            listings: response.objects.into_iter().map(Listing::from).collect(),
        })
    }
}

impl From<Vacancy> for Listing {
    fn from(vacancy: Vacancy) -> Self {
        let published = vacancy.payment_from.is_some() || vacancy.payment_to.is_some();
        Listing {
            id: vacancy.id.to_string(),
            title: vacancy.profession,
            salary: published.then(|| SalaryRange {
                from: vacancy.payment_from,
                to: vacancy.payment_to,
                currency: vacancy.currency,
            }),
            employer: vacancy.firm_name,
            city: vacancy.town.map(|t| t.title),
            url: vacancy.link,
        }
    }
}

fn fetch_error(err: SuperJobError) -> FetchError {
    match err {
        SuperJobError::Api { status, message } => FetchError::Status {
            board: NAME.to_string(),
            status,
            message,
        },
        SuperJobError::Http(e) => FetchError::Transport {
            board: NAME.to_string(),
            source: Box::new(e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::Pager;
    use chrono::{Duration, TimeZone, Utc};
    use mockito::Matcher;

    #[test]
    fn query_maps_filters() {
        let client = SuperJobClient::new("key").unwrap();
        let board = SuperJobBoard::new(client).with_catalogue(Some(48));
        let mut query = SearchQuery::new("Python", 4);
        query.recency_days = Some(30);
        query.require_salary = true;
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let query = query.anchored(now);

        let search = board.search_for(&query, 2);
        assert_eq!(search.keyword, "Python");
        assert_eq!(search.town, 4);
        assert_eq!(search.catalogues, Some(48));
        assert_eq!(search.page, 2);
        assert_eq!(search.no_agreement, Some(1));

        assert_eq!(
            search.date_published_from,
            Some((now - Duration::days(30)).timestamp())
        );
        assert_eq!(board.search_for(&query, 3).date_published_from, search.date_published_from);
    }

    #[test]
    fn zero_payments_still_map_to_range() {
        let vacancy: Vacancy = serde_json::from_str(
            r#"{"id": 5, "profession": "Разработчик", "payment_from": 0,
                "payment_to": 0, "currency": "rub"}"#,
        )
        .unwrap();
        let listing = Listing::from(vacancy);
        let salary = listing.salary.unwrap();
        assert_eq!(salary.from, Some(0.0));
        assert_eq!(crate::salary::predict_salary(salary.from, salary.to), None);
    }

    #[tokio::test]
    async fn follows_more_flag() {
        let mut server = mockito::Server::new_async().await;
        let mut mocks = Vec::new();
        for (page, more) in [(0, true), (1, true), (2, false)] {
            let mock = server
                .mock("GET", "/2.0/vacancies/")
                .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
                .with_status(200)
                .with_body(format!(
                    r#"{{"objects": [{{"id": {page}, "profession": "Программист",
                        "payment_from": 100000, "payment_to": 0, "currency": "rub"}}],
                       "total": 3, "more": {more}}}"#
                ))
                .expect(1)
                .create_async()
                .await;
            mocks.push(mock);
        }

        let client = SuperJobClient::new("key").unwrap().with_base_url(server.url());
        let board = SuperJobBoard::new(client);
        let batches = Pager::new(&board, SearchQuery::new("Python", 4), 100)
            .collect_all()
            .await
            .unwrap();

        for mock in &mocks {
            mock.assert_async().await;
        }
        assert_eq!(batches.len(), 3);
        assert!(batches.iter().all(|b| b.total_found == 3));
    }
}
