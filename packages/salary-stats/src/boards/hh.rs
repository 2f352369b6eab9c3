use async_trait::async_trait;
use hh_client::{HhClient, HhError, Vacancy, VacancySearch};

use crate::error::FetchError;
use crate::traits::JobBoard;
use crate::types::{BoardPage, Listing, SalaryRange, SearchQuery};

const NAME: &str = "HeadHunter";

/// hh.ru vacancy search. Pagination ends when `page + 1 >= pages`.
#[derive(Debug)]
pub struct HeadHunterBoard {
    client: HhClient,
}

impl HeadHunterBoard {
    pub fn new(client: HhClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JobBoard for HeadHunterBoard {
    fn name(&self) -> &str {
        NAME
    }

    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<BoardPage, FetchError> {
        let search = VacancySearch {
            text: query.text.clone(),
            area: query.region,
            page,
            per_page: query.page_size,
            period: query.recency_days,
            only_with_salary: query.require_salary.then_some(true),
        };

        let response = self
            .client
            .search_vacancies(&search)
            .await
            .map_err(fetch_error)?;

        Ok(BoardPage {
            has_more: response.has_next(),
            total_found: response.found,
            listings: response.items.into_iter().map(Listing::from).collect(),
        })
    }
}

impl From<Vacancy> for Listing {
    fn from(vacancy: Vacancy) -> Self {
        Listing {
            id: vacancy.id,
            title: vacancy.name,
            salary: vacancy.salary.map(|s| SalaryRange {
                from: s.from,
                to: s.to,
                currency: s.currency,
            }),
            employer: vacancy.employer.map(|e| e.name),
            city: vacancy.area.map(|a| a.name),
            url: vacancy.alternate_url,
        }
    }
}

fn fetch_error(err: HhError) -> FetchError {
    match err {
        HhError::Api { status, message } => FetchError::Status {
            board: NAME.to_string(),
            status,
            message,
        },
        HhError::Http(e) => FetchError::Transport {
            board: NAME.to_string(),
            source: Box::new(e),
        },
    }
}
