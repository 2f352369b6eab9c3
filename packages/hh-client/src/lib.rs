//! Pure HeadHunter REST API client.
//!
//! A minimal client for the public `api.hh.ru` vacancy search. No API key is
//! needed, but hh.ru rejects requests without a descriptive `User-Agent`.
//!
//! # Example
//!
//! ```rust,ignore
//! use hh_client::{HhClient, VacancySearch};
//!
//! let client = HhClient::new("salary-stats/0.1 (me@example.com)")?;
//!
//! let mut search = VacancySearch::new("Программист Python", 1);
//! search.period = Some(30);
//! let page = client.search_vacancies(&search).await?;
//! println!("{} vacancies found", page.found);
//! ```

pub mod error;
pub mod types;

pub use error::{HhError, Result};
pub use types::{NamedRef, Salary, VacanciesPage, Vacancy, VacancySearch};

use std::time::Duration;

const BASE_URL: &str = "https://api.hh.ru";

#[derive(Debug, Clone)]
pub struct HhClient {
    client: reqwest::Client,
    base_url: String,
}

impl HhClient {
    /// Create a client with a 30 second request timeout.
    pub fn new(user_agent: &str) -> Result<Self> {
        Self::with_timeout(user_agent, Duration::from_secs(30))
    }

    pub fn with_timeout(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at a different host (proxies, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of `GET /vacancies`.
    pub async fn search_vacancies(&self, search: &VacancySearch) -> Result<VacanciesPage> {
        let url = format!("{}/vacancies", self.base_url);
        tracing::debug!(text = %search.text, page = search.page, "Requesting hh.ru vacancies");

        let resp = self.client.get(&url).query(search).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(HhError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let page: VacanciesPage = resp.json().await?;
        Ok(page)
    }
}
