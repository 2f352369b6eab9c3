//! Pure SuperJob REST API client.
//!
//! Wraps the vacancy search of `api.superjob.ru`. Every request carries the
//! application secret key in the `X-Api-App-Id` header.
//!
//! # Example
//!
//! ```rust,ignore
//! use superjob_client::{SuperJobClient, VacancySearch};
//!
//! let client = SuperJobClient::new(std::env::var("SUPERJOB_API_KEY")?)?;
//! let mut search = VacancySearch::new("Python", 4);
//! search.catalogues = Some(48);
//! let page = client.search_vacancies(&search).await?;
//! println!("{} vacancies, more: {}", page.total, page.more);
//! ```

pub mod error;
pub mod types;

pub use error::{Result, SuperJobError};
pub use types::{Town, VacanciesPage, Vacancy, VacancySearch};

use std::time::Duration;

const BASE_URL: &str = "https://api.superjob.ru";

#[derive(Debug, Clone)]
pub struct SuperJobClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SuperJobClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_key, Duration::from_secs(30))
    }

    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Fetch one page of `GET /2.0/vacancies/`.
    pub async fn search_vacancies(&self, search: &VacancySearch) -> Result<VacanciesPage> {
        let url = format!("{}/2.0/vacancies/", self.base_url);
        tracing::debug!(keyword = %search.keyword, page = search.page, "Requesting SuperJob vacancies");

        let resp = self
            .client
            .get(&url)
            .header("X-Api-App-Id", &self.api_key)
            .query(search)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SuperJobError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn sends_app_id_and_parses_objects() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/2.0/vacancies/")
            .match_header("X-Api-App-Id", "secret")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("keyword".into(), "Python".into()),
                Matcher::UrlEncoded("town".into(), "4".into()),
                Matcher::UrlEncoded("catalogues".into(), "48".into()),
                Matcher::UrlEncoded("page".into(), "1".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"objects": [
                        {"id": 11, "profession": "Программист Python",
                         "payment_from": 0, "payment_to": 150000, "currency": "rub",
                         "town": {"id": 4, "title": "Москва"}},
                        {"id": 12, "profession": "Тестировщик",
                         "payment_from": "n/a", "currency": "rub", "town": "??"}
                    ],
                    "total": 42, "more": true}"#,
            )
            .create_async()
            .await;

        let client = SuperJobClient::new("secret").unwrap().with_base_url(server.url());
        let mut search = VacancySearch::new("Python", 4);
        search.catalogues = Some(48);
        search.page = 1;

        let page = client.search_vacancies(&search).await.unwrap();
        assert_eq!(page.total, 42);
        assert!(page.more);
        assert_eq!(page.objects[0].payment_from, Some(0.0));
        assert_eq!(page.objects[0].payment_to, Some(150000.0));
        assert_eq!(page.objects[0].town.as_ref().unwrap().title, "Москва");
        assert_eq!(page.objects[1].payment_from, None);
        assert!(page.objects[1].town.is_none());
    }

    #[tokio::test]
    async fn odd_vacancy_fields_keep_the_page() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/2.0/vacancies/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"objects": [
                        {"id": "21", "profession": null, "firm_name": 7,
                         "payment_from": 80000, "payment_to": 0, "currency": "rub"},
                        {"id": 22, "profession": "Go developer",
                         "payment_from": 100000, "payment_to": 140000, "currency": "rub"},
                        42
                    ],
                    "total": 300, "more": false}"#,
            )
            .create_async()
            .await;

        let client = SuperJobClient::new("secret").unwrap().with_base_url(server.url());
        let page = client
            .search_vacancies(&VacancySearch::new("Go", 4))
            .await
            .unwrap();

        assert_eq!(page.total, 300);
        assert_eq!(page.objects.len(), 2);
        assert_eq!(page.objects[0].id, 0);
        assert_eq!(page.objects[0].profession, "");
        assert!(page.objects[0].firm_name.is_none());
        assert_eq!(page.objects[0].payment_from, Some(80000.0));
        assert_eq!(page.objects[1].profession, "Go developer");
    }

    #[tokio::test]
    async fn rejected_key_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/2.0/vacancies/")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(r#"{"error": {"code": 403, "message": "Invalid app_key"}}"#)
            .create_async()
            .await;

        let client = SuperJobClient::new("wrong").unwrap().with_base_url(server.url());
        let err = client
            .search_vacancies(&VacancySearch::new("Go", 4))
            .await
            .unwrap_err();

        assert!(matches!(err, SuperJobError::Api { status: 403, .. }));
    }
}
