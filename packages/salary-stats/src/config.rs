//! Search settings and credentials.
//!
//! Search parameters default to Moscow vacancies from the last 30 days that
//! publish a salary. Credentials come from the environment (`.env` is loaded
//! if present):
//!
//! - `SUPERJOB_API_KEY` - SuperJob application secret key (required for SuperJob)
//! - `HH_USER_AGENT` - User-Agent sent to hh.ru
//! - `HH_BASE_URL`, `SUPERJOB_BASE_URL` - API host overrides
//! - `HTTP_TIMEOUT_SECS` - per-request timeout, 30 by default

use std::time::Duration;

use crate::boards::{HeadHunterBoard, SuperJobBoard};
use crate::error::ConfigError;
use crate::types::SearchQuery;

pub const DEFAULT_LANGUAGES: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "TypeScript",
    "C#",
    "PHP",
    "C++",
    "Shell",
    "C",
    "Ruby",
    "Go",
];

const DEFAULT_USER_AGENT: &str = concat!("salary-stats/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Search parameters for one job board.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSettings {
    /// Prepended to the language name to form the search text.
    pub query_prefix: Option<String>,
    /// hh.ru area id or SuperJob town id.
    pub region: u32,
    pub page_size: u32,
    pub recency_days: Option<u32>,
    pub require_salary: bool,
    /// Estimates are only taken from listings in this currency.
    pub currency: String,
    /// Needing more pages than this aborts the language.
    pub max_pages: u32,
    /// Stop fetching once this many estimates are collected.
    pub max_processed: Option<usize>,
}

impl SourceSettings {
    /// hh.ru: area 1 (Moscow), 100 per page, currency `RUR`.
    ///
    /// hh.ru serves at most 2000 results per query, so 20 pages at this size.
    pub fn headhunter() -> Self {
        Self {
            query_prefix: Some("Программист".to_string()),
            region: 1,
            page_size: 100,
            recency_days: Some(30),
            require_salary: true,
            currency: "RUR".to_string(),
            max_pages: 100,
            max_processed: None,
        }
    }

    /// SuperJob: town 4 (Moscow), 100 per page, currency `rub`.
    pub fn superjob() -> Self {
        Self {
            query_prefix: None,
            region: 4,
            page_size: 100,
            recency_days: Some(30),
            require_salary: true,
            currency: "rub".to_string(),
            max_pages: 100,
            max_processed: None,
        }
    }

    pub fn query_for(&self, language: &str) -> SearchQuery {
        let text = match &self.query_prefix {
            Some(prefix) => format!("{} {}", prefix, language),
            None => language.to_string(),
        };
        SearchQuery {
            text,
            region: self.region,
            page_size: self.page_size,
            recency_days: self.recency_days,
            require_salary: self.require_salary,
            published_after: None,
        }
    }
}

/// Everything a report run needs besides credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsConfig {
    pub languages: Vec<String>,
    pub headhunter: SourceSettings,
    pub superjob: SourceSettings,
    /// SuperJob catalogue filter (48 = "Development, programming").
    pub superjob_catalogue: Option<u32>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            headhunter: SourceSettings::headhunter(),
            superjob: SourceSettings::superjob(),
            superjob_catalogue: Some(48),
        }
    }
}

/// Credentials and endpoints read from the environment.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub hh_user_agent: String,
    pub hh_base_url: Option<String>,
    pub superjob_api_key: Option<String>,
    pub superjob_base_url: Option<String>,
    pub http_timeout: Duration,
}

impl Credentials {
    /// Load from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let timeout_secs = match var("HTTP_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    name: "HTTP_TIMEOUT_SECS",
                    value,
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            hh_user_agent: var("HH_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            hh_base_url: var("HH_BASE_URL"),
            superjob_api_key: var("SUPERJOB_API_KEY"),
            superjob_base_url: var("SUPERJOB_BASE_URL"),
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn headhunter_board(&self) -> Result<HeadHunterBoard, ConfigError> {
        let mut client = hh_client::HhClient::with_timeout(&self.hh_user_agent, self.http_timeout)
            .map_err(|e| ConfigError::Client(Box::new(e)))?;
        if let Some(url) = &self.hh_base_url {
            client = client.with_base_url(url.as_str());
        }
        Ok(HeadHunterBoard::new(client))
    }

    /// Fails with [`ConfigError::MissingVar`] when no SuperJob key is configured.
    pub fn superjob_board(&self, catalogue: Option<u32>) -> Result<SuperJobBoard, ConfigError> {
        let api_key = self
            .superjob_api_key
            .as_deref()
            .ok_or(ConfigError::MissingVar("SUPERJOB_API_KEY"))?;

        let mut client = superjob_client::SuperJobClient::with_timeout(api_key, self.http_timeout)
            .map_err(|e| ConfigError::Client(Box::new(e)))?;
        if let Some(url) = &self.superjob_base_url {
            client = client.with_base_url(url.as_str());
        }
        Ok(SuperJobBoard::new(client).with_catalogue(catalogue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn query_text_uses_prefix() {
        let hh = SourceSettings::headhunter().query_for("Python");
        assert_eq!(hh.text, "Программист Python");
        assert_eq!(hh.region, 1);
        assert_eq!(hh.recency_days, Some(30));
        assert!(hh.require_salary);
        assert!(hh.published_after.is_none());

        let sj = SourceSettings::superjob().query_for("C#");
        assert_eq!(sj.text, "C#");
        assert_eq!(sj.region, 4);
    }

    #[test]
    fn defaults_cover_language_list() {
        let config = StatsConfig::default();
        assert_eq!(config.languages.len(), DEFAULT_LANGUAGES.len());
        assert_eq!(config.languages[1], "Python");
        assert_eq!(config.superjob_catalogue, Some(48));
    }

    #[test]
    fn credentials_defaults() {
        let creds = Credentials::from_lookup(lookup(&[])).unwrap();
        assert!(creds.hh_user_agent.starts_with("salary-stats/"));
        assert!(creds.superjob_api_key.is_none());
        assert_eq!(creds.http_timeout, Duration::from_secs(30));
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let creds = Credentials::from_lookup(lookup(&[("SUPERJOB_API_KEY", "  ")])).unwrap();
        let err = creds.superjob_board(Some(48)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("SUPERJOB_API_KEY")));
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let err = Credentials::from_lookup(lookup(&[("HTTP_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { name: "HTTP_TIMEOUT_SECS", .. }));
    }

    #[test]
    fn boards_build_with_overrides() {
        let creds = Credentials::from_lookup(lookup(&[
            ("SUPERJOB_API_KEY", "v3.r.secret"),
            ("HH_BASE_URL", "http://localhost:9000/"),
            ("HTTP_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(creds.http_timeout, Duration::from_secs(5));
        assert!(creds.headhunter_board().is_ok());
        assert!(creds.superjob_board(None).is_ok());
    }
}
