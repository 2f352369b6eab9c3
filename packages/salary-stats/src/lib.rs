//! Salary statistics for programming-language vacancies.
//!
//! Searches job boards for each language, turns published salary ranges into
//! single estimates and summarizes them per language.
//!
//! # Architecture
//!
//! - [`JobBoard`] - one page request against one board (hh.ru, SuperJob)
//! - [`Pager`] - walks the pages of a query until the board runs out
//! - [`estimate_salary`] - range to single number, same-currency only
//! - [`collect_stats`] - the above across a language list
//!
//! # Example
//!
//! ```rust,ignore
//! use salary_stats::{collect_stats, render_table, Credentials, StatsConfig};
//!
//! let config = StatsConfig::default();
//! let board = Credentials::from_env()?.headhunter_board()?;
//!
//! let report = collect_stats(&board, &config.languages, &config.headhunter).await;
//! println!("{}", render_table("HeadHunter Moscow", &report));
//! ```

pub mod aggregate;
pub mod boards;
pub mod config;
pub mod error;
pub mod pager;
pub mod salary;
pub mod survey;
pub mod table;
pub mod testing;
pub mod traits;
pub mod types;

pub use aggregate::{collect_stats, language_stats, LanguageReport, LanguageStats};
pub use boards::{HeadHunterBoard, SuperJobBoard};
pub use config::{Credentials, SourceSettings, StatsConfig, DEFAULT_LANGUAGES};
pub use error::{ConfigError, FetchError};
pub use pager::Pager;
pub use salary::{estimate_salary, predict_salary};
pub use survey::{count_vacancies, developer_titles, VacancyCounts};
pub use table::render_table;
pub use traits::JobBoard;
pub use types::{Batch, BoardPage, Listing, SalaryRange, SearchQuery};
