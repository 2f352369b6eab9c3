//! Testing utilities: a scripted job board that never touches the network.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::FetchError;
use crate::traits::JobBoard;
use crate::types::{BoardPage, Listing, SalaryRange, SearchQuery};

enum Scripted {
    Page(BoardPage),
    Fail(String),
}

/// A [`JobBoard`] that replays pre-recorded pages per query text.
///
/// Unknown queries and pages past the script return an empty final page.
/// Every request is recorded for assertions.
#[derive(Clone)]
pub struct ScriptedBoard {
    name: String,
    scripts: Arc<Mutex<HashMap<String, Vec<Scripted>>>>,
    calls: Arc<Mutex<Vec<(SearchQuery, u32)>>>,
}

impl ScriptedBoard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scripts: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script `pages` for `text`, every page reporting `total_found`.
    /// All but the last page claim more results.
    pub fn with_pages(self, text: &str, total_found: u64, pages: Vec<Vec<Listing>>) -> Self {
        let count = pages.len();
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, listings)| BoardPage {
                listings,
                total_found,
                has_more: i + 1 < count,
            })
            .collect();
        self.with_raw_pages(text, pages)
    }

    pub fn with_raw_pages(self, text: &str, pages: Vec<BoardPage>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(text.to_string(), pages.into_iter().map(Scripted::Page).collect());
        self
    }

    /// Make request `page` of `text` fail with a transport error.
    pub fn with_failure(self, text: &str, page: u32, message: &str) -> Self {
        {
            let mut scripts = self.scripts.lock().unwrap();
            let pages = scripts.entry(text.to_string()).or_default();
            let page = page as usize;
            while pages.len() < page {
                pages.push(Scripted::Page(BoardPage::default()));
            }
            let failure = Scripted::Fail(message.to_string());
            if page < pages.len() {
                pages[page] = failure;
            } else {
                pages.push(failure);
            }
        }
        self
    }

    /// `(query text, page)` of every request, in order.
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(q, page)| (q.text.clone(), *page))
            .collect()
    }

    /// Full queries of every request, in order.
    pub fn queries(&self) -> Vec<SearchQuery> {
        self.calls.lock().unwrap().iter().map(|(q, _)| q.clone()).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl JobBoard for ScriptedBoard {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<BoardPage, FetchError> {
        self.calls.lock().unwrap().push((query.clone(), page));

        let scripts = self.scripts.lock().unwrap();
        match scripts.get(&query.text).and_then(|p| p.get(page as usize)) {
            Some(Scripted::Page(p)) => Ok(p.clone()),
            Some(Scripted::Fail(message)) => Err(FetchError::Transport {
                board: self.name.clone(),
                source: message.clone().into(),
            }),
            None => Ok(BoardPage::default()),
        }
    }
}

/// A listing with the given salary bounds.
pub fn listing(from: Option<f64>, to: Option<f64>, currency: &str) -> Listing {
    Listing {
        salary: Some(SalaryRange::new(from, to, currency)),
        ..Default::default()
    }
}

/// A listing that publishes no salary.
pub fn listing_without_salary() -> Listing {
    Listing::default()
}
