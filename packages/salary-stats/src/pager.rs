//! Paginated fetching over any [`JobBoard`].

use chrono::Utc;
use tracing::debug;

use crate::error::FetchError;
use crate::traits::JobBoard;
use crate::types::{Batch, SearchQuery};

/// Walks the pages of one query, one request per [`Pager::next_page`] call.
///
/// The sequence ends when the board reports no further pages or returns an
/// empty page. The first error ends it as well; the pager is exhausted
/// afterwards. The query's recency window is anchored on construction, so
/// every page asks for the same window.
pub struct Pager<'a, B: JobBoard + ?Sized> {
    board: &'a B,
    query: SearchQuery,
    next: Option<u32>,
    total_found: Option<u64>,
    max_pages: u32,
}

impl<'a, B: JobBoard + ?Sized> Pager<'a, B> {
    pub fn new(board: &'a B, query: SearchQuery, max_pages: u32) -> Self {
        Self {
            board,
            query: query.anchored(Utc::now()),
            next: Some(0),
            total_found: None,
            max_pages,
        }
    }

    /// Total reported by the first page, once it has been fetched.
    pub fn total_found(&self) -> Option<u64> {
        self.total_found
    }

    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }

    /// Fetch the next page, or `None` once the query is exhausted.
    pub async fn next_page(&mut self) -> Result<Option<Batch>, FetchError> {
        let Some(page) = self.next.take() else {
            return Ok(None);
        };

        if page >= self.max_pages {
            return Err(FetchError::PageLimitExceeded {
                board: self.board.name().to_string(),
                max_pages: self.max_pages,
            });
        }

        let fetched = self.board.fetch_page(&self.query, page).await?;

        // Fixed at the first page; later pages may report a drifting total.
        let total_found = *self.total_found.get_or_insert(fetched.total_found);

        if fetched.has_more && !fetched.listings.is_empty() {
            self.next = Some(page + 1);
        }

        debug!(
            board = self.board.name(),
            query = %self.query.text,
            page,
            listings = fetched.listings.len(),
            has_more = self.next.is_some(),
            "Fetched page"
        );

        Ok(Some(Batch {
            listings: fetched.listings,
            total_found,
        }))
    }

    /// Drain the pager. All pages or the first error, never a partial result.
    pub async fn collect_all(mut self) -> Result<Vec<Batch>, FetchError> {
        let mut batches = Vec::new();
        while let Some(batch) = self.next_page().await? {
            batches.push(batch);
        }
        Ok(batches)
    }
}
