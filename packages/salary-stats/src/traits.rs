// Capability seam between the aggregator and concrete job boards.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::types::{BoardPage, SearchQuery};

#[async_trait]
pub trait JobBoard: Send + Sync {
    /// Human-readable board name, used in logs and errors
    fn name(&self) -> &str;

    /// Fetch page `page` (0-based) of `query`
    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<BoardPage, FetchError>;
}
