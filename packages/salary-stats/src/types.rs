use chrono::{DateTime, Duration, Utc};

/// One job posting, reduced to what the statistics need.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub salary: Option<SalaryRange>,
    pub employer: Option<String>,
    pub city: Option<String>,
    pub url: Option<String>,
}

/// Salary bounds as published. A bound of `0` means "not published".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryRange {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}

impl SalaryRange {
    pub fn new(from: Option<f64>, to: Option<f64>, currency: impl Into<String>) -> Self {
        Self {
            from,
            to,
            currency: Some(currency.into()),
        }
    }
}

/// Board-independent search parameters. The page index is supplied by the pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    /// Board-specific region id (hh.ru area, SuperJob town).
    pub region: u32,
    pub page_size: u32,
    /// Only listings published within the last N days.
    pub recency_days: Option<u32>,
    /// Only listings that publish a salary.
    pub require_salary: bool,
    /// Start of the recency window, fixed once per query so that every page
    /// of it asks for the same window.
    pub published_after: Option<DateTime<Utc>>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, region: u32) -> Self {
        Self {
            text: text.into(),
            region,
            page_size: 20,
            recency_days: None,
            require_salary: false,
            published_after: None,
        }
    }

    /// Pin the recency window to `now`. A window that is already pinned is
    /// left alone.
    pub fn anchored(mut self, now: DateTime<Utc>) -> Self {
        if self.published_after.is_none() {
            self.published_after = self
                .recency_days
                .map(|days| now - Duration::days(i64::from(days)));
        }
        self
    }
}

/// What a board returns for a single page request.
///
/// `has_more` hides the board's own pagination convention ("page of pages"
/// on hh.ru, a `more` flag on SuperJob).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardPage {
    pub listings: Vec<Listing>,
    pub total_found: u64,
    pub has_more: bool,
}

/// One page of listings as yielded by the pager.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub listings: Vec<Listing>,
    /// Total reported by the first page of the query.
    pub total_found: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchoring_fixes_the_window_once() {
        let now = Utc::now();
        let mut query = SearchQuery::new("Python", 4);
        query.recency_days = Some(30);

        let anchored = query.anchored(now);
        assert_eq!(anchored.published_after, Some(now - Duration::days(30)));

        let later = now + Duration::hours(2);
        assert_eq!(anchored.clone().anchored(later), anchored);
    }

    #[test]
    fn no_recency_means_no_window() {
        let query = SearchQuery::new("Python", 1).anchored(Utc::now());
        assert_eq!(query.published_after, None);
    }
}
