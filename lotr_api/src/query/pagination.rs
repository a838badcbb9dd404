//! Pagination parameters shared by the list endpoints.

use url::Url;

use super::Query;

/// Optional `page`, `limit` and `offset` parameters.
///
/// Only the parameters that are set are sent; the server applies its own
/// defaults for the rest (page 1, limit 1000, offset 0 on `/v2/movie`).
/// When an offset is sent the server ignores the page and reports page 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Items per page.
    pub limit: Option<u32>,
    /// Number of items to skip.
    pub offset: Option<u32>,
}

impl Pagination {
    /// Builds pagination from the optional values of a public operation.
    pub fn new(page: Option<u32>, limit: Option<u32>, offset: Option<u32>) -> Self {
        Self {
            page,
            limit,
            offset,
        }
    }

    /// Sets the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the number of results per page.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the number of results to skip.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Returns true when no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.limit.is_none() && self.offset.is_none()
    }

    /// Set parameters in wire order: page, then limit, then offset.
    fn pairs(&self) -> impl Iterator<Item = (&'static str, u32)> {
        [
            ("page", self.page),
            ("limit", self.limit),
            ("offset", self.offset),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

impl Query for Pagination {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if self.is_empty() {
            return url;
        }
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in self.pairs() {
                pairs.append_pair(name, &value.to_string());
            }
        }
        url
    }
}
