//! Shared query infrastructure: the [`Query`] trait and the [`QueryCommon`] pagination cursor.

use url::Url;

/// Page requested when none is given.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size requested when none is given.
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed). Non-positive values fall back to page 1.
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = if page > 0 { page } else { DEFAULT_PAGE };
        self
    }

    /// Sets the number of results per page. Non-positive values fall back to the default.
    fn with_per_page(mut self, per_page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().per_page = if per_page > 0 {
            per_page
        } else {
            DEFAULT_PER_PAGE
        };
        self
    }
}

/// Pagination cursor shared by all list queries. Both fields are always sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1.
    pub page: i64,
    /// Results per page. Defaults to 10.
    pub per_page: i64,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl QueryCommon {
    /// Appends the pagination parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string())
            .append_pair("per_page", &self.per_page.to_string());
        url
    }
}
