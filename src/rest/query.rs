//! Query configuration for list and pagination requests.
//!
//! A [`Query`] is an immutable value: every setter consumes it and returns a
//! new one, so a query can be built once and handed to several concurrent
//! requests.
//!
//! # Query String Format
//!
//! ```text
//! ?method=get&keyword=<v>&in=<v>&order=<v>&orderBy=<v>&per_page=<v>&page=<v>&<custom>
//! ```
//!
//! Segments appear in that fixed order and only when their value is set.
//! Empty strings and `0` count as unset.
//!
//! # Example
//!
//! ```rust
//! use pg_restful::rest::Query;
//!
//! let query = Query::new()
//!     .search("ada")
//!     .search_in("name")
//!     .order("desc")
//!     .order_by("created_at")
//!     .current_page(2);
//!
//! assert_eq!(
//!     query.to_query_string(),
//!     "?method=get&keyword=ada&in=name&order=desc&orderBy=created_at&per_page=100&page=2"
//! );
//! ```

/// Default page size.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Default page number.
pub const DEFAULT_PAGE: u64 = 1;

/// Fixed first segment of every query string.
pub const QUERY_MARKER: &str = "?method=get";

/// Flag appended to request a pagination envelope instead of a bare list.
pub const PAGINATE_FLAG: &str = "&paginate=1";

/// Search, sort and pagination parameters for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    search_text: Option<String>,
    search_in: Option<String>,
    order: Option<String>,
    order_by: Option<String>,
    per_page: u32,
    current_page: u64,
    custom: Option<String>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search_text: None,
            search_in: None,
            order: None,
            order_by: None,
            per_page: DEFAULT_PER_PAGE,
            current_page: DEFAULT_PAGE,
            custom: None,
        }
    }
}

impl Query {
    /// Creates a query with default paging and no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size. `0` omits `per_page` from the query string.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Sets the page number. `0` omits `page` from the query string.
    #[must_use]
    pub const fn current_page(mut self, page: u64) -> Self {
        self.current_page = page;
        self
    }

    /// Sets the search keyword.
    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    /// Sets the field the keyword is matched against (`in`).
    #[must_use]
    pub fn search_in(mut self, field: impl Into<String>) -> Self {
        self.search_in = Some(field.into());
        self
    }

    /// Sets the sort direction (e.g., "asc" or "desc").
    #[must_use]
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Sets the field to sort by (`orderBy`).
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(field.into());
        self
    }

    /// Sets a raw fragment appended after every other segment, without a
    /// leading `&` (e.g., `"status=active&role=admin"`).
    #[must_use]
    pub fn custom(mut self, fragment: impl Into<String>) -> Self {
        self.custom = Some(fragment.into());
        self
    }

    /// Returns the default query: 100 per page, page 1, no filters, no custom fragment.
    #[must_use]
    pub fn clear(self) -> Self {
        Self::default()
    }

    /// Returns the search keyword, if set.
    #[must_use]
    pub fn search_text(&self) -> Option<&str> {
        self.search_text.as_deref()
    }

    /// Returns the field searched in, if set.
    #[must_use]
    pub fn searched_field(&self) -> Option<&str> {
        self.search_in.as_deref()
    }

    /// Returns the sort direction, if set.
    #[must_use]
    pub fn sort_order(&self) -> Option<&str> {
        self.order.as_deref()
    }

    /// Returns the sort field, if set.
    #[must_use]
    pub fn sort_field(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.per_page
    }

    /// Returns the page number.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.current_page
    }

    /// Returns the custom fragment, if set.
    #[must_use]
    pub fn custom_fragment(&self) -> Option<&str> {
        self.custom.as_deref()
    }

    /// Renders the query string, starting with `?method=get`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut query = String::from(QUERY_MARKER);

        let encoded = [
            ("keyword", &self.search_text),
            ("in", &self.search_in),
            ("order", &self.order),
            ("orderBy", &self.order_by),
        ];
        for (key, value) in encoded {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                query.push_str(&format!("&{key}={}", urlencoding::encode(value)));
            }
        }

        if self.per_page != 0 {
            query.push_str(&format!("&per_page={}", self.per_page));
        }
        if self.current_page != 0 {
            query.push_str(&format!("&page={}", self.current_page));
        }
        if let Some(custom) = self.custom.as_deref().filter(|c| !c.is_empty()) {
            query.push('&');
            query.push_str(custom);
        }

        query
    }

    /// Renders the query string followed by `&paginate=1`.
    #[must_use]
    pub fn to_paginated_query_string(&self) -> String {
        format!("{}{PAGINATE_FLAG}", self.to_query_string())
    }
}
