//! Pagination envelope and page navigation.
//!
//! A paginated request (`&paginate=1`) answers with a [`Pagination`] envelope
//! carrying the page metadata and the page's data. The envelope is always
//! stored and replaced as a whole.
//!
//! # Page Wrapping
//!
//! [`previous_page`] and [`next_page`] wrap around the ends of the page range,
//! but not symmetrically: stepping back from page 1 lands on `last_page`,
//! while stepping forward from `last_page` lands on page **0**, not page 1.
//! Page 0 is then omitted from the query string, so the server applies its own
//! default page. Callers that want a true cycle should use
//! [`ResourceStore::open_page`](crate::rest::ResourceStore::open_page) with `1`.

use serde::{Deserialize, Serialize};

/// A page of results plus its metadata.
///
/// `from` and `to` are the 1-based positions of the first and last item on
/// this page; servers send `null` for both on an empty page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination<T> {
    /// Total number of matching items.
    pub total: u64,
    /// Page size the server applied.
    pub per_page: u64,
    /// The page this envelope holds.
    pub current_page: u64,
    /// The highest page number.
    pub last_page: u64,
    /// Position of the first item on this page.
    #[serde(default)]
    pub from: Option<u64>,
    /// Position of the last item on this page.
    #[serde(default)]
    pub to: Option<u64>,
    /// The items on this page.
    pub data: Vec<T>,
}

impl<T> Pagination<T> {
    /// Returns `true` if a page after this one exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.current_page < self.last_page
    }

    /// Returns `true` if a page before this one exists.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    /// Consumes the envelope and returns the items.
    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

/// Returns the page before `current`, wrapping to `last_page` at page 1 or below.
#[must_use]
pub const fn previous_page(current: u64, last_page: u64) -> u64 {
    if current <= 1 {
        last_page
    } else {
        current - 1
    }
}

/// Returns the page after `current`, wrapping to `0` at `last_page` or beyond.
#[must_use]
pub const fn next_page(current: u64, last_page: u64) -> u64 {
    if current >= last_page {
        0
    } else {
        current + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_previous_page_wraps_to_last_page() {
        assert_eq!(previous_page(1, 5), 5);
        assert_eq!(previous_page(0, 5), 5);
        assert_eq!(previous_page(3, 5), 2);
    }

    #[test]
    fn test_next_page_wraps_to_zero() {
        assert_eq!(next_page(5, 5), 0);
        assert_eq!(next_page(7, 5), 0);
        assert_eq!(next_page(4, 5), 5);
        assert_eq!(next_page(0, 5), 1);
    }

    #[test]
    fn test_deserializes_envelope_with_null_bounds() {
        let page: Pagination<u32> = serde_json::from_value(json!({
            "total": 0,
            "per_page": 100,
            "current_page": 1,
            "last_page": 1,
            "from": null,
            "to": null,
            "data": []
        }))
        .unwrap();

        assert_eq!(page.total, 0);
        assert!(page.from.is_none());
        assert!(page.to.is_none());
        assert!(page.data.is_empty());
        assert!(!page.has_next_page());
        assert!(!page.has_prev_page());
    }

    #[test]
    fn test_navigation_flags() {
        let page = Pagination {
            total: 30,
            per_page: 10,
            current_page: 2,
            last_page: 3,
            from: Some(11),
            to: Some(20),
            data: vec![1, 2, 3],
        };

        assert!(page.has_next_page());
        assert!(page.has_prev_page());
        assert_eq!(page.into_data(), vec![1, 2, 3]);
    }
}
