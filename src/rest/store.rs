//! Stateful resource client.
//!
//! [`ResourceStore`] pairs a [`ResourceClient`] with the state a screen
//! usually keeps next to it: the current [`Query`], the current item, the
//! item list and the last pagination snapshot. Query setters chain, and every
//! operation updates the stored state before returning.
//!
//! Operations take `&mut self`, so one store never has two requests in
//! flight. Use [`ResourceClient`] directly for concurrent requests.
//!
//! # Example
//!
//! ```rust,ignore
//! use pg_restful::rest::ResourceStore;
//!
//! let mut users: ResourceStore<User> = ResourceStore::new(&config);
//!
//! users.search("ada").search_in("name").per_page(20);
//! let page = users.pagination().await?;
//! let page = users.next_page().await?;
//!
//! users.set_item(User { id: None, name: "Grace".to_string() });
//! let saved = users.save(None).await?; // POST, since the item has no id
//! ```

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::config::PgConfig;
use crate::rest::pagination::{next_page, previous_page};
use crate::rest::{Pagination, Query, Resource, ResourceClient, ResourceError};

/// Resource client with query-building and result state.
#[derive(Debug, Clone)]
pub struct ResourceStore<T> {
    client: ResourceClient<T>,
    query: Query,
    item: Option<T>,
    items: Option<Vec<T>>,
    pagination: Option<Pagination<T>>,
}

impl<T: Resource> ResourceStore<T> {
    /// Creates a store with its own [`HttpClient`].
    #[must_use]
    pub fn new(config: &PgConfig) -> Self {
        Self::with_client(ResourceClient::new(config))
    }

    /// Creates a store sharing an existing [`HttpClient`].
    #[must_use]
    pub fn with_http_client(http_client: Arc<HttpClient>) -> Self {
        Self::with_client(ResourceClient::with_http_client(http_client))
    }

    /// Creates a store around an existing [`ResourceClient`].
    #[must_use]
    pub fn with_client(client: ResourceClient<T>) -> Self {
        Self {
            client,
            query: Query::default(),
            item: None,
            items: None,
            pagination: None,
        }
    }

    /// Returns the stateless client backing this store.
    #[must_use]
    pub const fn client(&self) -> &ResourceClient<T> {
        &self.client
    }

    // Query builder

    /// Sets the page size.
    pub fn per_page(&mut self, per_page: u32) -> &mut Self {
        self.update_query(|q| q.per_page(per_page))
    }

    /// Sets the page number.
    pub fn current_page(&mut self, page: u64) -> &mut Self {
        self.update_query(|q| q.current_page(page))
    }

    /// Sets the search keyword.
    pub fn search(&mut self, text: impl Into<String>) -> &mut Self {
        self.update_query(|q| q.search(text))
    }

    /// Sets the field the keyword is matched against.
    pub fn search_in(&mut self, field: impl Into<String>) -> &mut Self {
        self.update_query(|q| q.search_in(field))
    }

    /// Sets the sort direction.
    pub fn order(&mut self, order: impl Into<String>) -> &mut Self {
        self.update_query(|q| q.order(order))
    }

    /// Sets the field to sort by.
    pub fn order_by(&mut self, field: impl Into<String>) -> &mut Self {
        self.update_query(|q| q.order_by(field))
    }

    /// Sets the raw fragment appended to the query string.
    pub fn custom_query(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.update_query(|q| q.custom(fragment))
    }

    /// Returns the current query.
    #[must_use]
    pub const fn query(&self) -> &Query {
        &self.query
    }

    /// Replaces the current query.
    pub fn set_query(&mut self, query: Query) -> &mut Self {
        self.query = query;
        self
    }

    /// Resets the query to 100 per page, page 1, no search, order or custom fragment.
    pub fn clear_query(&mut self) -> &mut Self {
        self.update_query(Query::clear)
    }

    fn update_query(&mut self, f: impl FnOnce(Query) -> Query) -> &mut Self {
        self.query = f(std::mem::take(&mut self.query));
        self
    }

    // Stored results

    /// Returns the current item.
    #[must_use]
    pub const fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    /// Replaces the current item.
    pub fn set_item(&mut self, item: T) -> &mut Self {
        self.item = Some(item);
        self
    }

    /// Clears the current item.
    pub fn clear_item(&mut self) -> &mut Self {
        self.item = None;
        self
    }

    /// Returns the item list.
    #[must_use]
    pub fn items(&self) -> Option<&[T]> {
        self.items.as_deref()
    }

    /// Replaces the item list.
    pub fn set_items(&mut self, items: Vec<T>) -> &mut Self {
        self.items = Some(items);
        self
    }

    /// Clears the item list.
    pub fn clear_items(&mut self) -> &mut Self {
        self.items = None;
        self
    }

    /// Returns the last pagination snapshot.
    #[must_use]
    pub const fn pagination_snapshot(&self) -> Option<&Pagination<T>> {
        self.pagination.as_ref()
    }

    // Operations

    /// Fetches the whole collection and stores it as the item list.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::all`]. Stored state is left untouched on error.
    pub async fn all(&mut self) -> Result<Vec<T>, ResourceError> {
        let items = self.client.all().await?;
        self.items = Some(items.clone());
        Ok(items)
    }

    /// Fetches the page described by the current query.
    ///
    /// On success the page's data becomes the item list and the envelope
    /// becomes the pagination snapshot; both are replaced together.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::paginate`]. Stored state is left untouched on error.
    pub async fn pagination(&mut self) -> Result<Pagination<T>, ResourceError> {
        let page = self.client.paginate(&self.query).await?;

        tracing::debug!(
            resource = T::NAME,
            page = page.current_page,
            last_page = page.last_page,
            items = page.data.len(),
            "replacing pagination snapshot"
        );

        self.items = Some(page.data.clone());
        self.pagination = Some(page.clone());
        Ok(page)
    }

    /// Moves to the previous page and fetches it.
    ///
    /// From page 1 this wraps to the snapshot's `last_page`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingPagination`] without a request when
    /// wrapping is needed but no page has been fetched yet. Otherwise fails
    /// like [`pagination`](Self::pagination).
    pub async fn previous_page(&mut self) -> Result<Pagination<T>, ResourceError> {
        let current = self.query.page();
        let target = match &self.pagination {
            Some(snapshot) => previous_page(current, snapshot.last_page),
            None if current > 1 => current - 1,
            None => return Err(ResourceError::MissingPagination { resource: T::NAME }),
        };

        self.current_page(target);
        self.pagination().await
    }

    /// Moves to the next page and fetches it.
    ///
    /// From `last_page` this wraps to page **0**, not page 1. Page 0 is left
    /// out of the query string, so the server picks the page. Call
    /// [`open_page(1)`](Self::open_page) to start again from the first page.
    ///
    /// Before any page has been fetched the page is incremented, saturating
    /// at `u64::MAX`.
    ///
    /// # Errors
    ///
    /// Fails like [`pagination`](Self::pagination).
    pub async fn next_page(&mut self) -> Result<Pagination<T>, ResourceError> {
        let current = self.query.page();
        let target = self.pagination.as_ref().map_or_else(
            || current.saturating_add(1),
            |snapshot| next_page(current, snapshot.last_page),
        );

        self.current_page(target);
        self.pagination().await
    }

    /// Sets the page number and fetches that page.
    ///
    /// # Errors
    ///
    /// Fails like [`pagination`](Self::pagination).
    pub async fn open_page(&mut self, page: u64) -> Result<Pagination<T>, ResourceError> {
        self.current_page(page);
        self.pagination().await
    }

    /// Fetches the filtered collection and stores it as the item list.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::get`]. Stored state is left untouched on error.
    pub async fn get(&mut self) -> Result<Vec<T>, ResourceError> {
        let items = self.client.get(&self.query).await?;
        self.items = Some(items.clone());
        Ok(items)
    }

    /// Fetches one entity and stores it as the current item.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::show`]. Stored state is left untouched on error.
    pub async fn show(&mut self, id: &T::Id) -> Result<T, ResourceError> {
        let item = self.client.show(id).await?;
        self.item = Some(item.clone());
        Ok(item)
    }

    /// Creates the current item, after replacing it with `value` if given.
    ///
    /// The server's response becomes the current item.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingItem`] if there is no item to send.
    /// Otherwise see [`ResourceClient::create`].
    pub async fn create(&mut self, value: Option<T>) -> Result<T, ResourceError> {
        if let Some(value) = value {
            self.item = Some(value);
        }
        let current = self
            .item
            .as_ref()
            .ok_or(ResourceError::MissingItem { resource: T::NAME })?;

        let created = self.client.create(current).await?;
        self.item = Some(created.clone());
        Ok(created)
    }

    /// Updates the current item, after replacing it with `value` if given.
    ///
    /// The server's response becomes the current item.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingItem`] if there is no item and
    /// [`ResourceError::MissingId`] if the item has no id. Otherwise see
    /// [`ResourceClient::update`].
    pub async fn update(&mut self, value: Option<T>) -> Result<T, ResourceError> {
        if let Some(value) = value {
            self.item = Some(value);
        }
        let current = self
            .item
            .as_ref()
            .ok_or(ResourceError::MissingItem { resource: T::NAME })?;

        let updated = self.client.update(current).await?;
        self.item = Some(updated.clone());
        Ok(updated)
    }

    /// Deletes `id`, or the current item's id when `id` is `None`.
    ///
    /// An explicit id never reads the current item. Stored state is not
    /// changed.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `id` is `None` and the current
    /// item is absent or has no id. Otherwise see [`ResourceClient::delete`].
    pub async fn delete(&mut self, id: Option<T::Id>) -> Result<bool, ResourceError> {
        let id = match id {
            Some(id) => id,
            None => self
                .item
                .as_ref()
                .and_then(|item| item.id())
                .ok_or(ResourceError::MissingId { resource: T::NAME })?,
        };

        self.client.delete(&id).await
    }

    /// Updates `value` (or the current item) if it has a present id,
    /// otherwise creates it.
    ///
    /// # Errors
    ///
    /// Fails like [`update`](Self::update) or [`create`](Self::create).
    pub async fn save(&mut self, value: Option<T>) -> Result<T, ResourceError> {
        let has_id = value
            .as_ref()
            .or(self.item.as_ref())
            .is_some_and(|item| item.has_id());

        if has_id {
            self.update(value).await
        } else {
            self.create(value).await
        }
    }
}
