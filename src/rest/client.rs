//! Stateless resource client.
//!
//! [`ResourceClient`] issues exactly one HTTP request per call and keeps no
//! state between calls. Query parameters are passed explicitly, so one client
//! can serve any number of concurrent requests.
//!
//! # Endpoints
//!
//! | Method | Request |
//! |--------|---------|
//! | [`all`](ResourceClient::all) | `GET {root}{path}` |
//! | [`paginate`](ResourceClient::paginate) | `GET {root}{path}{query}&paginate=1` |
//! | [`get`](ResourceClient::get) | `GET {root}{path}{query}` |
//! | [`show`](ResourceClient::show) | `GET {root}{path}/{id}` |
//! | [`create`](ResourceClient::create) | `POST {root}{path}` |
//! | [`update`](ResourceClient::update) | `PUT {root}{path}/{id}` |
//! | [`delete`](ResourceClient::delete) | `DELETE {root}{path}/{id}` |

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::PgConfig;
use crate::rest::{Pagination, Query, Resource, ResourceError};

/// REST client for one resource type.
///
/// Cloning is cheap: clones share the underlying [`HttpClient`].
///
/// # Example
///
/// ```rust,ignore
/// use pg_restful::rest::{Query, ResourceClient};
///
/// let users: ResourceClient<User> = ResourceClient::new(&config);
///
/// let page = users.paginate(&Query::new().search("ada").current_page(2)).await?;
/// let user = users.show(&page.data[0].id.unwrap()).await?;
/// ```
pub struct ResourceClient<T> {
    http_client: Arc<HttpClient>,
    _resource: PhantomData<fn() -> T>,
}

// Verify ResourceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceClient<()>>();
};

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            http_client: Arc::clone(&self.http_client),
            _resource: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ResourceClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("resource", &std::any::type_name::<T>())
            .field("base_uri", &self.http_client.base_uri())
            .finish()
    }
}

impl<T> ResourceClient<T> {
    /// Creates a client with its own [`HttpClient`].
    #[must_use]
    pub fn new(config: &PgConfig) -> Self {
        Self::with_http_client(Arc::new(HttpClient::new(config)))
    }

    /// Creates a client sharing an existing [`HttpClient`].
    #[must_use]
    pub const fn with_http_client(http_client: Arc<HttpClient>) -> Self {
        Self {
            http_client,
            _resource: PhantomData,
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }
}

impl<T: Resource> ResourceClient<T> {
    /// Fetches the full, unfiltered collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport failure and
    /// [`ResourceError::Decode`] if the body is not a list of `T`.
    pub async fn all(&self) -> Result<Vec<T>, ResourceError> {
        self.fetch(T::PATH.to_string()).await
    }

    /// Fetches one page using `query` plus the pagination flag.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport failure and
    /// [`ResourceError::Decode`] if the body is not a pagination envelope.
    pub async fn paginate(&self, query: &Query) -> Result<Pagination<T>, ResourceError> {
        self.fetch(format!("{}{}", T::PATH, query.to_paginated_query_string()))
            .await
    }

    /// Fetches the filtered collection described by `query`, without paging metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport failure and
    /// [`ResourceError::Decode`] if the body is not a list of `T`.
    pub async fn get(&self, query: &Query) -> Result<Vec<T>, ResourceError> {
        self.fetch(format!("{}{}", T::PATH, query.to_query_string()))
            .await
    }

    /// Fetches a single entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport failure and
    /// [`ResourceError::Decode`] if the body is not a `T`.
    pub async fn show(&self, id: &T::Id) -> Result<T, ResourceError> {
        self.fetch(Self::member_path(id)).await
    }

    /// Creates `item` and returns the server's representation of it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Encode`] if `item` cannot be serialized,
    /// [`ResourceError::Http`] on transport failure and
    /// [`ResourceError::Decode`] if the body is not a `T`.
    pub async fn create(&self, item: &T) -> Result<T, ResourceError> {
        self.send(HttpMethod::Post, T::PATH.to_string(), item).await
    }

    /// Updates `item` under its id and returns the server's representation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without sending anything if `item`
    /// has no id. Otherwise fails like [`create`](Self::create).
    pub async fn update(&self, item: &T) -> Result<T, ResourceError> {
        let id = item
            .id()
            .ok_or(ResourceError::MissingId { resource: T::NAME })?;
        self.send(HttpMethod::Put, Self::member_path(&id), item)
            .await
    }

    /// Deletes the entity with `id`. The response body is read as text and
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport failure.
    pub async fn delete(&self, id: &T::Id) -> Result<bool, ResourceError> {
        let request = HttpRequest::builder(HttpMethod::Delete, Self::member_path(id))
            .response_type(DataType::Text)
            .build()
            .map_err(|e| ResourceError::Http(e.into()))?;

        self.http_client.request(request).await?;
        Ok(true)
    }

    /// Updates `item` if it has a present id, otherwise creates it.
    ///
    /// # Errors
    ///
    /// Fails like [`update`](Self::update) or [`create`](Self::create).
    pub async fn save(&self, item: &T) -> Result<T, ResourceError> {
        if item.has_id() {
            self.update(item).await
        } else {
            self.create(item).await
        }
    }

    fn member_path(id: &T::Id) -> String {
        format!("{}/{id}", T::PATH)
    }

    async fn fetch<R: DeserializeOwned>(&self, path: String) -> Result<R, ResourceError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .build()
            .map_err(|e| ResourceError::Http(e.into()))?;

        let response = self.http_client.request(request).await?;
        Self::decode(&response)
    }

    async fn send(&self, method: HttpMethod, path: String, item: &T) -> Result<T, ResourceError> {
        let body = serde_json::to_value(item).map_err(|source| ResourceError::Encode {
            resource: T::NAME,
            source,
        })?;

        let request = HttpRequest::builder(method, path)
            .body(body)
            .body_type(DataType::Json)
            .build()
            .map_err(|e| ResourceError::Http(e.into()))?;

        let response = self.http_client.request(request).await?;
        Self::decode(&response)
    }

    fn decode<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, ResourceError> {
        R::deserialize(&response.body).map_err(|source| ResourceError::Decode {
            resource: T::NAME,
            source,
        })
    }
}
