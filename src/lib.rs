//! # pg-restful
//!
//! Generic REST resource clients with a fluent query builder and local
//! pagination state.
//!
//! ## Overview
//!
//! This crate provides:
//! - Validated configuration via [`PgConfig`] and [`PgConfigBuilder`]
//! - An async HTTP layer on `reqwest` ([`clients`])
//! - The [`Resource`] trait an entity implements to get CRUD operations
//! - [`Query`], an immutable search/sort/paging description rendered into the
//!   endpoint's query string
//! - [`ResourceClient`], stateless operations taking an explicit query
//! - [`ResourceStore`], the stateful variant that keeps the current query,
//!   item, item list and pagination snapshot
//!
//! ## Quick Start
//!
//! ```rust
//! use pg_restful::{HostUrl, PgConfig, Query};
//!
//! let config = PgConfig::builder()
//!     .host(HostUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_root(), "https://api.example.com/api/v3");
//!
//! let query = Query::new().search("ada").search_in("name");
//! assert_eq!(
//!     query.to_paginated_query_string(),
//!     "?method=get&keyword=ada&in=name&per_page=100&page=1&paginate=1"
//! );
//! ```
//!
//! ## Defining a Resource
//!
//! ```rust,ignore
//! use pg_restful::{Resource, ResourceStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct User {
//!     #[serde(default, skip_serializing_if = "Option::is_none")]
//!     pub id: Option<u64>,
//!     pub name: String,
//! }
//!
//! impl Resource for User {
//!     type Id = u64;
//!     const NAME: &'static str = "User";
//!     const PATH: &'static str = "/users";
//!
//!     fn id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//!
//! let mut users: ResourceStore<User> = ResourceStore::new(&config);
//! users.per_page(20).order_by("name");
//! let page = users.pagination().await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **One request per operation**: No hidden retries unless asked for
//! - **Errors pass through**: Transport errors reach the caller unchanged
//! - **Async-first**: Designed for use with the Tokio runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use config::{AccessToken, HostUrl, PgConfig, PgConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};

pub use rest::{
    Pagination, Query, Resource, ResourceClient, ResourceError, ResourceId, ResourceStore,
};
