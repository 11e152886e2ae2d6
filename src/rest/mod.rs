//! Generic REST resource clients.
//!
//! - **[`Resource`] trait**: the entity contract (serde, id accessor, path)
//! - **[`Query`]**: immutable search/sort/paging parameters
//! - **[`Pagination<T>`]**: the page envelope returned by paginated requests
//! - **[`ResourceClient<T>`]**: stateless CRUD and list operations
//! - **[`ResourceStore<T>`]**: the same operations plus stored query, item,
//!   item list and pagination snapshot
//! - **[`ResourceError`]**: errors for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use pg_restful::rest::{Query, Resource, ResourceClient, ResourceStore};
//!
//! // Stateless, safe to share between tasks
//! let users: ResourceClient<User> = ResourceClient::new(&config);
//! let first_page = users.paginate(&Query::new().per_page(20)).await?;
//!
//! // Stateful, with chainable query setters
//! let mut store: ResourceStore<User> = ResourceStore::new(&config);
//! store.search("ada").order_by("name").order("asc");
//! store.pagination().await?;
//! for user in store.items().unwrap_or_default() {
//!     println!("{}", user.name);
//! }
//! ```

mod client;
mod errors;
mod pagination;
mod query;
mod resource;
mod store;

pub use client::ResourceClient;
pub use errors::ResourceError;
pub use pagination::{next_page, previous_page, Pagination};
pub use query::{Query, DEFAULT_PAGE, DEFAULT_PER_PAGE, PAGINATE_FLAG, QUERY_MARKER};
pub use resource::{Resource, ResourceId};
pub use store::ResourceStore;
