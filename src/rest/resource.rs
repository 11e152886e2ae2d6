//! The [`Resource`] trait describing an entity served by a REST endpoint.
//!
//! # Example
//!
//! ```rust
//! use pg_restful::rest::Resource;
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
//!
//!     const NAME: &'static str = "User";
//!     const PATH: &'static str = "/users";
//!
//!     fn id(&self) -> Option<Self::Id> {
//!         self.id
//!     }
//! }
//!
//! let user = User { id: Some(0), name: "Ada".to_string() };
//! assert!(!user.has_id());
//! ```

use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};

/// An entity identifier.
///
/// `is_present` decides whether an entity already exists on the server:
/// zero and empty strings count as "no id", so such entities are created
/// rather than updated.
pub trait ResourceId: Display + Clone + Send + Sync {
    /// Returns `true` if this id refers to a persisted entity.
    fn is_present(&self) -> bool;
}

macro_rules! impl_numeric_id {
    ($($ty:ty),*) => {
        $(
            impl ResourceId for $ty {
                fn is_present(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_numeric_id!(u32, u64, usize, i32, i64, isize);

impl ResourceId for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

/// An entity that can be listed, fetched, created, updated and deleted
/// through one REST path.
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name used in errors and logs (e.g., "User")
/// - `PATH`: The collection path appended to the API root (e.g., "/users")
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: ResourceId;

    /// The singular name of the resource.
    const NAME: &'static str;

    /// The collection path, starting with `/`.
    const PATH: &'static str;

    /// Returns the resource's ID if it has one.
    fn id(&self) -> Option<Self::Id>;

    /// Returns `true` if the resource carries a present id.
    #[must_use]
    fn has_id(&self) -> bool {
        self.id().is_some_and(|id| id.is_present())
    }
}
