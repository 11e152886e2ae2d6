//! Error type for resource operations.
//!
//! Transport failures are passed through untouched as
//! [`ResourceError::Http`]; status codes are never translated. The remaining
//! variants cover requests that cannot be built from the current state and
//! bodies that do not match the resource type.
//!
//! # Example
//!
//! ```rust,ignore
//! use pg_restful::rest::ResourceError;
//! use pg_restful::clients::HttpError;
//!
//! match store.update(None).await {
//!     Ok(user) => println!("Updated: {}", user.name),
//!     Err(ResourceError::MissingId { resource }) => println!("{resource} has no id yet"),
//!     Err(ResourceError::Http(HttpError::Response(e))) => println!("HTTP {}", e.code),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The operation needs an id and none was given or stored.
    #[error("{resource} has no id; it must be created before it can be updated or deleted")]
    MissingId {
        /// The type name of the resource.
        resource: &'static str,
    },

    /// The operation needs a current item and none is stored.
    #[error("No current {resource} to send")]
    MissingItem {
        /// The type name of the resource.
        resource: &'static str,
    },

    /// Wrapping to the last page needs a pagination snapshot.
    #[error("Cannot wrap to the last page of {resource}: no page has been fetched yet")]
    MissingPagination {
        /// The type name of the resource.
        resource: &'static str,
    },

    /// The request body could not be serialized.
    #[error("Failed to serialize {resource}: {source}")]
    Encode {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to parse {resource} response: {source}")]
    Decode {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns the HTTP status code for transport errors that carry one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_missing_id_message_names_resource() {
        let error = ResourceError::MissingId { resource: "User" };
        assert!(error.to_string().starts_with("User has no id"));
    }

    #[test]
    fn test_http_error_is_transparent() {
        let error = ResourceError::from(HttpError::Response(HttpResponseError {
            code: 404,
            message: "gone".to_string(),
            error_reference: None,
        }));

        assert_eq!(error.to_string(), "HTTP 404: gone");
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let error = ResourceError::Decode {
            resource: "User",
            source,
        };

        assert!(error.to_string().contains("User"));
        assert!(std::error::Error::source(&error).is_some());
        assert_eq!(error.status(), None);
    }
}
