//! HTTP client layer.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client bound to one API root
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Body representations (JSON or plain text)
//! - [`HttpError`]: Unified transport error
//!
//! # Retry Behavior
//!
//! The default `tries` is 1, meaning no automatic retries. With
//! `.tries(n)` on [`HttpRequest::builder`], 429 responses are retried after
//! `Retry-After` (or 1 second) and 500 responses after 1 second. Other
//! errors return immediately.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
