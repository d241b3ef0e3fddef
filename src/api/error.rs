//! API Error Types
//!
//! Failure modes of a resource fetch. All of them surface to the user as the
//! error banner of the view that issued the request; none propagate further.

use thiserror::Error;

/// Errors from fetching a resource collection
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Transport-level failure (DNS, connection refused, transport timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx HTTP response
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// Response body is not valid JSON, or records do not deserialize
    #[error("Parse error: {0}")]
    Decode(String),
}
