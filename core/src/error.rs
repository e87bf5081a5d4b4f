//! Error types for the users API client.
//!
//! # Design
//! The dashboard only ever shows one message for a failed fetch, but the
//! variants stay distinct so the cause can be logged before the store
//! collapses it.

use thiserror::Error;

/// Errors produced while fetching the user list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with something other than 200.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body was not a JSON array of users.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The host could not complete the round-trip at all.
    #[error("transport failed: {0}")]
    Transport(String),
}
