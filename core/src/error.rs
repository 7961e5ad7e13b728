//! Error types for the heroes API client.
//!
//! # Design
//! `TransportError` is what a [`Transport`](crate::transport::Transport) may
//! fail with: the request never produced a response. `ApiError` is everything
//! that can go wrong for one operation, transport failures included. Neither
//! escapes `HeroService`; they are rendered into notifications there.

use thiserror::Error;

/// The request could not be carried out (connection refused, DNS failure,
/// interrupted body, ...). Only the message survives the boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors returned by `HeroClient` build/parse methods and the transport.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested hero does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned an unexpected status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
