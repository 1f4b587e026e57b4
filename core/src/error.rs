//! Error types for the users API client and the controller.
//!
//! # Design
//! `ApiError` keeps the detail a transport or server fault carries (status,
//! body, parse message) so it can be logged. The controller collapses all of
//! it into one user-facing category: `ActionError::Network` is reported as a
//! single generic message per operation, next to local validation failures.

use thiserror::Error;

use crate::controller::Operation;
use crate::types::UserId;

/// Errors returned by `UsersClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404. The user does not exist remotely.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}

/// A request could not be carried to the server.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Transport(err.0)
    }
}

/// Local presence check failure. Never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
}

/// Outcome of a controller action that did not apply.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{operation} failed: {source}")]
    Network {
        operation: Operation,
        #[source]
        source: ApiError,
    },

    /// Another request is still outstanding.
    #[error("a request is already in flight")]
    Busy,

    #[error("no user with id {0} in the local list")]
    UnknownUser(UserId),

    /// `complete` was called without a matching `begin_*`.
    #[error("no request is outstanding")]
    NothingPending,
}
