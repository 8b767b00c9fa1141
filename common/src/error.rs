//! Error taxonomy shared by the date normaliser, the REST transport and the
//! resource stores.
//!
//! Nothing here is fatal. Read failures are logged and leave the current list
//! in place; write failures are returned to the caller, who decides how to
//! surface them (the frontend shows a toast).

use thiserror::Error;

/// Failure talking to the REST backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("server returned status code {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body was not the JSON shape we expected.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Malformed date or time input, caught before anything is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateTimeError {
    #[error("date is empty")]
    Empty,
    #[error("malformed date: {0:?}")]
    MalformedDate(String),
    #[error("malformed time: {0:?}")]
    MalformedTime(String),
    #[error("date does not exist: {0:?}")]
    InvalidDate(String),
    #[error("time out of range: {0:?}")]
    InvalidTime(String),
    #[error("unrecognised timestamp: {0:?}")]
    InvalidInstant(String),
}

pub type DateTimeResult<T> = Result<T, DateTimeError>;

/// Outcome of a failed store operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Network(#[from] ApiError),
    #[error("validation error: {0}")]
    Validation(#[from] DateTimeError),
    /// The user declined a destructive action. A no-op, not a fault.
    #[error("action was not confirmed")]
    NotConfirmed,
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Network(err.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
