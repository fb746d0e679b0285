//! Error types for the library layer.

use reservations_api::ErrorKind;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding input validation failures.
#[derive(thiserror::Error, Debug)]
pub enum ReservationsError {
    /// An error from the underlying API client.
    #[error("API error: {0}")]
    Api(#[from] reservations_api::Error),
    /// User-provided input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// `confirm_delete` was called with no delete awaiting confirmation.
    #[error("No delete is awaiting confirmation")]
    NoPendingDelete,
}

impl ReservationsError {
    /// Classification of the upstream failure, if this came from the API.
    pub fn api_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Api(e) => Some(e.kind()),
            _ => None,
        }
    }
}
