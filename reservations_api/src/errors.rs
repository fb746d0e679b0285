//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API answered with a success status but the body did not decode.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
    /// The request URL could not be constructed from the base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Coarse classification of an [`Error`]. The list view words its notices by kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure, timeout, or a malformed request URL.
    Transport,
    /// The server rejected the request (4xx).
    Client,
    /// The server failed to handle the request (5xx and anything else non-2xx).
    Server,
    /// The response body was not what the client expected.
    Decode,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RequestFailed | Error::InvalidUrl(_) => ErrorKind::Transport,
            Error::HttpStatus { status, .. } if (400..500).contains(status) => ErrorKind::Client,
            Error::HttpStatus { .. } => ErrorKind::Server,
            Error::ParseFailed(_) => ErrorKind::Decode,
        }
    }

    /// Returns the HTTP status if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_status_range() {
        let not_found = Error::HttpStatus {
            status: 404,
            body: String::new(),
        };
        let unavailable = Error::HttpStatus {
            status: 503,
            body: String::new(),
        };
        assert_eq!(not_found.kind(), ErrorKind::Client);
        assert_eq!(unavailable.kind(), ErrorKind::Server);
        assert_eq!(Error::RequestFailed.kind(), ErrorKind::Transport);
        assert_eq!(Error::ParseFailed("eof".into()).kind(), ErrorKind::Decode);
        assert_eq!(not_found.status(), Some(404));
        assert_eq!(Error::RequestFailed.status(), None);
    }
}
