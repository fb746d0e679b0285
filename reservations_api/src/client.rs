//! HTTP client for the reservations admin API.

use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    query::{Query, ReservationQuery},
    types::{DeleteOutcome, PaginatedResponse, Reservation, ReservationId, Status, StatusUpdated},
    Error,
};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const RESERVATIONS_PATH: &str = "/admin/reservations";

/// HTTP client for the reservations admin API.
///
/// Holds one `reqwest::Client` so connections are reused across the
/// list/refresh/mutate cycle. Every request is bounded by the configured
/// timeout; a timeout surfaces as [`Error::RequestFailed`].
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API, without a trailing slash.
    base_api_url: String,
}

#[derive(Serialize)]
struct StatusBody {
    status: Status,
}

impl Client {
    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom base URL and request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e.to_string())
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    fn reservation_url(&self, id: &ReservationId) -> Result<Url, Error> {
        // An empty segment would address the whole collection.
        if id.as_str().trim().is_empty() {
            tracing::error!("Refusing to build a reservation URL for a blank id");
            return Err(Error::InvalidUrl("blank reservation id".to_string()));
        }
        let mut url = self.get_url(RESERVATIONS_PATH, None::<&ReservationQuery>)?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(format!("{} cannot be a base", self.base_api_url)))?
            .push(id.as_str());
        Ok(url)
    }

    /// Sends the request and reads the whole body. Does not judge the status.
    async fn execute(&self, request: RequestBuilder) -> Result<(StatusCode, String), Error> {
        let resp = request
            .header("accept", "application/json, text/plain, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;
        Ok((status, body))
    }

    fn check_status(status: StatusCode, body: &str) -> Result<(), Error> {
        if status.is_success() {
            return Ok(());
        }
        let snippet = truncate_body(body);
        tracing::error!("Request failed with status {}: {}", status, snippet);
        Err(Error::HttpStatus {
            status: status.as_u16(),
            body: snippet,
        })
    }

    fn parse<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
        serde_json::from_str::<T>(body).map_err(|e| {
            let snippet = truncate_body(body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::ParseFailed(e.to_string())
        })
    }

    /// Fetches one page of reservations matching the given query.
    pub async fn get_reservations(
        &self,
        query: &ReservationQuery,
    ) -> Result<PaginatedResponse<Reservation>, Error> {
        let url = self.get_url(RESERVATIONS_PATH, Some(query))?;
        tracing::debug!("GET {}", url);
        let (status, body) = self.execute(self.http.get(url)).await?;
        Self::check_status(status, &body)?;
        Self::parse(&body)
    }

    /// Deletes a reservation. A 404 means someone already removed it and is
    /// reported as [`DeleteOutcome::AlreadyGone`] rather than an error.
    pub async fn delete_reservation(&self, id: &ReservationId) -> Result<DeleteOutcome, Error> {
        let url = self.reservation_url(id)?;
        tracing::debug!("DELETE {}", url);
        let (status, body) = self.execute(self.http.delete(url)).await?;
        if status == StatusCode::NOT_FOUND {
            tracing::warn!("Reservation {} was already gone", id);
            return Ok(DeleteOutcome::AlreadyGone);
        }
        Self::check_status(status, &body)?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Sets the status of a reservation.
    pub async fn update_reservation_status(
        &self,
        id: &ReservationId,
        status: Status,
    ) -> Result<StatusUpdated, Error> {
        let url = self.reservation_url(id)?;
        tracing::debug!("PATCH {} status={}", url, status);
        let (code, body) = self
            .execute(self.http.patch(url).json(&StatusBody { status }))
            .await?;
        Self::check_status(code, &body)?;
        if body.trim().is_empty() {
            return Ok(StatusUpdated::Ack(serde_json::Value::Null));
        }
        Self::parse(&body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
