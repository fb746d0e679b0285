//! The reservation list view: filter/pagination state machine plus the
//! fetch and mutation commands that drive it.
//!
//! [`ViewState`] holds everything the operator sees and only changes through
//! its transition methods. [`ListView`] pairs it with an API [`Client`] and
//! issues the requests. Every transition that needs fresh data reloads
//! explicitly; nothing refetches behind the caller's back.
//!
//! Loads are never de-duplicated or cancelled. When two requests overlap,
//! whichever response is applied last wins, even if it answers the older
//! request.

use reservations_api::types::{DeleteOutcome, PaginatedResponse, Reservation, ReservationId, Status};
use reservations_api::{Client, ErrorKind, ReservationQuery};

use crate::error::ReservationsError;
use crate::filters::{build_query, FilterKey, Filters};
use crate::pagination::Pagination;
use crate::validation;

/// Operator-visible report of the most recent failure.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// A read failed; the table still shows the previous results.
    LoadFailed { reason: String },
    DeleteFailed { id: ReservationId, reason: String },
    StatusUpdateFailed {
        id: ReservationId,
        status: Status,
        reason: String,
    },
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::LoadFailed { reason } => {
                write!(f, "Refresh failed, showing previous results: {}", reason)
            }
            Notice::DeleteFailed { id, reason } => {
                write!(f, "Reservation {} was not deleted: {}", id, reason)
            }
            Notice::StatusUpdateFailed { id, status, reason } => write!(
                f,
                "Reservation {} was not set to {}: {}",
                id, status, reason
            ),
        }
    }
}

/// A delete the operator asked for but has not confirmed yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: ReservationId,
}

/// A read request that has been issued and not yet applied.
#[derive(Clone, Debug)]
pub struct LoadRequest {
    /// Issue order, starting at 1.
    pub seq: u64,
    pub query: ReservationQuery,
}

#[derive(Debug, Default)]
pub struct ViewState {
    reservations: Vec<Reservation>,
    loading: bool,
    filters: Filters,
    pagination: Pagination,
    notice: Option<Notice>,
    pending_delete: Option<PendingDelete>,
    issued: u64,
}

impl ViewState {
    pub fn new(per_page: i64) -> Self {
        Self {
            pagination: Pagination::with_per_page(per_page),
            ..Self::default()
        }
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    /// True when the latest failure was a read. After an API error from a
    /// mutation this means the mutation itself went through and only the
    /// follow-up reload failed.
    pub fn reload_failed(&self) -> bool {
        matches!(self.notice, Some(Notice::LoadFailed { .. }))
    }

    /// Edits one filter without loading; the change takes effect on the next load.
    pub fn set_filter(&mut self, key: FilterKey, raw: &str) -> Result<(), ReservationsError> {
        self.filters.set(key, raw)
    }

    pub fn clear_filter(&mut self, key: FilterKey) {
        self.filters.clear(key);
    }

    /// Positions the cursor from raw input before the first load.
    pub fn set_cursor(&mut self, page: Option<&str>, per_page: Option<&str>) {
        self.pagination.page = validation::coerce_page(page);
        if per_page.is_some() {
            self.pagination.per_page = validation::coerce_per_page(per_page);
        }
    }

    /// Enters Loading and returns the request to send. The collection is untouched.
    pub fn begin_load(&mut self) -> LoadRequest {
        self.issued += 1;
        self.loading = true;
        let query = build_query(&self.filters, &self.pagination);
        tracing::debug!("load #{} requested: {:?}", self.issued, query);
        LoadRequest {
            seq: self.issued,
            query,
        }
    }

    /// Replaces the collection with a successful response.
    ///
    /// Returns true when the new total no longer reaches the current page;
    /// the page has then been clamped and the caller should load again.
    pub fn apply_loaded(
        &mut self,
        request: &LoadRequest,
        resp: PaginatedResponse<Reservation>,
    ) -> bool {
        if request.seq < self.issued {
            tracing::debug!(
                "applying load #{} after #{} was issued",
                request.seq,
                self.issued
            );
        }
        self.reservations = resp.data;
        self.pagination.total = resp.total.max(0);
        self.loading = false;
        self.notice = None;
        tracing::info!(
            "loaded {} reservations (page {}/{}, {} total)",
            self.reservations.len(),
            self.pagination.page,
            self.pagination.last_page(),
            self.pagination.total
        );
        self.pagination.clamp()
    }

    /// Leaves the collection as it was and surfaces the failure.
    pub fn apply_failed(&mut self, request: &LoadRequest, err: &reservations_api::Error) {
        tracing::error!("load #{} failed: {}", request.seq, err);
        self.loading = false;
        self.notice = Some(Notice::LoadFailed {
            reason: describe(err),
        });
    }

    /// Applying a new filter set invalidates the old page position.
    pub fn submit_filters(&mut self) {
        self.pagination.page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.filters = Filters::default();
        self.pagination.page = 1;
    }

    /// Advances one page. Returns false, changing nothing, on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.pagination.has_next() {
            return false;
        }
        self.pagination.page += 1;
        true
    }

    /// Goes back one page. Returns false, changing nothing, on page 1.
    pub fn prev_page(&mut self) -> bool {
        if !self.pagination.has_prev() {
            return false;
        }
        self.pagination.page -= 1;
        true
    }

    /// Jumps to a page, coerced and clamped to the known range.
    pub fn go_to_page(&mut self, raw: &str) {
        self.pagination.page = validation::coerce_page(Some(raw));
        self.pagination.clamp();
    }

    pub fn set_per_page(&mut self, raw: &str) {
        self.pagination.per_page = validation::coerce_per_page(Some(raw));
        self.pagination.page = 1;
    }

    /// First step of a delete: remember the intent, send nothing.
    ///
    /// A blank id is refused and any earlier intent is left in place.
    pub fn request_delete(
        &mut self,
        id: ReservationId,
    ) -> Result<&PendingDelete, ReservationsError> {
        validation::validate_id(&id)?;
        Ok(self.pending_delete.insert(PendingDelete { id }))
    }

    pub fn cancel_delete(&mut self) -> Option<PendingDelete> {
        self.pending_delete.take()
    }

    fn take_pending_delete(&mut self) -> Result<PendingDelete, ReservationsError> {
        self.pending_delete
            .take()
            .ok_or(ReservationsError::NoPendingDelete)
    }

    fn record(&mut self, notice: Notice) {
        tracing::error!("{}", notice);
        self.notice = Some(notice);
    }
}

/// Operator-facing wording for a failed request, chosen by [`ErrorKind`].
fn describe(err: &reservations_api::Error) -> String {
    let detail = match err {
        reservations_api::Error::HttpStatus { body, .. } if !body.trim().is_empty() => {
            format!(": {}", body.trim())
        }
        _ => String::new(),
    };
    match (err.kind(), err.status()) {
        (ErrorKind::Server, Some(status)) => format!("server unavailable ({}){}", status, detail),
        (ErrorKind::Client, Some(status)) => format!("request rejected ({}){}", status, detail),
        (ErrorKind::Transport, _) => format!("network failure: {}", err),
        (ErrorKind::Decode, _) => format!("unexpected response from server: {}", err),
        _ => err.to_string(),
    }
}

/// The list view bound to a client.
pub struct ListView {
    client: Client,
    state: ViewState,
}

impl ListView {
    pub fn new(client: Client) -> Self {
        Self::with_per_page(client, reservations_api::DEFAULT_PER_PAGE)
    }

    pub fn with_per_page(client: Client, per_page: i64) -> Self {
        Self {
            client,
            state: ViewState::new(per_page),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_filter(&mut self, key: FilterKey, raw: &str) -> Result<(), ReservationsError> {
        self.state.set_filter(key, raw)
    }

    pub fn clear_filter(&mut self, key: FilterKey) {
        self.state.clear_filter(key);
    }

    pub fn set_cursor(&mut self, page: Option<&str>, per_page: Option<&str>) {
        self.state.set_cursor(page, per_page);
    }

    /// Loads the current page. Used on mount and for an explicit refresh.
    pub async fn refresh(&mut self) -> Result<(), ReservationsError> {
        if self.fetch().await? {
            tracing::info!(
                "page moved back to {} after the result set shrank",
                self.state.pagination.page
            );
            self.fetch().await?;
        }
        Ok(())
    }

    async fn fetch(&mut self) -> Result<bool, ReservationsError> {
        let request = self.state.begin_load();
        match self.client.get_reservations(&request.query).await {
            Ok(resp) => Ok(self.state.apply_loaded(&request, resp)),
            Err(e) => {
                self.state.apply_failed(&request, &e);
                Err(e.into())
            }
        }
    }

    pub async fn submit_filters(&mut self) -> Result<(), ReservationsError> {
        self.state.submit_filters();
        self.refresh().await
    }

    pub async fn reset_filters(&mut self) -> Result<(), ReservationsError> {
        self.state.reset_filters();
        self.refresh().await
    }

    /// Returns false without a request when already on the last page.
    pub async fn next_page(&mut self) -> Result<bool, ReservationsError> {
        if !self.state.next_page() {
            return Ok(false);
        }
        self.refresh().await?;
        Ok(true)
    }

    /// Returns false without a request when already on page 1.
    pub async fn prev_page(&mut self) -> Result<bool, ReservationsError> {
        if !self.state.prev_page() {
            return Ok(false);
        }
        self.refresh().await?;
        Ok(true)
    }

    pub async fn go_to_page(&mut self, raw: &str) -> Result<(), ReservationsError> {
        self.state.go_to_page(raw);
        self.refresh().await
    }

    pub async fn set_per_page(&mut self, raw: &str) -> Result<(), ReservationsError> {
        self.state.set_per_page(raw);
        self.refresh().await
    }

    pub fn request_delete(
        &mut self,
        id: ReservationId,
    ) -> Result<&PendingDelete, ReservationsError> {
        self.state.request_delete(id)
    }

    pub fn cancel_delete(&mut self) -> Option<PendingDelete> {
        let cancelled = self.state.cancel_delete();
        if let Some(pending) = &cancelled {
            tracing::info!("delete of reservation {} cancelled", pending.id);
        }
        cancelled
    }

    /// Second step of a delete: send it, then reload on success.
    ///
    /// On failure the row stays in the collection and a notice is recorded.
    pub async fn confirm_delete(&mut self) -> Result<DeleteOutcome, ReservationsError> {
        let PendingDelete { id } = self.state.take_pending_delete()?;
        match self.client.delete_reservation(&id).await {
            Ok(outcome) => {
                tracing::info!("reservation {} deleted ({:?})", id, outcome);
                self.refresh().await?;
                Ok(outcome)
            }
            Err(e) => {
                self.state.record(Notice::DeleteFailed {
                    id,
                    reason: describe(&e),
                });
                Err(e.into())
            }
        }
    }

    /// Asks the server to move a reservation to `status`, then reloads so the
    /// row shows what the server actually stored.
    pub async fn update_status(
        &mut self,
        id: &ReservationId,
        status: Status,
    ) -> Result<(), ReservationsError> {
        validation::validate_id(id)?;
        match self.client.update_reservation_status(id, status).await {
            Ok(_) => {
                tracing::info!("reservation {} set to {}", id, status);
                self.refresh().await
            }
            Err(e) => {
                self.state.record(Notice::StatusUpdateFailed {
                    id: id.clone(),
                    status,
                    reason: describe(&e),
                });
                Err(e.into())
            }
        }
    }
}
