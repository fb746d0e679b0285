//! Library layer for the reservations admin: configuration, input validation,
//! and the list view state machine that drives the API client.
//!
//! The view owns the only copy of the operator's state (filters, cursor,
//! current page of reservations) and exposes explicit transitions; each one
//! that needs fresh data issues its own reload.

pub mod config;
pub mod error;
pub mod filters;
pub mod pagination;
pub mod validation;
pub mod view;

pub use reservations_api;
pub use reservations_api::types;
pub use reservations_api::{Client, ErrorKind, Query, ReservationQuery};

pub use config::Config;
pub use error::ReservationsError;
pub use filters::{build_query, FilterKey, Filters};
pub use pagination::Pagination;
pub use view::{ListView, LoadRequest, Notice, PendingDelete, ViewState};
