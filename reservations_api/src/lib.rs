//! Typed client for the reservations admin REST API.

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::{Error, ErrorKind};
pub use self::query::{Query, QueryCommon, ReservationQuery, DEFAULT_PAGE, DEFAULT_PER_PAGE};
