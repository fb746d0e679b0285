use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Server-issued reservation identifier.
///
/// The API is free to send numbers or strings; both are kept as the string
/// form and never interpreted by the client.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(from = "RawId", into = "String")]
pub struct ReservationId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for ReservationId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => ReservationId(n.to_string()),
            RawId::Text(s) => ReservationId(s),
        }
    }
}

impl From<ReservationId> for String {
    fn from(id: ReservationId) -> Self {
        id.0
    }
}

impl From<&str> for ReservationId {
    fn from(s: &str) -> Self {
        ReservationId(s.to_string())
    }
}

impl From<i64> for ReservationId {
    fn from(n: i64) -> Self {
        ReservationId(n.to_string())
    }
}

impl ReservationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Reservation {
    pub id: ReservationId,

    pub name: String,

    #[serde(default)]
    pub phone: String,

    pub email: Option<String>,

    pub address: Option<String>,

    pub date: Option<NaiveDate>,

    pub time: Option<String>,

    pub created_at: Option<String>,

    pub service_type: Option<ServiceType>,

    pub flat_type: Option<String>,

    pub subscription: Option<Subscription>,

    pub plan: Option<String>,

    #[serde(default)]
    pub total_price: f64,

    pub status: Status,

    pub additional_info: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub activities: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Lifecycle state of a reservation. The remote service owns transitions;
/// the client only ever sends one of these four values.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Confirmed,
    Declined,
    Completed,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::Confirmed,
        Status::Declined,
        Status::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Confirmed => "confirmed",
            Status::Declined => "declined",
            Status::Completed => "completed",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Flats,
    Offices,
    /// Any value this client does not know about yet.
    #[serde(other)]
    Other,
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ServiceType::Flats => "flats",
                ServiceType::Offices => "offices",
                ServiceType::Other => "other",
            }
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Subscription {
    OneTime,
    Weekly,
    Biweekly,
    Monthly,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Subscription::OneTime => "one_time",
                Subscription::Weekly => "weekly",
                Subscription::Biweekly => "biweekly",
                Subscription::Monthly => "monthly",
                Subscription::Other => "other",
            }
        )
    }
}

/// Body returned by a status update: either the updated record or whatever
/// acknowledgement the server chose to send.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum StatusUpdated {
    Record(Box<Reservation>),
    Ack(serde_json::Value),
}

/// Result of a delete request that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The server no longer had the record (HTTP 404).
    AlreadyGone,
}
