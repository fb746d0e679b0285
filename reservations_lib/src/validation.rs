use chrono::NaiveDate;
use reservations_api::types::{ReservationId, ServiceType, Status, Subscription};
use reservations_api::{DEFAULT_PAGE, DEFAULT_PER_PAGE};

use crate::error::ReservationsError;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_PER_PAGE: i64 = 100;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit. Blank input comes back as an empty string.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, ReservationsError> {
    if input.len() > max_len {
        return Err(ReservationsError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    Ok(input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string())
}

/// Validate a name search string: enforce length, strip control chars, trim.
pub fn validate_name(input: &str) -> Result<String, ReservationsError> {
    sanitize_text(input, MAX_NAME_LENGTH)
}

/// Validate a status string against the four statuses the service knows.
pub fn validate_status(input: &str) -> Result<Status, ReservationsError> {
    match input.trim().to_lowercase().as_str() {
        "pending" => Ok(Status::Pending),
        "confirmed" => Ok(Status::Confirmed),
        "declined" => Ok(Status::Declined),
        "completed" => Ok(Status::Completed),
        _ => Err(ReservationsError::InvalidInput(format!(
            "unknown status '{}'. Valid values: pending, confirmed, declined, completed",
            input
        ))),
    }
}

pub fn validate_service_type(input: &str) -> Result<ServiceType, ReservationsError> {
    match input.trim().to_lowercase().as_str() {
        "flats" | "flat" => Ok(ServiceType::Flats),
        "offices" | "office" => Ok(ServiceType::Offices),
        _ => Err(ReservationsError::InvalidInput(format!(
            "unknown service type '{}'. Valid values: flats, offices",
            input
        ))),
    }
}

/// Validate a subscription tier. Accepts `one_time`, `one-time` and `onetime`.
pub fn validate_subscription(input: &str) -> Result<Subscription, ReservationsError> {
    match input.trim().to_lowercase().as_str() {
        "one_time" | "one-time" | "onetime" => Ok(Subscription::OneTime),
        "weekly" => Ok(Subscription::Weekly),
        "biweekly" => Ok(Subscription::Biweekly),
        "monthly" => Ok(Subscription::Monthly),
        _ => Err(ReservationsError::InvalidInput(format!(
            "unknown subscription '{}'. Valid values: one_time, weekly, biweekly, monthly",
            input
        ))),
    }
}

pub fn validate_date(input: &str) -> Result<NaiveDate, ReservationsError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        ReservationsError::InvalidInput(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2024-06-01)",
            trimmed
        ))
    })
}

/// Reject ids that would address the collection instead of one record.
pub fn validate_id(id: &ReservationId) -> Result<(), ReservationsError> {
    if id.as_str().trim().is_empty() {
        return Err(ReservationsError::InvalidInput(
            "reservation id must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Coerce a raw page number. Anything that is not a positive integer becomes page 1.
pub fn coerce_page(input: Option<&str>) -> i64 {
    coerce_positive(input).unwrap_or(DEFAULT_PAGE)
}

/// Coerce a raw page size. Anything that is not a positive integer becomes 10;
/// larger values are capped at [`MAX_PER_PAGE`].
pub fn coerce_per_page(input: Option<&str>) -> i64 {
    coerce_positive(input)
        .map(|n| n.min(MAX_PER_PAGE))
        .unwrap_or(DEFAULT_PER_PAGE)
}

fn coerce_positive(input: Option<&str>) -> Option<i64> {
    input
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Text --

    #[test]
    fn name_trimmed_and_stripped() {
        assert_eq!(validate_name("  Ivan\u{7}  ").unwrap(), "Ivan");
    }

    #[test]
    fn name_blank_is_empty() {
        assert_eq!(validate_name("   ").unwrap(), "");
    }

    #[test]
    fn name_too_long() {
        assert!(validate_name(&"a".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    // -- Enumerations --

    #[test]
    fn status_case_insensitive() {
        assert_eq!(validate_status("Confirmed").unwrap(), Status::Confirmed);
        assert_eq!(validate_status(" declined ").unwrap(), Status::Declined);
    }

    #[test]
    fn status_unknown_rejected() {
        assert!(validate_status("archived").is_err());
        assert!(validate_status("").is_err());
    }

    #[test]
    fn every_status_round_trips_through_its_name() {
        for status in Status::ALL {
            assert_eq!(validate_status(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn service_type_singular_accepted() {
        assert_eq!(validate_service_type("office").unwrap(), ServiceType::Offices);
        assert_eq!(validate_service_type("FLATS").unwrap(), ServiceType::Flats);
        assert!(validate_service_type("houses").is_err());
    }

    #[test]
    fn subscription_spellings() {
        assert_eq!(
            validate_subscription("one-time").unwrap(),
            Subscription::OneTime
        );
        assert_eq!(validate_subscription("monthly").unwrap(), Subscription::Monthly);
        assert!(validate_subscription("yearly").is_err());
    }

    // -- Dates --

    #[test]
    fn date_valid() {
        let d = validate_date(" 2024-06-01 ").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn date_wrong_format() {
        assert!(validate_date("01/06/2024").is_err());
        assert!(validate_date("2024-02-30").is_err());
    }

    // -- Ids --

    #[test]
    fn blank_id_rejected() {
        assert!(validate_id(&ReservationId::from("")).is_err());
        assert!(validate_id(&ReservationId::from("  ")).is_err());
        assert!(validate_id(&ReservationId::from(7)).is_ok());
        assert!(validate_id(&ReservationId::from("b9f1c2")).is_ok());
    }

    // -- Pagination coercion --

    #[test]
    fn page_defaults_when_missing_or_garbage() {
        assert_eq!(coerce_page(None), 1);
        assert_eq!(coerce_page(Some("")), 1);
        assert_eq!(coerce_page(Some("abc")), 1);
        assert_eq!(coerce_page(Some("0")), 1);
        assert_eq!(coerce_page(Some("-3")), 1);
        assert_eq!(coerce_page(Some("2.5")), 1);
    }

    #[test]
    fn page_accepts_positive_integers() {
        assert_eq!(coerce_page(Some("4")), 4);
        assert_eq!(coerce_page(Some(" 12 ")), 12);
    }

    #[test]
    fn per_page_defaults_and_caps() {
        assert_eq!(coerce_per_page(None), 10);
        assert_eq!(coerce_per_page(Some("ten")), 10);
        assert_eq!(coerce_per_page(Some("25")), 25);
        assert_eq!(coerce_per_page(Some("5000")), MAX_PER_PAGE);
    }
}
