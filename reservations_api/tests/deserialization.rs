use reservations_api::types::{
    PaginatedResponse, Reservation, ReservationId, ServiceType, Status, StatusUpdated,
    Subscription,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_reservations_full() {
    let json = load_fixture("reservations.json");
    let resp: PaginatedResponse<Reservation> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.total, 25);
    assert_eq!(resp.page, Some(1));
    assert_eq!(resp.per_page, Some(10));

    let ivan = &resp.data[0];
    assert_eq!(ivan.id, ReservationId::from(7));
    assert_eq!(ivan.name, "Ivan Petrov");
    assert_eq!(ivan.email.as_deref(), Some("ivan@example.com"));
    assert_eq!(ivan.date.unwrap().to_string(), "2024-05-14");
    assert_eq!(ivan.time.as_deref(), Some("10:30"));
    assert_eq!(ivan.service_type, Some(ServiceType::Flats));
    assert_eq!(ivan.subscription, Some(Subscription::Weekly));
    assert_eq!(ivan.total_price, 120.5);
    assert_eq!(ivan.status, Status::Pending);
    assert_eq!(ivan.activities, vec!["windows", "kitchen"]);
}

#[test]
fn deserialize_string_ids_and_nulls() {
    let json = load_fixture("reservations.json");
    let resp: PaginatedResponse<Reservation> = serde_json::from_str(&json).unwrap();

    let office = &resp.data[1];
    assert_eq!(office.id.as_str(), "b9f1c2");
    assert_eq!(office.email, None);
    assert_eq!(office.total_price, 980.0);
    assert_eq!(office.status, Status::Confirmed);
    assert!(office.activities.is_empty());
}

#[test]
fn unknown_subscription_tier_is_tolerated() {
    let json = load_fixture("reservations.json");
    let resp: PaginatedResponse<Reservation> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data[1].subscription, Some(Subscription::Other));
}

#[test]
fn deserialize_reservations_empty() {
    let json = load_fixture("reservations_empty.json");
    let resp: PaginatedResponse<Reservation> = serde_json::from_str(&json).unwrap();
    assert!(resp.data.is_empty());
    assert_eq!(resp.total, 0);
}

#[test]
fn unknown_status_is_rejected() {
    let json = r#"{"data": [{"id": 1, "name": "X", "status": "archived"}], "total": 1}"#;
    let result = serde_json::from_str::<PaginatedResponse<Reservation>>(json);
    assert!(result.is_err());
}

#[test]
fn status_update_body_variants() {
    let record: StatusUpdated =
        serde_json::from_str(&load_fixture("reservation_confirmed.json")).unwrap();
    match record {
        StatusUpdated::Record(r) => assert_eq!(r.status, Status::Confirmed),
        StatusUpdated::Ack(_) => panic!("expected a record"),
    }

    let ack: StatusUpdated = serde_json::from_str(r#"{"message": "updated"}"#).unwrap();
    assert!(matches!(ack, StatusUpdated::Ack(_)));
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"data": [{"name": "No id"}], "total": 1}"#;
    let result = serde_json::from_str::<PaginatedResponse<Reservation>>(json);
    assert!(result.is_err());
}
