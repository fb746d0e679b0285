mod meta;
pub use self::meta::PaginatedResponse;

mod reservation;
pub use self::reservation::{
    DeleteOutcome, Reservation, ReservationId, ServiceType, Status, StatusUpdated, Subscription,
};
