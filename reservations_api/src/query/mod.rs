mod common;
pub use self::common::{Query, QueryCommon, DEFAULT_PAGE, DEFAULT_PER_PAGE};

mod reservation;
pub use self::reservation::ReservationQuery;
