//! Query parameter types shared by the list endpoints.

use hotelrooms_core::rooms::RoomOrdering;
use serde::Deserialize;

/// `?sort=&order=` on `GET /rooms`.
///
/// `sort` accepts `day_price` or `date_create`; `order` accepts `asc` or
/// `desc`. Unrecognized values are ignored rather than rejected.
#[derive(Debug, Default, Deserialize)]
pub struct RoomSortParams {
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl RoomSortParams {
    pub fn ordering(&self) -> RoomOrdering {
        RoomOrdering::from_params(self.sort.as_deref(), self.order.as_deref())
    }
}

/// `?room_number=` filter on `GET /reservations`.
#[derive(Debug, Default, Deserialize)]
pub struct ReservationFilterParams {
    pub room_number: Option<String>,
}
