//! Room reservation entity model and DTOs.

use hotelrooms_core::reservations::DateRange;
use hotelrooms_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A reservation joined with the room it books.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    #[serde(skip)]
    pub room_id: DbId,
    pub room_number: String,
    pub date_start: Date,
    pub date_end: Date,
}

impl Reservation {
    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.date_start,
            end: self.date_end,
        }
    }
}

/// DTO for booking a room.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReservation {
    pub room_number: String,
    pub date_start: Date,
    pub date_end: Date,
}

impl CreateReservation {
    /// Strip surrounding whitespace from the room number.
    pub fn trimmed(self) -> Self {
        Self {
            room_number: self.room_number.trim().to_string(),
            ..self
        }
    }
}

/// DTO for moving an existing reservation. The booked room cannot change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReservation {
    pub date_start: Date,
    pub date_end: Date,
}

/// Response body for `POST /reservations`.
#[derive(Debug, Serialize)]
pub struct ReservationCreated {
    pub id: DbId,
}
