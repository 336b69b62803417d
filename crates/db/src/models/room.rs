//! Hotel room entity model and DTOs.

use hotelrooms_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `hotel_rooms` table.
///
/// Rooms are addressed by `room_number` on the wire; the surrogate `id` and
/// audit timestamps stay internal.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    #[serde(skip)]
    pub id: DbId,
    pub room_number: String,
    pub description: String,
    pub day_price: i32,
    pub date_create: Date,
    #[serde(skip)]
    pub created_at: Timestamp,
    #[serde(skip)]
    pub updated_at: Timestamp,
}

/// DTO for creating a room.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoom {
    pub room_number: String,
    #[validate(length(max = 255, message = "description must be at most 255 characters"))]
    pub description: String,
    #[validate(range(min = 0, max = 999_999, message = "day_price must be between 0 and 999999"))]
    pub day_price: i32,
}

/// DTO for replacing a room's mutable fields. `room_number` is read-only and
/// ignored if present in the body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRoom {
    #[validate(length(max = 255, message = "description must be at most 255 characters"))]
    pub description: String,
    #[validate(range(min = 0, max = 999_999, message = "day_price must be between 0 and 999999"))]
    pub day_price: i32,
}

impl CreateRoom {
    /// Strip surrounding whitespace from the text fields.
    pub fn trimmed(self) -> Self {
        Self {
            room_number: self.room_number.trim().to_string(),
            description: self.description.trim().to_string(),
            ..self
        }
    }
}

impl UpdateRoom {
    pub fn trimmed(self) -> Self {
        Self {
            description: self.description.trim().to_string(),
            ..self
        }
    }
}

/// Response body for `POST /rooms`.
#[derive(Debug, Serialize)]
pub struct RoomCreated {
    pub room_number: String,
}
