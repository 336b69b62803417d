//! Repository for the `hotel_rooms` table.

use hotelrooms_core::rooms::RoomOrdering;
use sqlx::PgPool;

use crate::models::room::{CreateRoom, Room, UpdateRoom};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, room_number, description, day_price, date_create, created_at, updated_at";

/// Provides CRUD operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room, returning the created row. `date_create` is set by
    /// the database.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO hotel_rooms (room_number, description, day_price)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(&input.room_number)
            .bind(&input.description)
            .bind(input.day_price)
            .fetch_one(pool)
            .await
    }

    /// Find a room by its public room number.
    pub async fn find_by_room_number(
        pool: &PgPool,
        room_number: &str,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotel_rooms WHERE room_number = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(room_number)
            .fetch_optional(pool)
            .await
    }

    /// List every room in the requested order.
    pub async fn list(pool: &PgPool, ordering: &RoomOrdering) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hotel_rooms ORDER BY {}",
            ordering.order_by_clause()
        );
        sqlx::query_as::<_, Room>(&query).fetch_all(pool).await
    }

    /// Replace a room's description and price.
    ///
    /// Returns `None` if no room with the given number exists.
    pub async fn update(
        pool: &PgPool,
        room_number: &str,
        input: &UpdateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!(
            "UPDATE hotel_rooms SET
                description = $2,
                day_price = $3,
                updated_at = NOW()
             WHERE room_number = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(room_number)
            .bind(&input.description)
            .bind(input.day_price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a room and, through the FK cascade, all of its reservations.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, room_number: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hotel_rooms WHERE room_number = $1")
            .bind(room_number)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
