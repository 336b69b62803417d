//! Repository for the `room_reservations` table.
//!
//! Writes lock the parent room row before checking for overlaps so two
//! concurrent bookings of the same room are serialized. The
//! `excl_room_reservations_no_overlap` exclusion constraint backs this up at
//! the schema level.

use hotelrooms_core::reservations::DateRange;
use hotelrooms_core::types::DbId;
use sqlx::{PgPool, Postgres};

use crate::models::reservation::Reservation;

/// SQLSTATE raised by PostgreSQL for exclusion constraint violations.
const EXCLUSION_VIOLATION: &str = "23P01";

/// Joined column list: reservations always carry their room number.
const COLUMNS: &str = "r.id, r.room_id, h.room_number, r.date_start, r.date_end";

/// Base `FROM` clause matching [`COLUMNS`].
const FROM_JOINED: &str = "room_reservations r JOIN hotel_rooms h ON h.id = r.room_id";

/// Failure modes of a reservation write.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// Another reservation for the same room covers part of the range.
    #[error("room is already booked for the requested dates")]
    Overlap,

    /// The room disappeared between lookup and write.
    #[error("room {0} no longer exists")]
    RoomGone(DbId),

    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for BookingError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err)
                if db_err.code().as_deref() == Some(EXCLUSION_VIOLATION) =>
            {
                BookingError::Overlap
            }
            _ => BookingError::Database(err),
        }
    }
}

/// Provides CRUD operations and overlap checks for reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Book `range` for the room, failing with [`BookingError::Overlap`] if
    /// it collides with an existing stay.
    pub async fn create(
        pool: &PgPool,
        room_id: DbId,
        range: &DateRange,
    ) -> Result<Reservation, BookingError> {
        let mut tx = pool.begin().await?;

        lock_room(&mut tx, room_id).await?;

        if Self::has_overlap(&mut *tx, room_id, range, None).await? {
            tracing::debug!(
                room_id,
                start = %range.start,
                end = %range.end,
                "Booking overlaps an existing stay"
            );
            return Err(BookingError::Overlap);
        }

        let query = format!(
            "WITH r AS (
                INSERT INTO room_reservations (room_id, date_start, date_end)
                VALUES ($1, $2, $3)
                RETURNING id, room_id, date_start, date_end
             )
             SELECT {COLUMNS} FROM r JOIN hotel_rooms h ON h.id = r.room_id"
        );
        let reservation = sqlx::query_as::<_, Reservation>(&query)
            .bind(room_id)
            .bind(range.start)
            .bind(range.end)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(reservation)
    }

    /// Find a reservation by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM_JOINED} WHERE r.id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all reservations by start date.
    pub async fn list(pool: &PgPool) -> Result<Vec<Reservation>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM {FROM_JOINED} ORDER BY r.date_start ASC, r.id ASC");
        sqlx::query_as::<_, Reservation>(&query).fetch_all(pool).await
    }

    /// List the reservations of one room by start date.
    pub async fn list_by_room(
        pool: &PgPool,
        room_id: DbId,
    ) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {FROM_JOINED}
             WHERE r.room_id = $1
             ORDER BY r.date_start ASC, r.id ASC"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(room_id)
            .fetch_all(pool)
            .await
    }

    /// Move a reservation to a new date range. The room stays the same and
    /// the reservation does not conflict with itself.
    ///
    /// Returns `Ok(None)` if no reservation with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        range: &DateRange,
    ) -> Result<Option<Reservation>, BookingError> {
        let mut tx = pool.begin().await?;

        let room_id: Option<(DbId,)> =
            sqlx::query_as("SELECT room_id FROM room_reservations WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((room_id,)) = room_id else {
            return Ok(None);
        };

        lock_room(&mut tx, room_id).await?;

        if Self::has_overlap(&mut *tx, room_id, range, Some(id)).await? {
            tracing::debug!(
                reservation_id = id,
                room_id,
                start = %range.start,
                end = %range.end,
                "Moved stay overlaps another reservation"
            );
            return Err(BookingError::Overlap);
        }

        let query = format!(
            "WITH r AS (
                UPDATE room_reservations SET
                    date_start = $2,
                    date_end = $3,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING id, room_id, date_start, date_end
             )
             SELECT {COLUMNS} FROM r JOIN hotel_rooms h ON h.id = r.room_id"
        );
        let reservation = sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(range.start)
            .bind(range.end)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(reservation)
    }

    /// Delete a reservation. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM room_reservations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether any reservation of `room_id` overlaps the half-open `range`,
    /// ignoring `exclude_id` (the reservation being edited).
    pub async fn has_overlap<'e, E>(
        executor: E,
        room_id: DbId,
        range: &DateRange,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Postgres>,
    {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM room_reservations
                WHERE room_id = $1
                  AND date_start < $3
                  AND date_end > $2
                  AND ($4::BIGINT IS NULL OR id <> $4)
             )",
        )
        .bind(room_id)
        .bind(range.start)
        .bind(range.end)
        .bind(exclude_id)
        .fetch_one(executor)
        .await?;
        Ok(exists)
    }
}

/// Take a row lock on the room for the rest of the transaction.
async fn lock_room(
    tx: &mut sqlx::Transaction<'_, Postgres>,
    room_id: DbId,
) -> Result<(), BookingError> {
    let locked: Option<(DbId,)> =
        sqlx::query_as("SELECT id FROM hotel_rooms WHERE id = $1 FOR UPDATE")
            .bind(room_id)
            .fetch_optional(&mut **tx)
            .await?;
    match locked {
        Some(_) => Ok(()),
        None => Err(BookingError::RoomGone(room_id)),
    }
}
