//! Handlers for the `/reservations` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use hotelrooms_core::error::CoreError;
use hotelrooms_core::reservations::{today, validate_reservation_dates};
use hotelrooms_core::types::DbId;
use hotelrooms_db::models::reservation::{
    CreateReservation, Reservation, ReservationCreated, UpdateReservation,
};
use hotelrooms_db::repositories::{BookingError, ReservationRepo};
use hotelrooms_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::rooms::find_room_or_404;
use crate::query::ReservationFilterParams;
use crate::state::AppState;

async fn find_reservation_or_404(pool: &DbPool, id: DbId) -> AppResult<Reservation> {
    ReservationRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Reservation", id)))
}

/// GET /api/v1/reservations?room_number=
///
/// Ordered by start date. An unknown `room_number` is a 404, not an empty list.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ReservationFilterParams>,
) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = match params.room_number.as_deref().filter(|n| !n.is_empty()) {
        Some(room_number) => {
            let room = find_room_or_404(&state.pool, room_number).await?;
            ReservationRepo::list_by_room(&state.pool, room.id).await?
        }
        None => ReservationRepo::list(&state.pool).await?,
    };
    Ok(Json(reservations))
}

/// POST /api/v1/reservations
///
/// Date rules are checked before the room lookup, the overlap check runs last.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateReservation>,
) -> AppResult<(StatusCode, Json<ReservationCreated>)> {
    let input = input.trimmed();
    let range = validate_reservation_dates(input.date_start, input.date_end, today())?;
    let room = find_room_or_404(&state.pool, &input.room_number).await?;

    let reservation = ReservationRepo::create(&state.pool, room.id, &range)
        .await
        .map_err(|e| match e {
            BookingError::RoomGone(_) => {
                AppError::Core(CoreError::not_found("Room", &input.room_number))
            }
            other => AppError::from(other),
        })?;

    tracing::info!(
        reservation_id = reservation.id,
        room_number = %reservation.room_number,
        date_start = %reservation.date_start,
        date_end = %reservation.date_end,
        "Reservation created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ReservationCreated { id: reservation.id }),
    ))
}

/// GET /api/v1/reservations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Reservation>> {
    let reservation = find_reservation_or_404(&state.pool, id).await?;
    Ok(Json(reservation))
}

/// PUT /api/v1/reservations/{id}
///
/// Moves the stay to new dates. The room cannot be changed. An unknown id is
/// a 404 even when the dates are also invalid.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateReservation>,
) -> AppResult<Json<Reservation>> {
    let existing = find_reservation_or_404(&state.pool, id).await?;
    let range = validate_reservation_dates(input.date_start, input.date_end, today())?;

    let reservation = ReservationRepo::update(&state.pool, id, &range)
        .await
        .map_err(|e| match e {
            BookingError::RoomGone(_) => {
                AppError::Core(CoreError::not_found("Room", &existing.room_number))
            }
            other => AppError::from(other),
        })?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Reservation", id)))?;

    tracing::info!(
        reservation_id = reservation.id,
        date_start = %reservation.date_start,
        date_end = %reservation.date_end,
        "Reservation updated"
    );
    Ok(Json(reservation))
}

/// DELETE /api/v1/reservations/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ReservationRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(reservation_id = id, "Reservation deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Reservation", id)))
    }
}
