//! Handlers for the `/rooms` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use hotelrooms_core::error::CoreError;
use hotelrooms_core::rooms::{validate_description, validate_room_number};
use hotelrooms_db::models::reservation::Reservation;
use hotelrooms_db::models::room::{CreateRoom, Room, RoomCreated, UpdateRoom};
use hotelrooms_db::repositories::{ReservationRepo, RoomRepo};
use hotelrooms_db::DbPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::query::RoomSortParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a room by number or fail with 404.
pub(crate) async fn find_room_or_404(pool: &DbPool, room_number: &str) -> AppResult<Room> {
    RoomRepo::find_by_room_number(pool, room_number)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Room", room_number)))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/rooms
///
/// Responds with only the new room's number.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRoom>,
) -> AppResult<(StatusCode, Json<RoomCreated>)> {
    let input = input.trimmed();
    validate_room_number(&input.room_number)?;
    validate_description(&input.description)?;
    input.validate()?;

    let room = RoomRepo::create(&state.pool, &input).await?;

    tracing::info!(
        room_number = %room.room_number,
        day_price = room.day_price,
        "Room created"
    );

    Ok((
        StatusCode::CREATED,
        Json(RoomCreated {
            room_number: room.room_number,
        }),
    ))
}

/// GET /api/v1/rooms?sort=&order=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RoomSortParams>,
) -> AppResult<Json<Vec<Room>>> {
    let rooms = RoomRepo::list(&state.pool, &params.ordering()).await?;
    Ok(Json(rooms))
}

/// GET /api/v1/rooms/{room_number}
pub async fn get_by_room_number(
    State(state): State<AppState>,
    AppPath(room_number): AppPath<String>,
) -> AppResult<Json<Room>> {
    let room = find_room_or_404(&state.pool, &room_number).await?;
    Ok(Json(room))
}

/// PUT /api/v1/rooms/{room_number}
///
/// An unknown room is a 404 even when the body is also invalid.
pub async fn update(
    State(state): State<AppState>,
    AppPath(room_number): AppPath<String>,
    AppJson(input): AppJson<UpdateRoom>,
) -> AppResult<Json<Room>> {
    find_room_or_404(&state.pool, &room_number).await?;

    let input = input.trimmed();
    validate_description(&input.description)?;
    input.validate()?;

    let room = RoomRepo::update(&state.pool, &room_number, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Room", &room_number)))?;

    tracing::info!(room_number = %room.room_number, "Room updated");
    Ok(Json(room))
}

/// DELETE /api/v1/rooms/{room_number}
///
/// Reservations of the room are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(room_number): AppPath<String>,
) -> AppResult<StatusCode> {
    let deleted = RoomRepo::delete(&state.pool, &room_number).await?;
    if deleted {
        tracing::info!(room_number = %room_number, "Room deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Room", room_number)))
    }
}

/// GET /api/v1/rooms/{room_number}/reservations
pub async fn list_reservations(
    State(state): State<AppState>,
    AppPath(room_number): AppPath<String>,
) -> AppResult<Json<Vec<Reservation>>> {
    let room = find_room_or_404(&state.pool, &room_number).await?;
    let reservations = ReservationRepo::list_by_room(&state.pool, room.id).await?;
    Ok(Json(reservations))
}
