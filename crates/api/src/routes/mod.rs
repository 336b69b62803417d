pub mod health;
pub mod reservations;
pub mod rooms;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /rooms                                   list (?sort=&order=), create
/// /rooms/{room_number}                     get, update, delete
/// /rooms/{room_number}/reservations        list reservations of one room
///
/// /reservations                            list (?room_number=), create
/// /reservations/{id}                       get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/rooms", rooms::router())
        .nest("/reservations", reservations::router())
}
