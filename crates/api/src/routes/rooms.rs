//! Route definitions for the `/rooms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::rooms;
use crate::state::AppState;

/// Routes mounted at `/rooms`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{room_number}                 -> get_by_room_number
/// PUT    /{room_number}                 -> update
/// DELETE /{room_number}                 -> delete
/// GET    /{room_number}/reservations    -> list_reservations
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rooms::list).post(rooms::create))
        .route(
            "/{room_number}",
            get(rooms::get_by_room_number)
                .put(rooms::update)
                .delete(rooms::delete),
        )
        .route("/{room_number}/reservations", get(rooms::list_reservations))
}
