//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod reservation_repo;
pub mod room_repo;

pub use reservation_repo::{BookingError, ReservationRepo};
pub use room_repo::RoomRepo;
