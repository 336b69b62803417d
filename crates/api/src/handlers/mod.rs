pub mod reservations;
pub mod rooms;
