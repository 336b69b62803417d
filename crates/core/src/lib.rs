//! Domain rules for the hotel rooms service.
//!
//! This crate has zero internal deps so both the repository layer and the
//! HTTP layer can share the same validation and ordering logic.

pub mod error;
pub mod reservations;
pub mod rooms;
pub mod types;
