//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the query result
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for full replacement via PUT

pub mod reservation;
pub mod room;
