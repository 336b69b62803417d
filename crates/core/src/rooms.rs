//! Room catalog rules: room number and description format, list ordering.

use crate::error::CoreError;

/// Maximum length of a room number, in characters.
pub const ROOM_NUMBER_MAX_LEN: usize = 10;

/// Validate a room number: non-blank and at most [`ROOM_NUMBER_MAX_LEN`] chars.
pub fn validate_room_number(room_number: &str) -> Result<(), CoreError> {
    if room_number.trim().is_empty() {
        return Err(CoreError::Validation(
            "room_number must not be empty".to_string(),
        ));
    }
    let len = room_number.chars().count();
    if len > ROOM_NUMBER_MAX_LEN {
        return Err(CoreError::Validation(format!(
            "room_number must be at most {ROOM_NUMBER_MAX_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

/// A room description is required and must contain more than whitespace.
/// The length limit is declared on the DTOs.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation(
            "description must not be empty".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Column a room listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomSortField {
    DayPrice,
    DateCreate,
}

impl RoomSortField {
    /// Parse the `sort` query value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "day_price" => Some(Self::DayPrice),
            "date_create" => Some(Self::DateCreate),
            _ => None,
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::DayPrice => "day_price",
            Self::DateCreate => "date_create",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Only `desc` selects descending order; anything else is ascending.
    pub fn parse(value: &str) -> Self {
        if value == "desc" {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Resolved ordering for a room listing.
///
/// With no sort field the catalog is returned in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoomOrdering {
    pub field: Option<RoomSortField>,
    pub direction: SortDirection,
}

impl RoomOrdering {
    /// Build an ordering from raw `?sort=&order=` query values.
    pub fn from_params(sort: Option<&str>, order: Option<&str>) -> Self {
        Self {
            field: sort.and_then(RoomSortField::parse),
            direction: order.map(SortDirection::parse).unwrap_or_default(),
        }
    }

    /// SQL `ORDER BY` body. Built only from fixed column names, never from
    /// request text. Ties fall back to id so paging through equal prices is
    /// stable.
    pub fn order_by_clause(&self) -> String {
        match self.field {
            Some(field) => format!("{} {}, id ASC", field.column(), self.direction.keyword()),
            None => "id ASC".to_string(),
        }
    }
}
