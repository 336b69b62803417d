//! Reservation date rules.
//!
//! A reservation occupies the half-open interval `[date_start, date_end)`:
//! the guest checks out on `date_end`, so another stay may begin that day.

use crate::error::CoreError;
use crate::types::Date;

/// Message returned when `date_end` does not come after `date_start`.
pub const MSG_END_BEFORE_START: &str = "date_end must be later than date_start";

/// Message returned when a reservation starts before today.
pub const MSG_PAST_DATES: &str = "cannot book dates in the past";

/// Message returned when the room is already booked for part of the range.
pub const MSG_ALREADY_BOOKED: &str = "room is already booked for the requested dates";

/// A half-open `[start, end)` range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    /// Build a range, rejecting empty or inverted bounds.
    pub fn new(start: Date, end: Date) -> Result<Self, CoreError> {
        validate_date_range(start, end)?;
        Ok(Self { start, end })
    }

    /// Number of nights covered by the stay.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        ranges_overlap(self, other)
    }
}

/// `true` when the two half-open ranges share at least one night.
pub fn ranges_overlap(a: &DateRange, b: &DateRange) -> bool {
    a.start < b.end && b.start < a.end
}

/// Require `end > start`. Same-day ranges are rejected.
pub fn validate_date_range(start: Date, end: Date) -> Result<(), CoreError> {
    if end <= start {
        return Err(CoreError::Validation(MSG_END_BEFORE_START.to_string()));
    }
    Ok(())
}

/// Require the stay to begin today or later.
pub fn validate_not_in_past(start: Date, today: Date) -> Result<(), CoreError> {
    if start < today {
        return Err(CoreError::Validation(MSG_PAST_DATES.to_string()));
    }
    Ok(())
}

/// Run every date check for a new or edited reservation, range first.
pub fn validate_reservation_dates(
    start: Date,
    end: Date,
    today: Date,
) -> Result<DateRange, CoreError> {
    let range = DateRange::new(start, end)?;
    validate_not_in_past(start, today)?;
    Ok(range)
}

/// Current calendar date in UTC.
pub fn today() -> Date {
    chrono::Utc::now().date_naive()
}
