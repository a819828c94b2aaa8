//! Date range validation
//!
//! Pure checks applied to inbound create/update requests before any
//! persistence work. "Today" is the local calendar date; a stay that
//! starts today is not in the past.

use chrono::{Local, NaiveDate};

/// A proposed stay is well-formed when it does not start in the past
/// and ends strictly after it starts.
pub fn is_valid_range(start: NaiveDate, end: NaiveDate) -> bool {
    is_start_not_in_past(start) && is_end_after_start(start, end)
}

/// Whether a stored reservation's stay has already completed.
pub fn is_end_in_past(end: NaiveDate) -> bool {
    end < today()
}

fn is_start_not_in_past(start: NaiveDate) -> bool {
    start >= today()
}

fn is_end_after_start(start: NaiveDate, end: NaiveDate) -> bool {
    end > start
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ── Tests ──────────────────────────────────────────────────────
