//! Reservation domain entity

use chrono::NaiveDate;

use crate::shared::types::{DomainError, DomainResult};

/// The period a reservation occupies a room.
///
/// Constructed only through [`StayRange::new`], so `start < end` holds for
/// every value of this type. The persisted form is the same explicit pair,
/// which removes any need to derive bounds from an unordered date set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl StayRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> DomainResult<Self> {
        if end <= start {
            return Err(DomainError::Validation(
                "stay end date must be after start date".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Half-open interval overlap test: two stays conflict when
    /// `a.end > b.start && a.start < b.end`. Touching endpoints — one stay
    /// ending exactly when another begins — do not count as overlapping.
    ///
    /// This predicate is the single source of truth for "do two date ranges
    /// conflict"; the store's overlap query applies the same comparison.
    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.end > other.start && self.start < other.end
    }
}

/// Persisted reservation. The id is assigned by the store on insert and
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: i32,
    pub client_full_name: String,
    pub room_number: i32,
    pub stay: StayRange,
}

impl Reservation {
    /// The `[start, end]` two-date form used by the external response shape.
    pub fn reservation_dates(&self) -> [NaiveDate; 2] {
        [self.stay.start(), self.stay.end()]
    }
}

/// A reservation that has not been persisted yet (no id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub client_full_name: String,
    pub room_number: i32,
    pub stay: StayRange,
}

impl NewReservation {
    pub fn new(
        client_full_name: impl Into<String>,
        room_number: i32,
        stay: StayRange,
    ) -> Self {
        Self {
            client_full_name: client_full_name.into(),
            room_number,
            stay,
        }
    }

    /// Attach the store-assigned id.
    pub fn with_id(self, id: i32) -> Reservation {
        Reservation {
            id,
            client_full_name: self.client_full_name,
            room_number: self.room_number,
            stay: self.stay,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, d).unwrap()
    }

    fn range(start: u32, end: u32) -> StayRange {
        StayRange::new(date(start), date(end)).unwrap()
    }

    #[test]
    fn rejects_end_before_start() {
        assert!(StayRange::new(date(10), date(5)).is_err());
    }

    #[test]
    fn rejects_zero_length_stay() {
        assert!(StayRange::new(date(10), date(10)).is_err());
    }

    #[test]
    fn back_to_back_stays_do_not_overlap() {
        // existing ends exactly when the candidate begins
        assert!(!range(1, 5).overlaps(&range(5, 9)));
        assert!(!range(5, 9).overlaps(&range(1, 5)));
    }

    #[test]
    fn contained_range_overlaps() {
        assert!(range(12, 13).overlaps(&range(10, 15)));
        assert!(range(10, 15).overlaps(&range(12, 13)));
    }

    #[test]
    fn partial_overlap_at_either_end() {
        assert!(range(5, 11).overlaps(&range(10, 15)));
        assert!(range(14, 20).overlaps(&range(10, 15)));
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        assert!(!range(20, 25).overlaps(&range(10, 15)));
    }

    #[test]
    fn identical_ranges_overlap() {
        assert!(range(10, 15).overlaps(&range(10, 15)));
    }

    #[test]
    fn reservation_dates_is_start_then_end() {
        let r = NewReservation::new("John Doe", 101, range(10, 15)).with_id(7);
        assert_eq!(r.id, 7);
        assert_eq!(r.reservation_dates(), [date(10), date(15)]);
    }
}
