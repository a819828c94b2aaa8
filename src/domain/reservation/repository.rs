//! Reservation repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{NewReservation, Reservation};
use crate::shared::types::DomainResult;

/// Store contract for reservations. The only boundary the consistency
/// engine depends on.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert a new reservation; the store assigns the id.
    async fn insert(&self, reservation: NewReservation) -> DomainResult<Reservation>;

    /// Full-field update of an existing reservation, id preserved.
    async fn update(&self, reservation: Reservation) -> DomainResult<Reservation>;

    /// All reservations in store-native order.
    async fn find_all(&self) -> DomainResult<Vec<Reservation>>;

    /// Find reservation by id.
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>>;

    /// Whether a reservation with the given id exists.
    async fn exists_by_id(&self, id: i32) -> DomainResult<bool>;

    /// Remove a reservation. Deletion is immediate and final.
    async fn delete_by_id(&self, id: i32) -> DomainResult<()>;

    /// All reservations for `room_number` whose stay satisfies
    /// `stay_end > start && stay_start < end`. Empty when no conflict
    /// exists; zero matches is not an error.
    async fn find_overlapping(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        room_number: i32,
    ) -> DomainResult<Vec<Reservation>>;
}
