//! Reservation business logic service
//!
//! Enforces the booking invariants around every mutating operation before
//! delegating to the store: no two reservations for the same room may hold
//! overlapping stays, and a reservation whose stay has already ended can no
//! longer be edited.
//!
//! Create and update are a check-then-act sequence (read overlaps, then
//! write) with no transaction wrapping. Two concurrent writes for the same
//! room and overlapping dates can both pass the check before either lands;
//! closing the window requires a store-level exclusion constraint or a
//! serializable transaction around check + write.

use std::sync::Arc;

use tracing::info;

use crate::domain::{NewReservation, Reservation, ReservationRepository};
use crate::shared::types::{DomainError, DomainResult};
use crate::shared::validations;

const ROOM_ALREADY_BOOKED: &str = "room already booked for given dates";
const RESERVATION_EXPIRED: &str = "reservations in the past, can not be edited";

pub struct ReservationService {
    repository: Arc<dyn ReservationRepository>,
}

impl ReservationService {
    pub fn new(repository: Arc<dyn ReservationRepository>) -> Self {
        Self { repository }
    }

    /// Create a reservation. Fails with a conflict when the room is already
    /// booked for any day of the requested stay; no write occurs on failure.
    pub async fn create(&self, request: NewReservation) -> DomainResult<Reservation> {
        self.ensure_room_is_free(&request).await?;

        let created = self.repository.insert(request).await?;
        info!(
            id = created.id,
            room = created.room_number,
            "Reservation created"
        );
        Ok(created)
    }

    /// Replace all fields of an existing reservation, preserving its id.
    ///
    /// Rejected when the id is unknown, when the *stored* stay has already
    /// ended (checked before anything else about the new dates), or when the
    /// requested stay conflicts with a booking for the room. The overlap
    /// query does not exclude the reservation's own row, so re-submitting
    /// unchanged dates conflicts with itself.
    pub async fn update(&self, id: i32, request: NewReservation) -> DomainResult<Reservation> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        if validations::is_end_in_past(existing.stay.end()) {
            return Err(DomainError::Validation(RESERVATION_EXPIRED.to_string()));
        }

        self.ensure_room_is_free(&request).await?;

        let updated = self.repository.update(request.with_id(id)).await?;
        info!(
            id = updated.id,
            room = updated.room_number,
            "Reservation updated"
        );
        Ok(updated)
    }

    /// All reservations in store-native order.
    pub async fn list(&self) -> DomainResult<Vec<Reservation>> {
        self.repository.find_all().await
    }

    /// Delete a reservation by id. Fails with not-found for an unknown id;
    /// no cascading side effects.
    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(not_found(id));
        }
        self.repository.delete_by_id(id).await?;
        info!(id, "Reservation deleted");
        Ok(())
    }

    async fn ensure_room_is_free(&self, request: &NewReservation) -> DomainResult<()> {
        let overlapping = self
            .repository
            .find_overlapping(
                request.stay.start(),
                request.stay.end(),
                request.room_number,
            )
            .await?;

        if !overlapping.is_empty() {
            return Err(DomainError::Conflict(ROOM_ALREADY_BOOKED.to_string()));
        }
        Ok(())
    }
}

fn not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "Reservation",
        field: "id",
        value: id.to_string(),
    }
}

// ── Tests ──────────────────────────────────────────────────────
