pub mod reservation;

// Re-export commonly used types
pub use reservation::{NewReservation, Reservation, ReservationRepository, StayRange};

// Re-export DomainError from shared for convenience
pub use crate::shared::types::{DomainError, DomainResult};
