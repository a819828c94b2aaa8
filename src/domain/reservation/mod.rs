//! Reservation aggregate
//!
//! Contains the Reservation entity, the stay range type, and the
//! repository interface.

pub mod model;
pub mod repository;

pub use model::{NewReservation, Reservation, StayRange};
pub use repository::ReservationRepository;
