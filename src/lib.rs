//! # Hotel Reservations Service
//!
//! REST service for hotel room reservations. A room can never be
//! double-booked for overlapping date ranges, and a reservation whose stay
//! has ended can no longer be edited.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Reservation entity, stay range, and repository trait
//! - **application**: The reservation consistency service
//! - **infrastructure**: SeaORM persistence (entities, migrations, repository)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Domain errors and date-range validation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmReservationRepository};

// Re-export API router
pub use interfaces::http::{create_api_router, ApiState};

// Re-export the service
pub use application::ReservationService;
