//! Reservation DTOs
//!
//! Wire shapes use camelCase field names, matching the public API contract.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Reservation;

/// Request to create or update a reservation
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    /// Full name of the guest
    #[validate(length(min = 1, message = "clientFullName must not be blank"))]
    pub client_full_name: String,
    /// Physical room number
    #[validate(range(min = 1, message = "roomNumber must be greater than 0"))]
    pub room_number: i32,
    /// First night of the stay
    pub start_date: NaiveDate,
    /// Checkout date
    pub end_date: NaiveDate,
}

/// Reservation details in API responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: i32,
    pub client_full_name: String,
    pub room_number: i32,
    /// The stay as `[startDate, endDate]`
    pub reservation_dates: Vec<NaiveDate>,
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            reservation_dates: r.reservation_dates().to_vec(),
            client_full_name: r.client_full_name,
            room_number: r.room_number,
        }
    }
}
