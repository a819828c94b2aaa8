//! Reservation HTTP handlers
//!
//! Thin glue over [`ReservationService`]: request-shape validation happens
//! in the `ValidatedJson` extractor, the date-range well-formedness check
//! runs here before any service call, and booking-conflict / past-stay
//! enforcement lives in the service.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::ReservationService;
use crate::domain::{DomainError, NewReservation, StayRange};
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};
use crate::shared::validations;

use super::dto::*;

const INVALID_DATE_RANGE: &str = "Invalid date range";

/// Application state for reservation handlers.
#[derive(Clone)]
pub struct ReservationAppState {
    pub service: Arc<ReservationService>,
}

type HandlerError<T> = (StatusCode, Json<ApiResponse<T>>);

fn error_response<T>(err: DomainError) -> HandlerError<T> {
    let status = match &err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) | DomainError::Conflict(_) => StatusCode::BAD_REQUEST,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::error(err.to_string())))
}

/// Date-range pre-check plus conversion to the domain shape. Must run
/// before any persistence work; a failure is a client-input error.
fn to_new_reservation<T>(request: ReservationRequest) -> Result<NewReservation, HandlerError<T>> {
    if !validations::is_valid_range(request.start_date, request.end_date) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(INVALID_DATE_RANGE)),
        ));
    }
    let stay =
        StayRange::new(request.start_date, request.end_date).map_err(error_response)?;
    Ok(NewReservation::new(
        request.client_full_name,
        request.room_number,
        stay,
    ))
}

#[utoipa::path(
    get,
    path = "/reservations",
    tag = "Reservations",
    responses(
        (status = 200, description = "All reservations", body = ApiResponse<Vec<ReservationResponse>>)
    )
)]
pub async fn list_reservations(
    State(state): State<ReservationAppState>,
) -> Result<Json<ApiResponse<Vec<ReservationResponse>>>, HandlerError<Vec<ReservationResponse>>> {
    let reservations = state.service.list().await.map_err(error_response)?;

    let dtos: Vec<ReservationResponse> = reservations
        .into_iter()
        .map(ReservationResponse::from)
        .collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    post,
    path = "/reservations",
    tag = "Reservations",
    request_body = ReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ApiResponse<ReservationResponse>),
        (status = 400, description = "Invalid date range or room already booked"),
        (status = 422, description = "Malformed request body")
    )
)]
pub async fn create_reservation(
    State(state): State<ReservationAppState>,
    ValidatedJson(request): ValidatedJson<ReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationResponse>>), HandlerError<ReservationResponse>>
{
    let new_reservation = to_new_reservation(request)?;
    let created = state
        .service
        .create(new_reservation)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ReservationResponse::from(created))),
    ))
}

#[utoipa::path(
    put,
    path = "/reservations/{id}",
    tag = "Reservations",
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = ReservationRequest,
    responses(
        (status = 202, description = "Reservation updated", body = ApiResponse<ReservationResponse>),
        (status = 400, description = "Invalid date range, conflicting booking, or elapsed stay"),
        (status = 404, description = "Reservation not found"),
        (status = 422, description = "Malformed request body")
    )
)]
pub async fn update_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<ReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationResponse>>), HandlerError<ReservationResponse>>
{
    let new_reservation = to_new_reservation(request)?;
    let updated = state
        .service
        .update(id, new_reservation)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ApiResponse::success(ReservationResponse::from(updated))),
    ))
}

#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tag = "Reservations",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn delete_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, HandlerError<()>> {
    state.service.delete(id).await.map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
