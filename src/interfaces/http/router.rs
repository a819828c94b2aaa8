//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    routing::{get, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::ReservationService;
use crate::interfaces::http::modules::health::{self, HealthState};
use crate::interfaces::http::modules::reservations::{self, ReservationAppState};
use crate::interfaces::http::modules::reservations::dto::{
    ReservationRequest, ReservationResponse,
};

/// Unified state for all routes. Axum extracts the specific handler state
/// via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<ReservationService>,
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<ApiState> for ReservationAppState {
    fn from_ref(s: &ApiState) -> Self {
        ReservationAppState {
            service: Arc::clone(&s.service),
        }
    }
}

impl FromRef<ApiState> for HealthState {
    fn from_ref(s: &ApiState) -> Self {
        HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Reservations
        reservations::handlers::list_reservations,
        reservations::handlers::create_reservation,
        reservations::handlers::update_reservation,
        reservations::handlers::delete_reservation,
    ),
    components(schemas(ReservationRequest, ReservationResponse)),
    tags(
        (name = "Reservations", description = "Hotel room reservation management"),
        (name = "Health", description = "Service health"),
    ),
    info(
        title = "Hotel Reservations Service",
        description = "REST API for hotel room reservations with double-booking protection"
    )
)]
struct ApiDoc;

/// Build the REST API router.
pub fn create_api_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/reservations",
            get(reservations::handlers::list_reservations)
                .post(reservations::handlers::create_reservation),
        )
        .route(
            "/reservations/{id}",
            put(reservations::handlers::update_reservation)
                .delete(reservations::handlers::delete_reservation),
        )
        .route("/health", get(health::handlers::health_check))
        .with_state(state);

    let swagger_routes =
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
