//! Route definitions for the StayHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, post, put},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use stayhub_core::config::app::CorsConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(hotel_routes())
        .merge(guest_routes())
        .merge(room_routes())
        .merge(reservation_routes())
        .merge(availability_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Hotel account endpoints.
fn hotel_routes() -> Router<AppState> {
    Router::new()
        .route("/hotels", post(handlers::hotel::register_hotel))
        .route("/hotels/{hotel_id}", get(handlers::hotel::get_hotel))
}

/// Guest registry endpoints.
fn guest_routes() -> Router<AppState> {
    Router::new()
        .route("/hotels/{hotel_id}/guests", get(handlers::guest::list_guests))
        .route("/hotels/{hotel_id}/guests", post(handlers::guest::create_guest))
        .route(
            "/hotels/{hotel_id}/guests/{guest_id}",
            get(handlers::guest::get_guest),
        )
        .route(
            "/hotels/{hotel_id}/guests/{guest_id}",
            put(handlers::guest::update_guest),
        )
        .route(
            "/hotels/{hotel_id}/guests/{guest_id}",
            delete(handlers::guest::delete_guest),
        )
}

/// Room registry endpoints.
fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/hotels/{hotel_id}/rooms", get(handlers::room::list_rooms))
        .route("/hotels/{hotel_id}/rooms", post(handlers::room::create_room))
        .route(
            "/hotels/{hotel_id}/rooms/{room_id}",
            get(handlers::room::get_room),
        )
        .route(
            "/hotels/{hotel_id}/rooms/{room_id}",
            put(handlers::room::update_room),
        )
        .route(
            "/hotels/{hotel_id}/rooms/{room_id}",
            delete(handlers::room::deactivate_room),
        )
        .route(
            "/hotels/{hotel_id}/rooms/{room_id}/status",
            put(handlers::room::set_room_status),
        )
}

/// Reservation lifecycle endpoints.
fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/hotels/{hotel_id}/reservations",
            get(handlers::reservation::list_reservations),
        )
        .route(
            "/hotels/{hotel_id}/reservations",
            post(handlers::reservation::create_reservation),
        )
        .route(
            "/hotels/{hotel_id}/reservations/{reservation_id}",
            get(handlers::reservation::get_reservation),
        )
        .route(
            "/hotels/{hotel_id}/reservations/{reservation_id}/check-in",
            post(handlers::reservation::check_in),
        )
        .route(
            "/hotels/{hotel_id}/reservations/{reservation_id}/check-out",
            post(handlers::reservation::check_out),
        )
        .route(
            "/hotels/{hotel_id}/reservations/{reservation_id}/cancel",
            post(handlers::reservation::cancel),
        )
        .route(
            "/hotels/{hotel_id}/reservations/{reservation_id}/advance",
            post(handlers::reservation::advance),
        )
        .route(
            "/hotels/{hotel_id}/reservations/{reservation_id}/price",
            get(handlers::reservation::price),
        )
}

/// Availability endpoint.
fn availability_routes() -> Router<AppState> {
    Router::new().route(
        "/hotels/{hotel_id}/availability",
        get(handlers::availability::check_availability),
    )
}

/// Health endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build the CORS layer from configuration. An empty origin list allows
/// any origin (development default).
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
