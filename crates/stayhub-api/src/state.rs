//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use stayhub_core::config::AppConfig;
use stayhub_service::availability::AvailabilityService;
use stayhub_service::guest::GuestService;
use stayhub_service::hotel::HotelService;
use stayhub_service::reservation::ReservationService;
use stayhub_service::room::RoomService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (health checks).
    pub db_pool: PgPool,
    /// Hotel account service.
    pub hotel_service: Arc<HotelService>,
    /// Guest registry service.
    pub guest_service: Arc<GuestService>,
    /// Room registry service.
    pub room_service: Arc<RoomService>,
    /// Reservation lifecycle service.
    pub reservation_service: Arc<ReservationService>,
    /// Availability engine.
    pub availability_service: Arc<AvailabilityService>,
}
