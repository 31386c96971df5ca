//! Availability query handler.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use stayhub_core::types::period::StayPeriod;

use crate::dto::request::AvailabilityQuery;
use crate::dto::response::{ApiResponse, AvailabilityResponse, GuestResponse, RoomResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/hotels/{hotel_id}/availability
pub async fn check_availability(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ApiResponse<AvailabilityResponse>>, ApiError> {
    let period = StayPeriod::new(query.check_in, query.check_out)?;

    let report = state
        .availability_service
        .check(hotel_id, &period, query.guest_id)
        .await?;

    Ok(Json(ApiResponse::ok(AvailabilityResponse {
        rooms_available: report.rooms.into_iter().map(RoomResponse::from).collect(),
        guests_available: report.guests.into_iter().map(GuestResponse::from).collect(),
        guest_conflict: report.guest_conflict,
    })))
}
