//! Reservation lifecycle handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use stayhub_core::types::pagination::PageRequest;
use stayhub_database::repositories::reservation::ReservationFilter;
use stayhub_entity::reservation::CreateReservation;
use stayhub_service::reservation::AdvanceStep;

use crate::dto::request::{CreateReservationRequest, ReservationListQuery};
use crate::dto::response::{
    AdvanceResponse, ApiResponse, CheckInResponse, PaginatedResponse, PriceResponse,
    ReservationResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/hotels/{hotel_id}/reservations
pub async fn list_reservations(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
    Query(query): Query<ReservationListQuery>,
) -> Result<Json<ApiResponse<PaginatedResponse<ReservationResponse>>>, ApiError> {
    let page = PageRequest::new(query.page.unwrap_or(1), query.per_page.unwrap_or(25));
    let filter = ReservationFilter {
        room_id: query.room_id,
        status: query.status,
        check_in_before: query.check_in_before,
        check_in_after: query.check_in_after,
        check_out_before: query.check_out_before,
        check_out_after: query.check_out_after,
    };

    let reservations = state
        .reservation_service
        .list(hotel_id, &filter, &page)
        .await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(
        reservations,
        ReservationResponse::from,
    ))))
}

/// POST /api/hotels/{hotel_id}/reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<Json<ApiResponse<ReservationResponse>>, ApiError> {
    let reservation = state
        .reservation_service
        .create(
            hotel_id,
            &CreateReservation {
                guest_id: req.guest_id,
                room_id: req.room_id,
                check_in: req.check_in,
                check_out: req.check_out,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(reservation.into())))
}

/// GET /api/hotels/{hotel_id}/reservations/{reservation_id}
pub async fn get_reservation(
    State(state): State<AppState>,
    Path((hotel_id, reservation_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<ReservationResponse>>, ApiError> {
    let reservation = state
        .reservation_service
        .get(hotel_id, reservation_id)
        .await?;
    Ok(Json(ApiResponse::ok(reservation.into())))
}

/// POST /api/hotels/{hotel_id}/reservations/{reservation_id}/check-in
pub async fn check_in(
    State(state): State<AppState>,
    Path((hotel_id, reservation_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<CheckInResponse>>, ApiError> {
    let outcome = state
        .reservation_service
        .check_in(hotel_id, reservation_id)
        .await?;

    Ok(Json(ApiResponse::ok(CheckInResponse {
        reservation: outcome.reservation.into(),
        checkout_adjusted: outcome.checkout_adjusted,
    })))
}

/// POST /api/hotels/{hotel_id}/reservations/{reservation_id}/check-out
pub async fn check_out(
    State(state): State<AppState>,
    Path((hotel_id, reservation_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<ReservationResponse>>, ApiError> {
    let reservation = state
        .reservation_service
        .check_out(hotel_id, reservation_id)
        .await?;
    Ok(Json(ApiResponse::ok(reservation.into())))
}

/// POST /api/hotels/{hotel_id}/reservations/{reservation_id}/cancel
pub async fn cancel(
    State(state): State<AppState>,
    Path((hotel_id, reservation_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<ReservationResponse>>, ApiError> {
    let reservation = state
        .reservation_service
        .cancel(hotel_id, reservation_id)
        .await?;
    Ok(Json(ApiResponse::ok(reservation.into())))
}

/// POST /api/hotels/{hotel_id}/reservations/{reservation_id}/advance
///
/// Applies the single forward transition implied by the current
/// reservation/room status pair.
pub async fn advance(
    State(state): State<AppState>,
    Path((hotel_id, reservation_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<AdvanceResponse>>, ApiError> {
    let (reservation, step) = state
        .reservation_service
        .advance(hotel_id, reservation_id)
        .await?;

    let (step_name, checkout_adjusted) = match step {
        AdvanceStep::CheckedIn { checkout_adjusted } => ("checked_in", checkout_adjusted),
        AdvanceStep::CheckedOut => ("checked_out", false),
    };

    Ok(Json(ApiResponse::ok(AdvanceResponse {
        reservation: reservation.into(),
        step: step_name.to_string(),
        checkout_adjusted,
    })))
}

/// GET /api/hotels/{hotel_id}/reservations/{reservation_id}/price
pub async fn price(
    State(state): State<AppState>,
    Path((hotel_id, reservation_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<PriceResponse>>, ApiError> {
    let quote = state
        .reservation_service
        .quote(hotel_id, reservation_id)
        .await?;

    Ok(Json(ApiResponse::ok(PriceResponse {
        nights: quote.nights,
        total: quote.total,
    })))
}
