//! Hotel account handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use stayhub_entity::hotel::RegisterHotel;

use crate::dto::request::RegisterHotelRequest;
use crate::dto::response::{ApiResponse, HotelResponse};
use crate::error::ApiError;
use crate::handlers::validate;
use crate::state::AppState;

/// POST /api/hotels
pub async fn register_hotel(
    State(state): State<AppState>,
    Json(req): Json<RegisterHotelRequest>,
) -> Result<Json<ApiResponse<HotelResponse>>, ApiError> {
    validate(&req)?;

    let hotel = state
        .hotel_service
        .register(&RegisterHotel {
            name: req.name,
            tax_id: req.tax_id,
            email: req.email,
            phone: req.phone,
            address: req.address,
            city: req.city,
            state: req.state,
            zip_code: req.zip_code,
        })
        .await?;

    Ok(Json(ApiResponse::ok(hotel.into())))
}

/// GET /api/hotels/{hotel_id}
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
) -> Result<Json<ApiResponse<HotelResponse>>, ApiError> {
    let hotel = state.hotel_service.get(hotel_id).await?;
    Ok(Json(ApiResponse::ok(hotel.into())))
}
