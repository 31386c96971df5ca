//! Guest registry handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use stayhub_core::types::pagination::PageRequest;
use stayhub_entity::guest::{CreateGuest, UpdateGuest};

use crate::dto::request::{CreateGuestRequest, DeleteGuestQuery, GuestListQuery, UpdateGuestRequest};
use crate::dto::response::{ApiResponse, GuestResponse, MessageResponse, PaginatedResponse};
use crate::error::ApiError;
use crate::handlers::validate;
use crate::state::AppState;

/// GET /api/hotels/{hotel_id}/guests
pub async fn list_guests(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
    Query(query): Query<GuestListQuery>,
) -> Result<Json<ApiResponse<PaginatedResponse<GuestResponse>>>, ApiError> {
    let page = PageRequest::new(query.page.unwrap_or(1), query.per_page.unwrap_or(25));
    let guests = state
        .guest_service
        .list(
            hotel_id,
            query.name.as_deref(),
            query.tax_id.as_deref(),
            &page,
        )
        .await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(
        guests,
        GuestResponse::from,
    ))))
}

/// POST /api/hotels/{hotel_id}/guests
pub async fn create_guest(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
    Json(req): Json<CreateGuestRequest>,
) -> Result<Json<ApiResponse<GuestResponse>>, ApiError> {
    validate(&req)?;

    let guest = state
        .guest_service
        .register(
            hotel_id,
            &CreateGuest {
                name: req.name,
                email: req.email,
                phone: req.phone,
                tax_id: req.tax_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(guest.into())))
}

/// GET /api/hotels/{hotel_id}/guests/{guest_id}
pub async fn get_guest(
    State(state): State<AppState>,
    Path((hotel_id, guest_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<GuestResponse>>, ApiError> {
    let guest = state.guest_service.get(hotel_id, guest_id).await?;
    Ok(Json(ApiResponse::ok(guest.into())))
}

/// PUT /api/hotels/{hotel_id}/guests/{guest_id}
pub async fn update_guest(
    State(state): State<AppState>,
    Path((hotel_id, guest_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateGuestRequest>,
) -> Result<Json<ApiResponse<GuestResponse>>, ApiError> {
    validate(&req)?;

    let guest = state
        .guest_service
        .update(
            hotel_id,
            guest_id,
            &UpdateGuest {
                name: req.name,
                email: req.email,
                phone: req.phone,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(guest.into())))
}

/// DELETE /api/hotels/{hotel_id}/guests/{guest_id}
///
/// Soft-deletes by default; `?purge=true` attempts a physical delete,
/// which is refused while the guest has a future check-out.
pub async fn delete_guest(
    State(state): State<AppState>,
    Path((hotel_id, guest_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<DeleteGuestQuery>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let message = if query.purge {
        state.guest_service.purge(hotel_id, guest_id).await?;
        "Guest deleted"
    } else {
        state.guest_service.soft_delete(hotel_id, guest_id).await?;
        "Guest deactivated"
    };

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: message.to_string(),
    })))
}
