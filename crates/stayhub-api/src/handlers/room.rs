//! Room registry handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use stayhub_core::types::pagination::PageRequest;
use stayhub_entity::room::{CreateRoom, UpdateRoom};

use crate::dto::request::{
    CreateRoomRequest, RoomListQuery, SetRoomStatusRequest, UpdateRoomRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse, PaginatedResponse, RoomResponse};
use crate::error::ApiError;
use crate::handlers::validate;
use crate::state::AppState;

/// GET /api/hotels/{hotel_id}/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
    Query(query): Query<RoomListQuery>,
) -> Result<Json<ApiResponse<PaginatedResponse<RoomResponse>>>, ApiError> {
    let page = PageRequest::new(query.page.unwrap_or(1), query.per_page.unwrap_or(25));
    let rooms = state.room_service.list(hotel_id, query.status, &page).await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(
        rooms,
        RoomResponse::from,
    ))))
}

/// POST /api/hotels/{hotel_id}/rooms
pub async fn create_room(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
    Json(req): Json<CreateRoomRequest>,
) -> Result<Json<ApiResponse<RoomResponse>>, ApiError> {
    validate(&req)?;

    let room = state
        .room_service
        .create(
            hotel_id,
            &CreateRoom {
                room_number: req.room_number,
                kind: req.kind,
                capacity_adults: req.capacity_adults,
                capacity_children: req.capacity_children,
                price: req.price,
                comments: req.comments,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(room.into())))
}

/// GET /api/hotels/{hotel_id}/rooms/{room_id}
pub async fn get_room(
    State(state): State<AppState>,
    Path((hotel_id, room_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<RoomResponse>>, ApiError> {
    let room = state.room_service.get(hotel_id, room_id).await?;
    Ok(Json(ApiResponse::ok(room.into())))
}

/// PUT /api/hotels/{hotel_id}/rooms/{room_id}
pub async fn update_room(
    State(state): State<AppState>,
    Path((hotel_id, room_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateRoomRequest>,
) -> Result<Json<ApiResponse<RoomResponse>>, ApiError> {
    validate(&req)?;

    let room = state
        .room_service
        .update(
            hotel_id,
            room_id,
            &UpdateRoom {
                room_number: req.room_number,
                price: req.price,
                comments: req.comments,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(room.into())))
}

/// PUT /api/hotels/{hotel_id}/rooms/{room_id}/status
pub async fn set_room_status(
    State(state): State<AppState>,
    Path((hotel_id, room_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<SetRoomStatusRequest>,
) -> Result<Json<ApiResponse<RoomResponse>>, ApiError> {
    let room = state
        .room_service
        .set_status(hotel_id, room_id, req.status)
        .await?;

    Ok(Json(ApiResponse::ok(room.into())))
}

/// DELETE /api/hotels/{hotel_id}/rooms/{room_id}
pub async fn deactivate_room(
    State(state): State<AppState>,
    Path((hotel_id, room_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.room_service.deactivate(hotel_id, room_id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Room deactivated".to_string(),
    })))
}
