//! Room registry operations — creation with capacity derivation, updates,
//! and manual status changes.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_database::repositories::{ReservationRepository, RoomRepository};
use stayhub_entity::room::{CreateRoom, Room, RoomStatus, UpdateRoom};

/// Handles room registration and maintenance.
#[derive(Debug, Clone)]
pub struct RoomService {
    /// Room repository.
    rooms: Arc<RoomRepository>,
    /// Reservation repository, for the occupancy-consistency guard.
    reservations: Arc<ReservationRepository>,
}

impl RoomService {
    /// Creates a new room service.
    pub fn new(rooms: Arc<RoomRepository>, reservations: Arc<ReservationRepository>) -> Self {
        Self {
            rooms,
            reservations,
        }
    }

    /// Create a room.
    ///
    /// Non-custom kinds derive their capacity pair from the kind table;
    /// custom rooms require both capacities from the caller. The total is
    /// always the sum.
    pub async fn create(&self, hotel_id: Uuid, data: &CreateRoom) -> AppResult<Room> {
        let capacity = match data.kind.fixed_capacity() {
            Some(pair) => pair,
            None => match (data.capacity_adults, data.capacity_children) {
                (Some(adults), Some(children)) if adults >= 1 && children >= 0 => {
                    (adults, children)
                }
                _ => {
                    return Err(AppError::validation(
                        "Custom rooms require adult and child capacities",
                    ));
                }
            },
        };

        if data.price.is_sign_negative() {
            return Err(AppError::validation("Nightly price cannot be negative"));
        }

        let room = self.rooms.create(hotel_id, data, capacity).await?;
        info!(room_id = %room.id, room_number = %room.room_number, "Room created");
        Ok(room)
    }

    /// Fetch a room.
    pub async fn get(&self, hotel_id: Uuid, id: Uuid) -> AppResult<Room> {
        self.rooms
            .find_by_id(hotel_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {id} not found")))
    }

    /// List rooms with an optional status filter.
    pub async fn list(
        &self,
        hotel_id: Uuid,
        status: Option<RoomStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Room>> {
        self.rooms.list(hotel_id, status, page).await
    }

    /// Update a room's number, price, or comments.
    pub async fn update(&self, hotel_id: Uuid, id: Uuid, data: &UpdateRoom) -> AppResult<Room> {
        if let Some(price) = data.price {
            if price.is_sign_negative() {
                return Err(AppError::validation("Nightly price cannot be negative"));
            }
        }
        self.rooms.update(hotel_id, id, data).await
    }

    /// Manually change a room's status (maintenance toggles).
    ///
    /// `occupied` is driven by the reservation lifecycle and cannot be set
    /// by hand, and a room with a checked-in reservation cannot be moved
    /// out of `occupied` here — that would desynchronize the two rows.
    pub async fn set_status(
        &self,
        hotel_id: Uuid,
        id: Uuid,
        status: RoomStatus,
    ) -> AppResult<Room> {
        if status == RoomStatus::Occupied {
            return Err(AppError::validation(
                "Room occupancy is driven by reservations and cannot be set manually",
            ));
        }

        let room = self.get(hotel_id, id).await?;
        if room.status == RoomStatus::Occupied
            && self.reservations.room_has_checked_in(room.id).await?
        {
            return Err(AppError::cannot_modify(
                "The room has a checked-in reservation",
            ));
        }

        let updated = self.rooms.update_status(hotel_id, id, status).await?;
        info!(room_id = %id, status = %status, "Room status changed");
        Ok(updated)
    }

    /// Deactivate a room, hiding it from availability and new bookings.
    pub async fn deactivate(&self, hotel_id: Uuid, id: Uuid) -> AppResult<()> {
        if !self.rooms.deactivate(hotel_id, id).await? {
            return Err(AppError::not_found(format!("Room {id} not found")));
        }
        info!(room_id = %id, "Room deactivated");
        Ok(())
    }
}
