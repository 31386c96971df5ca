//! Guest registry operations — registration with revival, updates, and
//! soft/hard deletion.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_database::repositories::{GuestRepository, ReservationRepository};
use stayhub_entity::guest::{CreateGuest, Guest, UpdateGuest};

/// Handles guest registration and maintenance.
#[derive(Debug, Clone)]
pub struct GuestService {
    /// Guest repository.
    guests: Arc<GuestRepository>,
    /// Reservation repository, for the deletion guard.
    reservations: Arc<ReservationRepository>,
}

impl GuestService {
    /// Creates a new guest service.
    pub fn new(guests: Arc<GuestRepository>, reservations: Arc<ReservationRepository>) -> Self {
        Self {
            guests,
            reservations,
        }
    }

    /// Register a guest.
    ///
    /// A tax id already held by a live guest is a conflict. A tax id held
    /// by a soft-deleted guest revives that record in place with the new
    /// contact details instead of inserting a duplicate row.
    pub async fn register(&self, hotel_id: Uuid, data: &CreateGuest) -> AppResult<Guest> {
        if let Some(existing) = self
            .guests
            .find_by_tax_id_any(hotel_id, &data.tax_id)
            .await?
        {
            if !existing.is_deleted {
                return Err(AppError::conflict(format!(
                    "A guest with tax id '{}' is already registered",
                    data.tax_id
                )));
            }

            let revived = self.guests.revive(existing.id, data).await?;
            info!(guest_id = %revived.id, "Soft-deleted guest revived");
            return Ok(revived);
        }

        let guest = self.guests.create(hotel_id, data).await?;
        info!(guest_id = %guest.id, "Guest registered");
        Ok(guest)
    }

    /// Fetch a guest.
    pub async fn get(&self, hotel_id: Uuid, id: Uuid) -> AppResult<Guest> {
        self.guests
            .find_by_id(hotel_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Guest {id} not found")))
    }

    /// List guests with optional name/tax-id filters.
    pub async fn list(
        &self,
        hotel_id: Uuid,
        name: Option<&str>,
        tax_id: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Guest>> {
        self.guests.list(hotel_id, name, tax_id, page).await
    }

    /// Update a guest's contact fields.
    pub async fn update(
        &self,
        hotel_id: Uuid,
        id: Uuid,
        data: &UpdateGuest,
    ) -> AppResult<Guest> {
        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Guest name cannot be empty"));
            }
        }
        self.guests.update(hotel_id, id, data).await
    }

    /// Soft-delete a guest, keeping the row for revival.
    pub async fn soft_delete(&self, hotel_id: Uuid, id: Uuid) -> AppResult<()> {
        if !self.guests.soft_delete(hotel_id, id).await? {
            return Err(AppError::not_found(format!("Guest {id} not found")));
        }
        info!(guest_id = %id, "Guest soft-deleted");
        Ok(())
    }

    /// Physically delete a guest. Refused while the guest holds a
    /// reservation with a future check-out.
    pub async fn purge(&self, hotel_id: Uuid, id: Uuid) -> AppResult<()> {
        if self.reservations.guest_has_future_checkout(id).await? {
            return Err(AppError::conflict(
                "The guest has a reservation with a future check-out",
            ));
        }
        if !self.guests.hard_delete(hotel_id, id).await? {
            return Err(AppError::not_found(format!("Guest {id} not found")));
        }
        info!(guest_id = %id, "Guest deleted");
        Ok(())
    }
}
