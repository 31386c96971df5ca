//! Reservation orchestration service.
//!
//! Every state-changing operation runs in one transaction: the reservation
//! and room rows are loaded under `FOR UPDATE`, the pure lifecycle
//! function is applied, and both rows are persisted before commit. Guard
//! checks therefore re-validate against current state immediately before
//! the write, so concurrent transitions on the same reservation serialize
//! instead of losing updates.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{Postgres, Transaction};
use tracing::info;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_core::types::period::StayPeriod;
use stayhub_database::repositories::reservation::ReservationFilter;
use stayhub_database::repositories::{GuestRepository, ReservationRepository, RoomRepository};
use stayhub_entity::reservation::{CreateReservation, Reservation, ReservationStatus};
use stayhub_entity::room::{Room, RoomStatus};

use super::lifecycle::{self, AdvanceStep};
use super::pricing;

/// Result of a check-in, carrying the date-conflict adjustment flag.
#[derive(Debug, Clone)]
pub struct CheckInOutcome {
    /// The updated reservation.
    pub reservation: Reservation,
    /// Whether the stored check-out was pushed to `now + 1 day`.
    pub checkout_adjusted: bool,
}

/// A priced stay.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PriceQuote {
    /// Billable nights (partial days round up).
    pub nights: i64,
    /// Total price for the stay.
    pub total: Decimal,
}

/// Handles the reservation lifecycle.
#[derive(Debug, Clone)]
pub struct ReservationService {
    /// Reservation repository.
    reservations: Arc<ReservationRepository>,
    /// Room repository.
    rooms: Arc<RoomRepository>,
    /// Guest repository.
    guests: Arc<GuestRepository>,
}

impl ReservationService {
    /// Creates a new reservation service.
    pub fn new(
        reservations: Arc<ReservationRepository>,
        rooms: Arc<RoomRepository>,
        guests: Arc<GuestRepository>,
    ) -> Self {
        Self {
            reservations,
            rooms,
            guests,
        }
    }

    /// Create a reservation.
    ///
    /// The initial status follows from check-in vs. now: future check-ins
    /// are booked, past-or-present check-ins start the stay and occupy the
    /// room. The room's calendar is re-checked for overlaps under lock
    /// inside the inserting transaction.
    pub async fn create(
        &self,
        hotel_id: Uuid,
        data: &CreateReservation,
    ) -> AppResult<Reservation> {
        let now = Utc::now();
        lifecycle::validate_window(data.check_in, data.check_out, now)?;
        let period = StayPeriod::new(data.check_in, data.check_out)?;

        let guest = self
            .guests
            .find_by_id(hotel_id, data.guest_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Guest {} not found", data.guest_id)))?;

        let mut tx = self.reservations.begin().await?;

        let room = self
            .rooms
            .find_for_update(&mut tx, hotel_id, data.room_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {} not found", data.room_id)))?;
        if !room.is_active {
            return Err(AppError::validation("The room is not active"));
        }

        if self
            .reservations
            .room_has_active_overlap(&mut tx, room.id, &period)
            .await?
        {
            return Err(AppError::conflict(
                "The room already has a reservation overlapping this period",
            ));
        }

        let status = lifecycle::status_on_create(period.check_in, now);
        let reservation = self
            .reservations
            .insert(&mut tx, guest.id, room.id, &period, status)
            .await?;

        if status == ReservationStatus::CheckedIn {
            self.rooms
                .set_status(&mut tx, room.id, RoomStatus::Occupied)
                .await?;
        }

        commit(tx).await?;

        info!(
            reservation_id = %reservation.id,
            room_id = %room.id,
            status = %reservation.status,
            "Reservation created"
        );

        Ok(reservation)
    }

    /// Check a booked reservation in.
    pub async fn check_in(&self, hotel_id: Uuid, id: Uuid) -> AppResult<CheckInOutcome> {
        let now = Utc::now();
        let mut tx = self.reservations.begin().await?;
        let (mut reservation, mut room) = self.lock_pair(&mut tx, hotel_id, id).await?;

        let checkout_adjusted = lifecycle::apply_check_in(&mut reservation, &mut room, now)?;
        self.persist_pair(&mut tx, &reservation, &room).await?;
        commit(tx).await?;

        info!(reservation_id = %reservation.id, checkout_adjusted, "Reservation checked in");

        Ok(CheckInOutcome {
            reservation,
            checkout_adjusted,
        })
    }

    /// Check a checked-in reservation out.
    pub async fn check_out(&self, hotel_id: Uuid, id: Uuid) -> AppResult<Reservation> {
        let now = Utc::now();
        let mut tx = self.reservations.begin().await?;
        let (mut reservation, mut room) = self.lock_pair(&mut tx, hotel_id, id).await?;

        lifecycle::apply_check_out(&mut reservation, &mut room, now)?;
        self.persist_pair(&mut tx, &reservation, &room).await?;
        commit(tx).await?;

        info!(reservation_id = %reservation.id, "Reservation checked out");

        Ok(reservation)
    }

    /// Cancel a booked or checked-in reservation.
    pub async fn cancel(&self, hotel_id: Uuid, id: Uuid) -> AppResult<Reservation> {
        let now = Utc::now();
        let mut tx = self.reservations.begin().await?;
        let (mut reservation, mut room) = self.lock_pair(&mut tx, hotel_id, id).await?;

        lifecycle::apply_cancel(&mut reservation, &mut room, now)?;
        self.persist_pair(&mut tx, &reservation, &room).await?;
        commit(tx).await?;

        info!(reservation_id = %reservation.id, "Reservation canceled");

        Ok(reservation)
    }

    /// Apply the single forward transition implied by the current
    /// reservation/room status pair.
    pub async fn advance(&self, hotel_id: Uuid, id: Uuid) -> AppResult<(Reservation, AdvanceStep)> {
        let now = Utc::now();
        let mut tx = self.reservations.begin().await?;
        let (mut reservation, mut room) = self.lock_pair(&mut tx, hotel_id, id).await?;

        let step = lifecycle::apply_advance(&mut reservation, &mut room, now)?;
        self.persist_pair(&mut tx, &reservation, &room).await?;
        commit(tx).await?;

        info!(reservation_id = %reservation.id, ?step, "Reservation advanced");

        Ok((reservation, step))
    }

    /// Fetch a reservation.
    pub async fn get(&self, hotel_id: Uuid, id: Uuid) -> AppResult<Reservation> {
        self.reservations
            .find_by_id(hotel_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))
    }

    /// List reservations with optional filters.
    pub async fn list(
        &self,
        hotel_id: Uuid,
        filter: &ReservationFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Reservation>> {
        self.reservations.list(hotel_id, filter, page).await
    }

    /// Price a reservation against its room's nightly rate.
    pub async fn quote(&self, hotel_id: Uuid, id: Uuid) -> AppResult<PriceQuote> {
        let reservation = self.get(hotel_id, id).await?;
        let room = self
            .rooms
            .find_by_id(hotel_id, reservation.room_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Room {} not found", reservation.room_id))
            })?;

        Ok(PriceQuote {
            nights: pricing::billable_nights(&reservation),
            total: pricing::quote_total(&reservation, &room),
        })
    }

    /// Load and lock the reservation and its room, in that order.
    async fn lock_pair(
        &self,
        tx: &mut Transaction<'static, Postgres>,
        hotel_id: Uuid,
        id: Uuid,
    ) -> AppResult<(Reservation, Room)> {
        let reservation = self
            .reservations
            .find_for_update(tx, hotel_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))?;

        let room = self
            .rooms
            .find_for_update(tx, hotel_id, reservation.room_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Room {} not found", reservation.room_id))
            })?;

        Ok((reservation, room))
    }

    /// Persist the transitioned reservation and room in the transaction.
    async fn persist_pair(
        &self,
        tx: &mut Transaction<'static, Postgres>,
        reservation: &Reservation,
        room: &Room,
    ) -> AppResult<()> {
        self.reservations.save_transition(tx, reservation).await?;
        self.rooms.set_status(tx, room.id, room.status).await?;
        Ok(())
    }
}

/// Commit a transaction, mapping the sqlx error.
async fn commit(tx: Transaction<'static, Postgres>) -> AppResult<()> {
    tx.commit()
        .await
        .map_err(|e| AppError::with_source(
            stayhub_core::error::ErrorKind::Database,
            "Failed to commit transaction",
            e,
        ))
}
