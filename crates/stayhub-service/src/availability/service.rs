//! The availability engine.
//!
//! Answers "what is free in `[check_in, check_out)`" for a tenant. Room
//! availability excludes overlapping active reservations and applies the
//! configured status policy. Guest behavior depends on whether a specific
//! guest is named: the listing excludes guests with active overlapping
//! reservations, while the single-guest conflict flag considers every
//! reservation regardless of status. The asymmetry is intentional and
//! kept as two separate repository predicates.

use std::sync::Arc;

use uuid::Uuid;

use stayhub_core::config::booking::RoomAvailabilityPolicy;
use stayhub_core::result::AppResult;
use stayhub_core::types::period::StayPeriod;
use stayhub_database::repositories::ReservationRepository;
use stayhub_entity::guest::Guest;
use stayhub_entity::room::Room;

/// The answer to an availability query.
#[derive(Debug, Clone)]
pub struct AvailabilityReport {
    /// Rooms free over the requested period.
    pub rooms: Vec<Room>,
    /// Guests free over the requested period. Empty when a specific guest
    /// was requested.
    pub guests: Vec<Guest>,
    /// Whether the requested guest has any conflicting reservation.
    /// `false` when no guest was requested.
    pub guest_conflict: bool,
}

/// Computes room and guest availability for a stay window.
#[derive(Debug, Clone)]
pub struct AvailabilityService {
    /// Reservation repository (holds the overlap queries).
    reservations: Arc<ReservationRepository>,
    /// Which rooms count as bookable.
    room_policy: RoomAvailabilityPolicy,
}

impl AvailabilityService {
    /// Creates a new availability service.
    pub fn new(
        reservations: Arc<ReservationRepository>,
        room_policy: RoomAvailabilityPolicy,
    ) -> Self {
        Self {
            reservations,
            room_policy,
        }
    }

    /// Compute availability for the period, optionally for one guest.
    pub async fn check(
        &self,
        hotel_id: Uuid,
        period: &StayPeriod,
        guest_id: Option<Uuid>,
    ) -> AppResult<AvailabilityReport> {
        let rooms = self
            .reservations
            .available_rooms(hotel_id, period, self.room_policy)
            .await?;

        let (guests, guest_conflict) = match guest_id {
            Some(guest_id) => {
                let conflict = self
                    .reservations
                    .guest_has_any_overlap(guest_id, period)
                    .await?;
                (Vec::new(), conflict)
            }
            None => {
                let guests = self
                    .reservations
                    .available_guests(hotel_id, period)
                    .await?;
                (guests, false)
            }
        };

        Ok(AvailabilityReport {
            rooms,
            guests,
            guest_conflict,
        })
    }
}
