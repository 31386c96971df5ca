//! Reservation entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ReservationStatus;

/// A stay booked by a guest in a room.
///
/// Reservations are never physically deleted; canceled and checked-out
/// rows remain as the historical record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: Uuid,
    /// The staying guest.
    pub guest_id: Uuid,
    /// The reserved room.
    pub room_id: Uuid,
    /// Start of the stay (inclusive).
    pub check_in: DateTime<Utc>,
    /// End of the stay (exclusive).
    pub check_out: DateTime<Utc>,
    /// Lifecycle status.
    pub status: ReservationStatus,
    /// When the reservation was created.
    pub created_at: DateTime<Utc>,
    /// When the reservation was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservation {
    /// The staying guest.
    pub guest_id: Uuid,
    /// The reserved room.
    pub room_id: Uuid,
    /// Requested check-in.
    pub check_in: DateTime<Utc>,
    /// Requested check-out.
    pub check_out: DateTime<Utc>,
}
