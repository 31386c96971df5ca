//! Room entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::RoomKind;
use super::status::RoomStatus;

/// A bookable room belonging to a hotel.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    /// Unique room identifier.
    pub id: Uuid,
    /// Owning hotel.
    pub hotel_id: Uuid,
    /// Door number, unique per hotel.
    pub room_number: String,
    /// Room category.
    pub kind: RoomKind,
    /// Adult capacity.
    pub capacity_adults: i32,
    /// Child capacity.
    pub capacity_children: i32,
    /// Total capacity, always the sum of adults and children.
    pub capacity_total: i32,
    /// Nightly price.
    pub price: Decimal,
    /// Occupancy status.
    pub status: RoomStatus,
    /// Free-form staff notes.
    pub comments: Option<String>,
    /// Whether the room is bookable at all.
    pub is_active: bool,
    /// When the room was created.
    pub created_at: DateTime<Utc>,
    /// When the room was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new room.
///
/// Capacities are derived from the kind for non-custom rooms; for
/// [`RoomKind::Custom`] the caller must supply both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoom {
    /// Door number.
    pub room_number: String,
    /// Room category.
    pub kind: RoomKind,
    /// Adult capacity (required for custom rooms).
    pub capacity_adults: Option<i32>,
    /// Child capacity (required for custom rooms).
    pub capacity_children: Option<i32>,
    /// Nightly price.
    pub price: Decimal,
    /// Free-form staff notes.
    pub comments: Option<String>,
}

/// Data for updating an existing room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoom {
    /// New door number (unchanged if `None`).
    pub room_number: Option<String>,
    /// New nightly price (unchanged if `None`).
    pub price: Option<Decimal>,
    /// New staff notes (unchanged if `None`).
    pub comments: Option<String>,
}
