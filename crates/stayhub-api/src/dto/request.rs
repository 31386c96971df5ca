//! Request DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use stayhub_entity::reservation::ReservationStatus;
use stayhub_entity::room::{RoomKind, RoomStatus};

/// POST /api/hotels
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterHotelRequest {
    /// Trading name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Company registration number.
    #[validate(length(min = 11, max = 20))]
    pub tax_id: String,
    /// Contact email.
    #[validate(email)]
    pub email: Option<String>,
    /// Contact phone.
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    /// Street address.
    #[validate(length(max = 255))]
    pub address: Option<String>,
    /// City.
    #[validate(length(max = 100))]
    pub city: Option<String>,
    /// State or province.
    #[validate(length(max = 100))]
    pub state: Option<String>,
    /// Postal code.
    #[validate(length(max = 20))]
    pub zip_code: Option<String>,
}

/// POST /api/hotels/{hotel_id}/guests
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGuestRequest {
    /// Full name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Personal document number.
    #[validate(length(equal = 11))]
    pub tax_id: String,
    /// Email address.
    #[validate(email)]
    pub email: Option<String>,
    /// Phone number.
    #[validate(length(max = 20))]
    pub phone: Option<String>,
}

/// PUT /api/hotels/{hotel_id}/guests/{guest_id}
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGuestRequest {
    /// New full name.
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    /// New email address.
    #[validate(email)]
    pub email: Option<String>,
    /// New phone number.
    #[validate(length(max = 20))]
    pub phone: Option<String>,
}

/// Query parameters for guest listings.
#[derive(Debug, Clone, Deserialize)]
pub struct GuestListQuery {
    /// Substring filter on the guest name.
    pub name: Option<String>,
    /// Exact tax-id filter.
    pub tax_id: Option<String>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub per_page: Option<u64>,
}

/// Query parameters for guest deletion.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteGuestQuery {
    /// Physically delete instead of soft-deleting.
    #[serde(default)]
    pub purge: bool,
}

/// POST /api/hotels/{hotel_id}/rooms
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoomRequest {
    /// Door number.
    #[validate(length(min = 1, max = 20))]
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

/// PUT /api/hotels/{hotel_id}/rooms/{room_id}
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRoomRequest {
    /// New door number.
    #[validate(length(min = 1, max = 20))]
    pub room_number: Option<String>,
    /// New nightly price.
    pub price: Option<Decimal>,
    /// New staff notes.
    pub comments: Option<String>,
}

/// PUT /api/hotels/{hotel_id}/rooms/{room_id}/status
#[derive(Debug, Clone, Deserialize)]
pub struct SetRoomStatusRequest {
    /// The target status.
    pub status: RoomStatus,
}

/// Query parameters for room listings.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomListQuery {
    /// Status filter.
    pub status: Option<RoomStatus>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub per_page: Option<u64>,
}

/// POST /api/hotels/{hotel_id}/reservations
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReservationRequest {
    /// The staying guest.
    pub guest_id: Uuid,
    /// The reserved room.
    pub room_id: Uuid,
    /// Requested check-in.
    pub check_in: DateTime<Utc>,
    /// Requested check-out.
    pub check_out: DateTime<Utc>,
}

/// Query parameters for reservation listings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationListQuery {
    /// Only reservations on this room.
    pub room_id: Option<Uuid>,
    /// Only reservations in this status.
    pub status: Option<ReservationStatus>,
    /// Check-in strictly before this instant.
    pub check_in_before: Option<DateTime<Utc>>,
    /// Check-in strictly after this instant.
    pub check_in_after: Option<DateTime<Utc>>,
    /// Check-out strictly before this instant.
    pub check_out_before: Option<DateTime<Utc>>,
    /// Check-out strictly after this instant.
    pub check_out_after: Option<DateTime<Utc>>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub per_page: Option<u64>,
}

/// GET /api/hotels/{hotel_id}/availability
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityQuery {
    /// Desired check-in.
    pub check_in: DateTime<Utc>,
    /// Desired check-out.
    pub check_out: DateTime<Utc>,
    /// Check this guest for conflicts instead of listing free guests.
    pub guest_id: Option<Uuid>,
}
