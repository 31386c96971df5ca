//! Response DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayhub_core::types::pagination::PageResponse;
use stayhub_entity::guest::Guest;
use stayhub_entity::hotel::Hotel;
use stayhub_entity::reservation::Reservation;
use stayhub_entity::room::Room;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T: Serialize> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Current page.
    pub page: u64,
    /// Items per page.
    pub per_page: u64,
    /// Total item count.
    pub total_items: u64,
    /// Total pages.
    pub total_pages: u64,
}

impl<T: Serialize> PaginatedResponse<T> {
    /// Build from a repository page, converting each item.
    pub fn from_page<E>(page: PageResponse<E>, convert: impl FnMut(E) -> T) -> Self
    where
        E: Serialize,
    {
        let page = page.map(convert);
        Self {
            items: page.items,
            page: page.page,
            per_page: page.per_page,
            total_items: page.total_items,
            total_pages: page.total_pages,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
}

/// Hotel account summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelResponse {
    /// Hotel ID.
    pub id: Uuid,
    /// Trading name.
    pub name: String,
    /// Company registration number.
    pub tax_id: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Whether the account is active.
    pub is_active: bool,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl From<Hotel> for HotelResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            tax_id: hotel.tax_id,
            email: hotel.email,
            phone: hotel.phone,
            city: hotel.city,
            is_active: hotel.is_active,
            created_at: hotel.created_at,
        }
    }
}

/// Guest summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestResponse {
    /// Guest ID.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Personal document number.
    pub tax_id: String,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<Guest> for GuestResponse {
    fn from(guest: Guest) -> Self {
        Self {
            id: guest.id,
            name: guest.name,
            tax_id: guest.tax_id,
            email: guest.email,
            phone: guest.phone,
            created_at: guest.created_at,
        }
    }
}

/// Room summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomResponse {
    /// Room ID.
    pub id: Uuid,
    /// Door number.
    pub room_number: String,
    /// Room category.
    pub kind: String,
    /// Adult capacity.
    pub capacity_adults: i32,
    /// Child capacity.
    pub capacity_children: i32,
    /// Total capacity.
    pub capacity_total: i32,
    /// Nightly price.
    pub price: Decimal,
    /// Occupancy status.
    pub status: String,
    /// Staff notes.
    pub comments: Option<String>,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            room_number: room.room_number,
            kind: room.kind.to_string(),
            capacity_adults: room.capacity_adults,
            capacity_children: room.capacity_children,
            capacity_total: room.capacity_total,
            price: room.price,
            status: room.status.to_string(),
            comments: room.comments,
        }
    }
}

/// Reservation summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    /// Reservation ID.
    pub id: Uuid,
    /// The staying guest.
    pub guest_id: Uuid,
    /// The reserved room.
    pub room_id: Uuid,
    /// Start of the stay.
    pub check_in: DateTime<Utc>,
    /// End of the stay.
    pub check_out: DateTime<Utc>,
    /// Lifecycle status.
    pub status: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            guest_id: reservation.guest_id,
            room_id: reservation.room_id,
            check_in: reservation.check_in,
            check_out: reservation.check_out,
            status: reservation.status.to_string(),
            created_at: reservation.created_at,
        }
    }
}

/// Check-in response with the date-conflict adjustment flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInResponse {
    /// The updated reservation.
    pub reservation: ReservationResponse,
    /// Whether check-out was pushed to one day after the actual check-in
    /// because the stored check-out had already passed.
    pub checkout_adjusted: bool,
}

/// Advance response describing the applied step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceResponse {
    /// The updated reservation.
    pub reservation: ReservationResponse,
    /// The applied step: `checked_in` or `checked_out`.
    pub step: String,
    /// Whether check-out was adjusted during a check-in step.
    pub checkout_adjusted: bool,
}

/// Stay price response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceResponse {
    /// Billable nights.
    pub nights: i64,
    /// Total price.
    pub total: Decimal,
}

/// Availability report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// Rooms free over the requested period.
    pub rooms_available: Vec<RoomResponse>,
    /// Guests free over the requested period.
    pub guests_available: Vec<GuestResponse>,
    /// Whether the requested guest has a conflicting reservation.
    pub guest_conflict: bool,
}
