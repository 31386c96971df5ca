//! Hotel entity model.
//!
//! A hotel is the tenant boundary: every guest, room, and reservation
//! belongs to exactly one hotel, and all queries are scoped by its id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered hotel account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Hotel {
    /// Unique hotel identifier.
    pub id: Uuid,
    /// Trading name.
    pub name: String,
    /// Company registration number, unique across all hotels.
    pub tax_id: String,
    /// Contact email (optional).
    pub email: Option<String>,
    /// Contact phone (optional).
    pub phone: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Postal code.
    pub zip_code: Option<String>,
    /// Whether the account is active.
    pub is_active: bool,
    /// When the hotel was registered.
    pub created_at: DateTime<Utc>,
    /// When the hotel was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to register a new hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterHotel {
    /// Trading name.
    pub name: String,
    /// Company registration number.
    pub tax_id: String,
    /// Contact email (optional).
    pub email: Option<String>,
    /// Contact phone (optional).
    pub phone: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Postal code.
    pub zip_code: Option<String>,
}
