//! Guest entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A guest registered with a hotel.
///
/// Guests are soft-deleted: `is_deleted` hides the record from lookups and
/// frees its tax id for re-registration, which revives the same row instead
/// of inserting a duplicate.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Guest {
    /// Unique guest identifier.
    pub id: Uuid,
    /// Owning hotel.
    pub hotel_id: Uuid,
    /// Full name.
    pub name: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Personal document number, unique per hotel among non-deleted guests.
    pub tax_id: String,
    /// Soft-delete flag.
    pub is_deleted: bool,
    /// When the guest was created.
    pub created_at: DateTime<Utc>,
    /// When the guest was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to register a new guest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGuest {
    /// Full name.
    pub name: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Personal document number.
    pub tax_id: String,
}

/// Data for updating an existing guest's contact details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGuest {
    /// New full name (unchanged if `None`).
    pub name: Option<String>,
    /// New email address (unchanged if `None`).
    pub email: Option<String>,
    /// New phone number (unchanged if `None`).
    pub phone: Option<String>,
}
