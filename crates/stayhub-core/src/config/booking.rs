//! Reservation and availability policy configuration.

use serde::{Deserialize, Serialize};

/// Booking behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BookingConfig {
    /// Which rooms count as bookable in availability queries.
    #[serde(default)]
    pub room_policy: RoomAvailabilityPolicy,
}

/// Room status filter applied by the availability engine.
///
/// The two modes differ for rooms in `occupied` status: `available_only`
/// hides them even when the occupying reservation does not overlap the
/// requested period, while `exclude_maintenance` keeps them listed. Both
/// are kept as explicit configuration rather than one hard-coded choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoomAvailabilityPolicy {
    /// Only rooms whose status is exactly `available`.
    #[default]
    AvailableOnly,
    /// Every room except those under `maintenance`.
    ExcludeMaintenance,
}
