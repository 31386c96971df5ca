//! Reservation status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a reservation.
///
/// Transitions are monotonic (`booked` → `checked_in` → `checked_out`)
/// except cancellation, which is reachable from `booked` or `checked_in`
/// only. `checked_out` and `canceled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "reservation_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Confirmed for a future check-in.
    Booked,
    /// The guest is currently in the room.
    CheckedIn,
    /// The stay is over.
    CheckedOut,
    /// The reservation was canceled before completion.
    Canceled,
}

impl ReservationStatus {
    /// Whether this reservation still blocks its room's calendar.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Booked | Self::CheckedIn)
    }

    /// Whether no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::CheckedOut | Self::Canceled)
    }

    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "booked",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Canceled => "canceled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = stayhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "booked" => Ok(Self::Booked),
            "checked_in" => Ok(Self::CheckedIn),
            "checked_out" => Ok(Self::CheckedOut),
            "canceled" => Ok(Self::Canceled),
            _ => Err(stayhub_core::AppError::validation(format!(
                "Invalid reservation status: '{s}'. Expected one of: booked, checked_in, checked_out, canceled"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_and_terminal_partition_the_states() {
        for status in [
            ReservationStatus::Booked,
            ReservationStatus::CheckedIn,
            ReservationStatus::CheckedOut,
            ReservationStatus::Canceled,
        ] {
            assert_ne!(status.is_active(), status.is_terminal());
        }
    }

    #[test]
    fn round_trips_through_str() {
        for status in [
            ReservationStatus::Booked,
            ReservationStatus::CheckedIn,
            ReservationStatus::CheckedOut,
            ReservationStatus::Canceled,
        ] {
            assert_eq!(
                status.as_str().parse::<ReservationStatus>().unwrap(),
                status
            );
        }
    }
}
