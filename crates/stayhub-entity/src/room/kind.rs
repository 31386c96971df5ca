//! Room kind enumeration and capacity derivation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of a room.
///
/// Every kind except `Custom` carries a fixed (adults, children) capacity
/// pair; `Custom` rooms require caller-supplied capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "room_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    /// One adult, no children.
    Single,
    /// Two adults.
    Double,
    /// Two adults and one child.
    Suite,
    /// Two adults and two children.
    Family,
    /// Caller-defined capacities.
    Custom,
}

impl RoomKind {
    /// The fixed (adults, children) capacity pair for this kind, or `None`
    /// for `Custom`.
    pub fn fixed_capacity(&self) -> Option<(i32, i32)> {
        match self {
            Self::Single => Some((1, 0)),
            Self::Double => Some((2, 0)),
            Self::Suite => Some((2, 1)),
            Self::Family => Some((2, 2)),
            Self::Custom => None,
        }
    }

    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Suite => "suite",
            Self::Family => "family",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoomKind {
    type Err = stayhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "suite" => Ok(Self::Suite),
            "family" => Ok(Self::Family),
            "custom" => Ok(Self::Custom),
            _ => Err(stayhub_core::AppError::validation(format!(
                "Invalid room kind: '{s}'. Expected one of: single, double, suite, family, custom"
            ))),
        }
    }
}
