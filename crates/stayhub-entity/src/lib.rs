//! # stayhub-entity
//!
//! Domain entity models for StayHub: hotels (tenants), guests, rooms, and
//! reservations, together with their closed status enumerations. Every
//! status is a Rust enum mapped to a Postgres enum so that unhandled states
//! fail at compile time rather than at runtime.

pub mod guest;
pub mod hotel;
pub mod reservation;
pub mod room;

pub use guest::Guest;
pub use hotel::Hotel;
pub use reservation::{Reservation, ReservationStatus};
pub use room::{Room, RoomKind, RoomStatus};
