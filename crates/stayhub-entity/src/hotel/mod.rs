//! Hotel (tenant) entity.

pub mod model;

pub use model::{Hotel, RegisterHotel};
