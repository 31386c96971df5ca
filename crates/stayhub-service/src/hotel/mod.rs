//! Hotel (tenant) registry.

pub mod service;

pub use service::HotelService;
