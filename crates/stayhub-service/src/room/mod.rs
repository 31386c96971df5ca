//! Room registry.

pub mod service;

pub use service::RoomService;
