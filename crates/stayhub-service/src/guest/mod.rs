//! Guest registry.

pub mod service;

pub use service::GuestService;
