//! Room and guest availability queries.

pub mod service;

pub use service::{AvailabilityReport, AvailabilityService};
