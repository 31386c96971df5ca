//! # stayhub-api
//!
//! HTTP API layer for StayHub: the Axum router, handlers, request and
//! response DTOs, and the mapping from domain errors to HTTP statuses.
//! The tenant id is explicit in every route path; there is no ambient
//! session state.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
