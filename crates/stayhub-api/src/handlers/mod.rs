//! HTTP request handlers, organized by domain.

pub mod availability;
pub mod guest;
pub mod health;
pub mod hotel;
pub mod reservation;
pub mod room;

use validator::Validate;

use crate::error::ApiError;
use stayhub_core::error::AppError;

/// Run `validator` checks on a request body, mapping failures into the
/// domain validation error.
fn validate(req: &impl Validate) -> Result<(), ApiError> {
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))
}
