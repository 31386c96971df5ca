//! Unified application error types for StayHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the `?` operator. Every guard failure in the
//! reservation lifecycle is terminal for that call: the caller decides
//! whether to retry with corrected input.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested hotel, guest, room, or reservation was not found.
    NotFound,
    /// Input validation failed.
    Validation,
    /// A uniqueness or booking conflict (duplicate room number, duplicate
    /// tax id, overlapping reservation on the same room).
    Conflict,
    /// A reservation window with check-out not strictly after check-in.
    InvalidDateRange,
    /// A reservation window whose check-out lies in the past.
    PastCheckout,
    /// A lifecycle transition attempted outside its guard.
    CannotModify,
    /// Cancellation of a reservation that is already canceled.
    AlreadyCanceled,
    /// Cancellation of a reservation that has already been checked out.
    AlreadyClosed,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// An internal server error occurred.
    Internal,
    /// The service is temporarily unavailable.
    ServiceUnavailable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::InvalidDateRange => write!(f, "INVALID_DATE_RANGE"),
            Self::PastCheckout => write!(f, "PAST_CHECKOUT"),
            Self::CannotModify => write!(f, "CANNOT_MODIFY"),
            Self::AlreadyCanceled => write!(f, "ALREADY_CANCELED"),
            Self::AlreadyClosed => write!(f, "ALREADY_CLOSED"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::ServiceUnavailable => write!(f, "SERVICE_UNAVAILABLE"),
        }
    }
}

/// The unified application error used throughout StayHub.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls, giving a single error type at the
/// application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create an invalid-date-range error.
    pub fn invalid_date_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDateRange, message)
    }

    /// Create a past-checkout error.
    pub fn past_checkout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PastCheckout, message)
    }

    /// Create a cannot-modify error.
    pub fn cannot_modify(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CannotModify, message)
    }

    /// Create an already-canceled error.
    pub fn already_canceled(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyCanceled, message)
    }

    /// Create an already-closed error.
    pub fn already_closed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyClosed, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a service-unavailable error.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Internal,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = AppError::cannot_modify("reservation is closed");
        assert_eq!(err.to_string(), "CANNOT_MODIFY: reservation is closed");
    }

    #[test]
    fn constructors_set_kind() {
        assert_eq!(
            AppError::invalid_date_range("x").kind,
            ErrorKind::InvalidDateRange
        );
        assert_eq!(AppError::past_checkout("x").kind, ErrorKind::PastCheckout);
        assert_eq!(
            AppError::already_canceled("x").kind,
            ErrorKind::AlreadyCanceled
        );
        assert_eq!(AppError::already_closed("x").kind, ErrorKind::AlreadyClosed);
    }
}
