//! # stayhub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all StayHub entities. Reservation mutations are
//! transaction-aware: the service layer opens one transaction per state
//! transition, and the repository methods that participate take an
//! explicit connection.

pub mod connection;
pub mod migration;
pub mod repositories;
