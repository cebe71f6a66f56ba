//! Infrastructure layer.
//!
//! Implements the repository traits defined by the domain layer.
//!
//! - [`persistence`] - PostgreSQL and in-memory repositories

pub mod persistence;
