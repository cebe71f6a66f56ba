//! Domain layer: entities and repository contracts.
//!
//! Has no dependency on the HTTP or storage layers.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
