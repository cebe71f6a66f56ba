//! Core domain entities.
//!
//! Entities are plain data structures. Creation input uses a separate
//! `New*` struct so database-assigned fields never have to be faked.
//!
//! - [`Link`] - A code-to-URL mapping with click metadata
//! - [`NewLink`] - Input for creating a link

pub mod link;

pub use link::{Link, NewLink};
