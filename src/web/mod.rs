//! Browser-facing pages.
//!
//! Server-side rendered with Askama templates from `templates/`.
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
