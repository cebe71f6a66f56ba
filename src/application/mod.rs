//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose a small API to the HTTP
//! handlers and the admin CLI.
//!
//! - [`services::link_service::LinkService`] - Link creation, lookup, deletion and click tracking

pub mod services;
