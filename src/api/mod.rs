//! REST API layer.
//!
//! - [`dto`] - Request and response bodies
//! - [`handlers`] - Endpoint handlers, including the redirect and health check
//! - [`middleware`] - Request tracing
//! - [`routes`] - `/api` route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
