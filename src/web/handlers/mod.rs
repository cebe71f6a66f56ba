//! HTML template rendering handlers.

mod dashboard;
mod not_found;
mod stats;

pub use dashboard::dashboard_handler;
pub use not_found::{fallback_handler, not_found_page};
pub use stats::stats_handler;
