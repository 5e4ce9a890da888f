pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod report;
pub mod session;
#[cfg(test)]
pub mod test_helpers;

pub use crate::core::compute_metrics;
pub use crate::error::{FunnelError, FunnelResult};
pub use crate::models::{FunnelInput, FunnelMetrics};
pub use crate::session::FunnelSession;
