pub mod field;
pub mod input;
pub mod metrics;

pub use field::{FieldKind, FieldValue, FunnelEdit, FunnelField};
pub use input::FunnelInput;
pub use metrics::FunnelMetrics;
