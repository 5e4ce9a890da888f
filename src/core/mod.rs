pub mod calculator;

pub use calculator::compute_metrics;
