use serde::{Deserialize, Serialize};

use crate::models::FunnelInput;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Baseline campaign
    pub funnel_name: String,
    pub budget: f64,
    pub cpc: f64,

    // Reports
    pub report_dir: String,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let defaults = FunnelInput::default();

        Config {
            funnel_name: env("FUNNEL_NAME", &defaults.funnel_name),
            budget: parse_finite(&env("FUNNEL_BUDGET", ""), defaults.budget),
            cpc: parse_finite(&env("FUNNEL_CPC", ""), defaults.cpc),
            report_dir: env("FUNNEL_REPORT_DIR", "reports"),
            log_level: env("FUNNEL_LOG_LEVEL", "info"),
        }
    }

    /// The input record a session starts from and resets to.
    pub fn baseline_input(&self) -> FunnelInput {
        FunnelInput {
            funnel_name: self.funnel_name.clone(),
            budget: self.budget,
            cpc: self.cpc,
            ..FunnelInput::default()
        }
    }
}

/// `NaN` and `inf` parse as f64, so they are filtered out here.
fn parse_finite(raw: &str, default: f64) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        let defaults = FunnelInput::default();
        Config {
            funnel_name: defaults.funnel_name,
            budget: defaults.budget,
            cpc: defaults.cpc,
            report_dir: "reports".to_string(),
            log_level: "info".to_string(),
        }
    }
}
