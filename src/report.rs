use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FunnelResult;
use crate::models::{FunnelInput, FunnelMetrics};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunnelReport {
    pub funnel_name: String,
    pub invested: f64,
    pub generated_at: DateTime<Utc>,
    pub metrics: FunnelMetrics,
}

impl FunnelReport {
    pub fn new(input: &FunnelInput, metrics: &FunnelMetrics) -> Self {
        Self {
            funnel_name: input.funnel_name.clone(),
            invested: input.budget,
            generated_at: Utc::now(),
            metrics: metrics.clone(),
        }
    }

    /// Stage lines, skipping stages the funnel does not have.
    fn stage_lines(&self) -> Vec<(&'static str, i64)> {
        let m = &self.metrics;
        let mut lines = vec![("Visitors", m.visitors)];
        if m.show_leads {
            lines.push(("Leads", m.leads));
        }
        if m.show_sales_page {
            lines.push(("Link Clicks", m.link_clicks));
        }
        lines.push(("Orders", m.orders));
        if m.show_upsell {
            lines.push(("Upsells", m.upsells));
        }
        lines.push(("Completed", m.completed_orders));
        if m.show_maximizer {
            lines.push(("Subscribers", m.subscribers));
        }
        lines
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn print_summary(&self) {
        println!("\n{}", self.render());
    }

    pub fn to_json(&self) -> FunnelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the text summary under `dir` and returns the file path.
    pub fn save_to_file(&self, dir: impl AsRef<Path>) -> FunnelResult<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(format!(
            "funnel_{}_{}.txt",
            slugify(&self.funnel_name),
            self.generated_at.format("%Y%m%d_%H%M%S")
        ));
        let body = format!(
            "Generated: {}\n{}\n",
            self.generated_at.to_rfc3339(),
            self.render()
        );
        fs::write(&path, body)?;
        Ok(path)
    }
}

impl fmt::Display for FunnelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.metrics;

        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "  {}", self.funnel_name.to_uppercase())?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "  FUNNEL")?;
        writeln!(f, "  ───────────────────────────────────")?;
        for (label, count) in self.stage_lines() {
            writeln!(f, "  {:<13}{}", format!("{}:", label), count)?;
        }
        writeln!(f)?;
        writeln!(f, "  REVENUE")?;
        writeln!(f, "  ───────────────────────────────────")?;
        writeln!(f, "  Product:     ${:.2}", m.product_revenue)?;
        if m.show_upsell {
            writeln!(f, "  Upsell:      ${:.2}", m.upsell_revenue)?;
        }
        if m.show_maximizer {
            writeln!(f, "  MRR:         ${:.2}", m.mrr)?;
        }
        writeln!(f, "  Total:       ${:.2}", m.revenue)?;
        writeln!(f)?;
        writeln!(f, "  RETURN")?;
        writeln!(f, "  ───────────────────────────────────")?;
        writeln!(f, "  Invested:    ${:.2}", self.invested)?;
        writeln!(f, "  Profit:      ${:+.2}", m.profit)?;
        writeln!(f, "  ROI:         {:+.2}%", m.roi)?;
        writeln!(f, "  Margin:      {:.2}%", m.profit_margin)?;
        writeln!(f, "  CPA:         ${:.2}", m.cpa)?;
        if m.show_leads {
            writeln!(f, "  CPL:         ${:.2}", m.cpl)?;
        }
        let status = if m.is_profitable() { "PROFITABLE" } else { "NOT PROFITABLE" };
        writeln!(f, "  Status:      {}", status)?;
        write!(f, "{}", "=".repeat(50))
    }
}

fn slugify(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let slug = slug.trim_matches('_').to_string();
    if slug.is_empty() {
        "campaign".to_string()
    } else {
        slug
    }
}
