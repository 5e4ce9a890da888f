use serde::{Deserialize, Serialize};

/// Everything derived from one [`FunnelInput`](crate::models::FunnelInput).
///
/// Counts are whole numbers; money and percentages carry two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelMetrics {
    // Stage counts
    pub visitors: i64,
    pub leads: i64,
    pub link_clicks: i64,
    pub orders: i64,
    pub upsells: i64,
    pub completed_orders: i64,

    // Money
    pub revenue: f64,
    pub product_revenue: f64,
    pub upsell_revenue: f64,
    pub profit: f64,
    pub roi: f64,
    pub profit_margin: f64,
    pub cpa: f64,
    pub cpl: f64,

    // Recurring
    pub mrr: f64,
    pub subscribers: i64,

    // Stage visibility
    pub show_leads: bool,
    pub show_sales_page: bool,
    pub show_upsell: bool,
    pub show_maximizer: bool,
}

impl FunnelMetrics {
    pub fn is_profitable(&self) -> bool {
        self.profit > 0.0
    }
}
