use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{FunnelInput, FunnelMetrics};

/// Stand-in cost per click when the input says zero.
pub const FALLBACK_CPC: f64 = 0.01;

/// Derives every funnel metric from `input`.
///
/// Each stage feeds the next at full precision; rounding happens only when
/// the output record is assembled. Percentages are not clamped, and
/// `fulfillment_rate` is intentionally ignored.
pub fn compute_metrics(input: &FunnelInput) -> FunnelMetrics {
    let cpc = if input.cpc == 0.0 { FALLBACK_CPC } else { input.cpc };
    let visitors = input.budget / cpc;

    let leads = if input.has_leads {
        visitors * (input.opt_in_rate / 100.0)
    } else {
        visitors
    };
    let link_clicks = if input.has_sales_page {
        leads * (input.click_through_rate / 100.0)
    } else {
        leads
    };
    let total_orders = link_clicks * (input.sales_conv_rate / 100.0);
    let upsells = if input.has_upsell {
        total_orders * (input.upsell_rate / 100.0)
    } else {
        0.0
    };
    let completed_orders = total_orders;

    let product_revenue = completed_orders * input.product_price;
    let upsell_revenue = upsells * input.upsell_price;
    let one_time_revenue = product_revenue + upsell_revenue;

    let subscribers = if input.has_maximizer {
        completed_orders * (input.maximizer_rate / 100.0)
    } else {
        0.0
    };
    let mrr = subscribers * input.maximizer_price;

    let total_revenue = one_time_revenue + mrr;
    let profit = total_revenue - input.budget;
    let roi = if input.budget > 0.0 {
        (profit / input.budget) * 100.0
    } else {
        0.0
    };
    let profit_margin = if total_revenue > 0.0 {
        (profit / total_revenue) * 100.0
    } else {
        0.0
    };
    let cpa = if completed_orders > 0.0 {
        input.budget / completed_orders
    } else {
        0.0
    };
    let cpl = if leads > 0.0 { input.budget / leads } else { 0.0 };

    FunnelMetrics {
        visitors: round_count(visitors),
        leads: round_count(leads),
        link_clicks: round_count(link_clicks),
        orders: round_count(total_orders),
        upsells: round_count(upsells),
        completed_orders: round_count(completed_orders),
        revenue: round2(total_revenue),
        product_revenue: round2(product_revenue),
        upsell_revenue: round2(upsell_revenue),
        profit: round2(profit),
        roi: round2(roi),
        profit_margin: round2(profit_margin),
        cpa: round2(cpa),
        cpl: round2(cpl),
        mrr: round2(mrr),
        subscribers: round_count(subscribers),
        show_leads: input.has_leads,
        show_sales_page: input.has_sales_page,
        show_upsell: input.has_upsell,
        show_maximizer: input.has_maximizer,
    }
}

fn round_count(x: f64) -> i64 {
    x.round() as i64
}

/// Rounds the exact decimal value of `x` to cents, ties away from zero.
pub(crate) fn round2(x: f64) -> f64 {
    match Decimal::from_f64_retain(x) {
        Some(d) => d
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .to_string()
            .parse()
            .unwrap_or(x),
        None => x,
    }
}
