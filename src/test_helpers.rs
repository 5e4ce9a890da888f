use crate::models::FunnelInput;

/// The reference campaign: every stage switched on.
pub fn scenario_a() -> FunnelInput {
    FunnelInput {
        funnel_name: "Scenario A".to_string(),
        budget: 5000.0,
        cpc: 2.5,
        has_leads: true,
        opt_in_rate: 40.0,
        has_sales_page: true,
        click_through_rate: 20.0,
        sales_conv_rate: 5.0,
        product_price: 997.0,
        has_upsell: true,
        upsell_rate: 15.0,
        upsell_price: 1997.0,
        fulfillment_rate: 100.0,
        has_maximizer: true,
        maximizer_rate: 25.0,
        maximizer_price: 97.0,
    }
}

/// Same numbers as [`scenario_a`] with every optional stage switched off.
pub fn bare_funnel() -> FunnelInput {
    FunnelInput {
        funnel_name: "Bare".to_string(),
        has_leads: false,
        has_sales_page: false,
        has_upsell: false,
        has_maximizer: false,
        ..scenario_a()
    }
}
