use serde::{Deserialize, Serialize};

use crate::error::{FunnelError, FunnelResult};
use crate::models::field::{FieldValue, FunnelField};

/// One snapshot of every knob the funnel calculator reads.
///
/// Percentages are expressed on a 0-100 scale and are never clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelInput {
    pub funnel_name: String,

    // Traffic
    pub budget: f64,
    pub cpc: f64,

    // Lead capture
    pub has_leads: bool,
    pub opt_in_rate: f64,

    // Sales page
    pub has_sales_page: bool,
    pub click_through_rate: f64,
    pub sales_conv_rate: f64,
    pub product_price: f64,

    // Upsell
    pub has_upsell: bool,
    pub upsell_rate: f64,
    pub upsell_price: f64,

    /// Accepted and carried along, but not applied to completed orders.
    pub fulfillment_rate: f64,

    // Profit maximizer (recurring)
    pub has_maximizer: bool,
    pub maximizer_rate: f64,
    pub maximizer_price: f64,
}

impl Default for FunnelInput {
    fn default() -> Self {
        Self {
            funnel_name: "New Campaign".to_string(),
            budget: 5000.0,
            cpc: 2.50,
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
}

impl FunnelInput {
    /// Returns a copy of `self` with a single field replaced.
    ///
    /// The receiver is left untouched; callers swap the whole record.
    pub fn with_field(&self, field: FunnelField, value: FieldValue) -> FunnelResult<FunnelInput> {
        let mut next = self.clone();
        match (field, value) {
            (FunnelField::FunnelName, FieldValue::Text(s)) => next.funnel_name = s,
            (FunnelField::Budget, FieldValue::Number(n)) => next.budget = n,
            (FunnelField::Cpc, FieldValue::Number(n)) => next.cpc = n,
            (FunnelField::HasLeads, FieldValue::Flag(b)) => next.has_leads = b,
            (FunnelField::OptInRate, FieldValue::Number(n)) => next.opt_in_rate = n,
            (FunnelField::HasSalesPage, FieldValue::Flag(b)) => next.has_sales_page = b,
            (FunnelField::ClickThroughRate, FieldValue::Number(n)) => next.click_through_rate = n,
            (FunnelField::SalesConvRate, FieldValue::Number(n)) => next.sales_conv_rate = n,
            (FunnelField::ProductPrice, FieldValue::Number(n)) => next.product_price = n,
            (FunnelField::HasUpsell, FieldValue::Flag(b)) => next.has_upsell = b,
            (FunnelField::UpsellRate, FieldValue::Number(n)) => next.upsell_rate = n,
            (FunnelField::UpsellPrice, FieldValue::Number(n)) => next.upsell_price = n,
            (FunnelField::FulfillmentRate, FieldValue::Number(n)) => next.fulfillment_rate = n,
            (FunnelField::HasMaximizer, FieldValue::Flag(b)) => next.has_maximizer = b,
            (FunnelField::MaximizerRate, FieldValue::Number(n)) => next.maximizer_rate = n,
            (FunnelField::MaximizerPrice, FieldValue::Number(n)) => next.maximizer_price = n,
            (field, value) => {
                return Err(FunnelError::TypeMismatch {
                    field: field.as_str(),
                    expected: field.kind(),
                    actual: value.kind(),
                })
            }
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_initial_campaign() {
        let input = FunnelInput::default();
        assert_eq!(input.funnel_name, "New Campaign");
        assert!((input.budget - 5000.0).abs() < 1e-9);
        assert!((input.cpc - 2.5).abs() < 1e-9);
        assert!((input.fulfillment_rate - 100.0).abs() < 1e-9);
        assert!(input.has_leads && input.has_sales_page && input.has_upsell && input.has_maximizer);
    }

    #[test]
    fn with_field_replaces_only_target() {
        let base = FunnelInput::default();
        let next = base
            .with_field(FunnelField::Budget, FieldValue::Number(1200.0))
            .unwrap();
        assert!((next.budget - 1200.0).abs() < 1e-9);
        assert!((base.budget - 5000.0).abs() < 1e-9);

        let mut expected = base.clone();
        expected.budget = 1200.0;
        assert_eq!(next, expected);
    }

    #[test]
    fn with_field_rejects_wrong_kind() {
        let base = FunnelInput::default();
        let err = base
            .with_field(FunnelField::HasUpsell, FieldValue::Number(1.0))
            .unwrap_err();
        assert!(matches!(
            err,
            FunnelError::TypeMismatch {
                field: "hasUpsell",
                expected: crate::models::FieldKind::Flag,
                actual: crate::models::FieldKind::Number,
            }
        ));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(FunnelInput::default()).unwrap();
        assert_eq!(json["optInRate"], 40.0);
        assert_eq!(json["hasSalesPage"], true);
        assert_eq!(json["funnelName"], "New Campaign");
    }
}
