use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FunnelError, FunnelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Number,
    Flag,
    Text,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Number => write!(f, "number"),
            FieldKind::Flag => write!(f, "flag"),
            FieldKind::Text => write!(f, "text"),
        }
    }
}

/// Every editable field of a [`FunnelInput`](crate::models::FunnelInput).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FunnelField {
    FunnelName,
    Budget,
    Cpc,
    HasLeads,
    OptInRate,
    HasSalesPage,
    ClickThroughRate,
    SalesConvRate,
    ProductPrice,
    HasUpsell,
    UpsellRate,
    UpsellPrice,
    FulfillmentRate,
    HasMaximizer,
    MaximizerRate,
    MaximizerPrice,
}

impl FunnelField {
    pub const ALL: [FunnelField; 16] = [
        FunnelField::FunnelName,
        FunnelField::Budget,
        FunnelField::Cpc,
        FunnelField::HasLeads,
        FunnelField::OptInRate,
        FunnelField::HasSalesPage,
        FunnelField::ClickThroughRate,
        FunnelField::SalesConvRate,
        FunnelField::ProductPrice,
        FunnelField::HasUpsell,
        FunnelField::UpsellRate,
        FunnelField::UpsellPrice,
        FunnelField::FulfillmentRate,
        FunnelField::HasMaximizer,
        FunnelField::MaximizerRate,
        FunnelField::MaximizerPrice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FunnelField::FunnelName => "funnelName",
            FunnelField::Budget => "budget",
            FunnelField::Cpc => "cpc",
            FunnelField::HasLeads => "hasLeads",
            FunnelField::OptInRate => "optInRate",
            FunnelField::HasSalesPage => "hasSalesPage",
            FunnelField::ClickThroughRate => "clickThroughRate",
            FunnelField::SalesConvRate => "salesConvRate",
            FunnelField::ProductPrice => "productPrice",
            FunnelField::HasUpsell => "hasUpsell",
            FunnelField::UpsellRate => "upsellRate",
            FunnelField::UpsellPrice => "upsellPrice",
            FunnelField::FulfillmentRate => "fulfillmentRate",
            FunnelField::HasMaximizer => "hasMaximizer",
            FunnelField::MaximizerRate => "maximizerRate",
            FunnelField::MaximizerPrice => "maximizerPrice",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FunnelField::FunnelName => FieldKind::Text,
            FunnelField::HasLeads
            | FunnelField::HasSalesPage
            | FunnelField::HasUpsell
            | FunnelField::HasMaximizer => FieldKind::Flag,
            _ => FieldKind::Number,
        }
    }

    /// Accepts both the camelCase key and its snake_case spelling.
    pub fn from_str_loose(s: &str) -> Option<FunnelField> {
        let wanted: String = s.trim().chars().filter(|c| *c != '_').collect();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(&wanted))
    }
}

impl fmt::Display for FunnelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Number(_) => FieldKind::Number,
            FieldValue::Flag(_) => FieldKind::Flag,
            FieldValue::Text(_) => FieldKind::Text,
        }
    }

    /// Parses `raw` as whatever kind of value `field` holds.
    pub fn parse_for(field: FunnelField, raw: &str) -> FunnelResult<FieldValue> {
        let invalid = || FunnelError::InvalidValue {
            field: field.as_str(),
            value: raw.to_string(),
        };

        match field.kind() {
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Flag => match raw.trim().to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(FieldValue::Flag(true)),
                "false" | "no" | "off" | "0" => Ok(FieldValue::Flag(false)),
                _ => Err(invalid()),
            },
            FieldKind::Number => {
                let n: f64 = raw.trim().parse().map_err(|_| invalid())?;
                if !n.is_finite() {
                    return Err(invalid());
                }
                Ok(FieldValue::Number(n))
            }
        }
    }
}

/// A single `key=value` change requested by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelEdit {
    pub field: FunnelField,
    pub value: FieldValue,
}

impl FunnelEdit {
    pub fn new(field: FunnelField, value: FieldValue) -> Self {
        Self { field, value }
    }

    pub fn parse(s: &str) -> FunnelResult<FunnelEdit> {
        let (key, raw) = s
            .split_once('=')
            .ok_or_else(|| FunnelError::MalformedEdit(s.to_string()))?;
        let field = FunnelField::from_str_loose(key)
            .ok_or_else(|| FunnelError::UnknownField(key.trim().to_string()))?;
        let value = FieldValue::parse_for(field, raw)?;
        Ok(FunnelEdit::new(field, value))
    }
}
