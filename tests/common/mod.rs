use funnel_sim::models::{FunnelEdit, FunnelInput};

/// Build an input by applying `key=value` edits on top of the default campaign.
pub fn input_with(edits: &[&str]) -> FunnelInput {
    edits.iter().fold(FunnelInput::default(), |input, raw| {
        let edit = FunnelEdit::parse(raw).unwrap();
        input.with_field(edit.field, edit.value).unwrap()
    })
}

/// A handful of varied campaigns for property-style checks.
pub fn sample_inputs() -> Vec<FunnelInput> {
    vec![
        FunnelInput::default(),
        input_with(&["budget=0"]),
        input_with(&["cpc=0", "budget=25"]),
        input_with(&["hasLeads=false", "hasSalesPage=false"]),
        input_with(&["hasUpsell=false", "hasMaximizer=false"]),
        input_with(&["optInRate=120", "clickThroughRate=0.5", "salesConvRate=33.3"]),
        input_with(&["budget=1234.56", "cpc=0.37", "productPrice=49", "upsellPrice=19.99"]),
        input_with(&["budget=750", "maximizerRate=80", "maximizerPrice=29.5"]),
    ]
}
