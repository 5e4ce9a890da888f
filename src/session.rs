use tracing::{debug, info};

use crate::core::compute_metrics;
use crate::error::FunnelResult;
use crate::models::{FieldValue, FunnelEdit, FunnelField, FunnelInput, FunnelMetrics};

/// Holds the input record a user is editing and the metrics derived from it.
///
/// Every edit swaps in a whole new input record and recomputes metrics from
/// scratch. Nothing from the previous computation is reused.
#[derive(Debug, Clone)]
pub struct FunnelSession {
    baseline: FunnelInput,
    input: FunnelInput,
    metrics: FunnelMetrics,
    edits_applied: usize,
}

impl FunnelSession {
    pub fn new(baseline: FunnelInput) -> Self {
        let metrics = compute_metrics(&baseline);
        Self {
            input: baseline.clone(),
            baseline,
            metrics,
            edits_applied: 0,
        }
    }

    pub fn input(&self) -> &FunnelInput {
        &self.input
    }

    pub fn metrics(&self) -> &FunnelMetrics {
        &self.metrics
    }

    pub fn baseline(&self) -> &FunnelInput {
        &self.baseline
    }

    /// Number of edits applied since creation or the last reset.
    pub fn edits_applied(&self) -> usize {
        self.edits_applied
    }

    /// Replaces one field and recomputes. On error the session is unchanged.
    pub fn apply(&mut self, field: FunnelField, value: FieldValue) -> FunnelResult<&FunnelMetrics> {
        let next = self.input.with_field(field, value)?;
        self.input = next;
        self.metrics = compute_metrics(&self.input);
        self.edits_applied += 1;
        debug!(
            "Edit {} applied: {} | visitors {} | orders {} | profit ${:.2}",
            self.edits_applied, field, self.metrics.visitors, self.metrics.orders, self.metrics.profit
        );
        Ok(&self.metrics)
    }

    pub fn apply_edit(&mut self, edit: &FunnelEdit) -> FunnelResult<&FunnelMetrics> {
        self.apply(edit.field, edit.value.clone())
    }

    /// Restores the baseline input and its metrics.
    pub fn reset(&mut self) -> &FunnelMetrics {
        info!(
            "Resetting '{}' after {} edit(s)",
            self.input.funnel_name, self.edits_applied
        );
        self.input = self.baseline.clone();
        self.metrics = compute_metrics(&self.input);
        self.edits_applied = 0;
        &self.metrics
    }
}

impl Default for FunnelSession {
    fn default() -> Self {
        Self::new(FunnelInput::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::scenario_a;

    #[test]
    fn new_session_computes_immediately() {
        let session = FunnelSession::new(scenario_a());
        assert_eq!(session.metrics().visitors, 2000);
        assert_eq!(session.edits_applied(), 0);
    }

    #[test]
    fn edit_recomputes_metrics() {
        let mut session = FunnelSession::default();
        let m = session
            .apply(FunnelField::Budget, FieldValue::Number(10000.0))
            .unwrap();
        assert_eq!(m.visitors, 4000);
        assert_eq!(session.input().budget, 10000.0);
        assert_eq!(session.edits_applied(), 1);
    }

    #[test]
    fn toggling_stage_hides_it() {
        let mut session = FunnelSession::default();
        session
            .apply(FunnelField::HasUpsell, FieldValue::Flag(false))
            .unwrap();
        assert!(!session.metrics().show_upsell);
        assert_eq!(session.metrics().upsells, 0);
        assert_eq!(session.metrics().upsell_revenue, 0.0);
    }

    #[test]
    fn failed_edit_leaves_state_untouched() {
        let mut session = FunnelSession::default();
        let before_input = session.input().clone();
        let before_metrics = session.metrics().clone();
        assert!(session
            .apply(FunnelField::Cpc, FieldValue::Flag(true))
            .is_err());
        assert_eq!(session.input(), &before_input);
        assert_eq!(session.metrics(), &before_metrics);
        assert_eq!(session.edits_applied(), 0);
    }

    #[test]
    fn name_edit_does_not_move_metrics() {
        let mut session = FunnelSession::default();
        let before = session.metrics().clone();
        session
            .apply(FunnelField::FunnelName, FieldValue::Text("Spring Launch".to_string()))
            .unwrap();
        assert_eq!(session.metrics(), &before);
        assert_eq!(session.input().funnel_name, "Spring Launch");
    }

    #[test]
    fn reset_restores_baseline() {
        let mut session = FunnelSession::new(scenario_a());
        let baseline_metrics = session.metrics().clone();
        for edit in ["budget=1", "cpc=0", "hasLeads=false", "upsell_price=5", "funnelName=x"] {
            session.apply_edit(&FunnelEdit::parse(edit).unwrap()).unwrap();
        }
        assert_ne!(session.input(), session.baseline());

        let m = session.reset().clone();
        assert_eq!(session.input(), &scenario_a());
        assert_eq!(m, baseline_metrics);
        assert_eq!(session.edits_applied(), 0);
    }
}
