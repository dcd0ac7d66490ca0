//! Per-kit evaluation
//!
//! Resolves a kit against the registry, applies the budget check and the
//! compatibility rules, and produces one [`EvaluationResult`] per kit. Kits
//! are independent of each other; results keep submission order.

use crate::core::budget::{check_budget, kit_totals};
use crate::core::kit::BuildKit;
use crate::core::reason::FailureReason;
use crate::core::registry::ComponentRegistry;
use crate::core::rules::check_compatibility;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub kit_id: String,
    pub valid: bool,
    pub reasons: Vec<FailureReason>,
    pub total_cost: u64,
    pub total_score: u64,
}

impl EvaluationResult {
    pub fn is_missing_components(&self) -> bool {
        matches!(
            self.reasons.first(),
            Some(FailureReason::MissingComponents(_))
        )
    }
}

/// Evaluates kits against a registry and a total budget.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    registry: &'a ComponentRegistry,
    budget: i64,
}

impl<'a> Evaluator<'a> {
    pub fn new(registry: &'a ComponentRegistry, budget: i64) -> Self {
        Self { registry, budget }
    }

    /// A kit with any unknown component id stops at the lookup: its only
    /// reason is the missing ids, and cost and score are reported as zero.
    pub fn evaluate(&self, kit: &BuildKit) -> EvaluationResult {
        let resolved = match kit.resolve(self.registry) {
            Ok(resolved) => resolved,
            Err(missing) => {
                tracing::debug!(kit = kit.id.as_str(), missing = ?missing, "Kit has missing components");
                return EvaluationResult {
                    kit_id: kit.id.clone(),
                    valid: false,
                    reasons: vec![FailureReason::MissingComponents(missing)],
                    total_cost: 0,
                    total_score: 0,
                };
            }
        };

        let totals = kit_totals(&resolved);

        let mut reasons: Vec<FailureReason> = check_budget(totals.cost, self.budget)
            .into_iter()
            .collect();
        reasons.extend(check_compatibility(&resolved));

        let result = EvaluationResult {
            kit_id: kit.id.clone(),
            valid: reasons.is_empty(),
            reasons,
            total_cost: totals.cost,
            total_score: totals.score,
        };
        crate::logging::log_kit_evaluated(
            &result.kit_id,
            result.valid,
            result.total_cost,
            result.total_score,
        );
        result
    }

    pub fn evaluate_all(&self, kits: &[BuildKit]) -> Vec<EvaluationResult> {
        kits.iter().map(|kit| self.evaluate(kit)).collect()
    }
}
