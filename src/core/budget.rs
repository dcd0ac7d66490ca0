//! Cost and score totals for a resolved kit

use crate::core::kit::ResolvedKit;
use crate::core::reason::FailureReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KitTotals {
    pub cost: u64,
    pub score: u64,
}

pub fn kit_totals(kit: &ResolvedKit<'_>) -> KitTotals {
    kit.components()
        .iter()
        .fold(KitTotals::default(), |totals, component| KitTotals {
            cost: totals.cost + u64::from(component.cost),
            score: totals.score + u64::from(component.performance_score),
        })
}

/// Exceeding the budget is strictly greater-than; spending all of it is fine.
/// A negative budget is exceeded by every kit.
pub fn check_budget(total_cost: u64, budget: i64) -> Option<FailureReason> {
    let over = match u64::try_from(budget) {
        Ok(budget) => total_cost > budget,
        Err(_) => true,
    };
    over.then_some(FailureReason::OverBudget)
}
