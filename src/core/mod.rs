//! Build validation and ranking engine
//!
//! Pure functions over explicit values: a component registry, a list of
//! kits and a budget go in, per-kit results and the best build come out.
//! Nothing in here reads input or prints.

pub mod budget;
pub mod component;
pub mod evaluate;
pub mod kit;
pub mod ranking;
pub mod reason;
pub mod registry;
pub mod rules;

#[cfg(test)]
mod evaluate_proptest;

#[cfg(test)]
mod ranking_proptest;

pub use component::{Component, ComponentKind, ComponentSpec};
pub use evaluate::{EvaluationResult, Evaluator};
pub use kit::{BuildKit, ResolvedKit};
pub use ranking::{select_best, BestBuild, NO_BEST_KIT};
pub use reason::FailureReason;
pub use registry::ComponentRegistry;

use serde::Serialize;

/// Everything one validation pass produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub budget: i64,
    pub best: BestBuild,
    pub results: Vec<EvaluationResult>,
}

impl ValidationOutcome {
    pub fn valid_count(&self) -> usize {
        self.results.iter().filter(|r| r.valid).count()
    }
}

/// Evaluates every kit, then ranks the valid ones.
pub fn validate_builds(
    registry: &ComponentRegistry,
    kits: &[BuildKit],
    budget: i64,
) -> ValidationOutcome {
    let results = Evaluator::new(registry, budget).evaluate_all(kits);
    let best = select_best(&results);
    crate::logging::log_best_build(best.label(), best.score);

    ValidationOutcome {
        budget,
        best,
        results,
    }
}
