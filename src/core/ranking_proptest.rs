//! Property-based tests for best-build selection

#[cfg(test)]
mod tests {
    use crate::core::evaluate::EvaluationResult;
    use crate::core::ranking::select_best;
    use proptest::prelude::*;

    prop_compose! {
        fn results()(
            entries in prop::collection::vec((prop::bool::ANY, 0u64..50), 0..20)
        ) -> Vec<EvaluationResult> {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (valid, score))| EvaluationResult {
                    kit_id: format!("K{i}"),
                    valid,
                    reasons: Vec::new(),
                    total_cost: 0,
                    total_score: score,
                })
                .collect()
        }
    }

    proptest! {
        #[test]
        fn test_best_is_first_valid_kit_with_top_score(results in results()) {
            let best = select_best(&results);

            let top = results
                .iter()
                .filter(|r| r.valid)
                .map(|r| r.total_score)
                .max()
                .unwrap_or(0);

            if top == 0 {
                prop_assert!(best.is_none());
                prop_assert_eq!(best.score, 0);
            } else {
                let first = results
                    .iter()
                    .find(|r| r.valid && r.total_score == top)
                    .map(|r| r.kit_id.as_str());
                prop_assert_eq!(best.kit_id.as_deref(), first);
                prop_assert_eq!(best.score, top);
            }
        }

        #[test]
        fn test_invalid_results_never_selected(results in results()) {
            let best = select_best(&results);
            if let Some(kit_id) = &best.kit_id {
                let winner = results.iter().find(|r| &r.kit_id == kit_id);
                prop_assert!(winner.is_some_and(|r| r.valid));
            }
        }
    }
}
