//! Custom assertion helpers for evaluation results

use crate::core::{EvaluationResult, FailureReason};

/// Asserts that a kit passed every check.
pub fn assert_valid(result: &EvaluationResult) {
    assert!(
        result.valid,
        "Expected kit {} to be valid, but it failed: {:?}",
        result.kit_id, result.reasons
    );
    assert!(
        result.reasons.is_empty(),
        "Valid kit {} should have no reasons, got: {:?}",
        result.kit_id,
        result.reasons
    );
}

/// Asserts that a kit failed with exactly the given reasons, in order.
pub fn assert_failed_with(result: &EvaluationResult, expected: &[FailureReason]) {
    assert!(
        !result.valid,
        "Expected kit {} to be invalid, but it passed",
        result.kit_id
    );
    assert_eq!(
        result.reasons, expected,
        "Kit {} failed for different reasons",
        result.kit_id
    );
}

/// Asserts that a rendered report contains every expected line fragment.
pub fn assert_report_contains(report: &str, expected: &[&str]) {
    for fragment in expected {
        assert!(
            report.contains(fragment),
            "Expected report to contain '{fragment}', but got:\n{report}"
        );
    }
}
