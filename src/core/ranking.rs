//! Picks the winning kit from a list of evaluation results

use crate::core::evaluate::EvaluationResult;
use serde::Serialize;

/// Label shown for the best kit when no valid kit scored above zero.
pub const NO_BEST_KIT: &str = "NONE";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BestBuild {
    pub kit_id: Option<String>,
    pub score: u64,
}

impl BestBuild {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.kit_id.is_none()
    }

    /// The winning kit id, or [`NO_BEST_KIT`].
    pub fn label(&self) -> &str {
        self.kit_id.as_deref().unwrap_or(NO_BEST_KIT)
    }

    pub fn is_kit(&self, kit_id: &str) -> bool {
        self.kit_id.as_deref() == Some(kit_id)
    }
}

impl Serialize for BestBuild {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("BestBuild", 2)?;
        state.serialize_field("kit_id", self.label())?;
        state.serialize_field("score", &self.score)?;
        state.end()
    }
}

/// Single forward pass over results in submission order.
///
/// Only valid kits compete. The running maximum starts at zero and moves
/// only on a strictly greater score, so the earliest kit reaching the top
/// score wins a tie and a valid kit scoring zero never wins.
pub fn select_best(results: &[EvaluationResult]) -> BestBuild {
    results
        .iter()
        .filter(|result| result.valid)
        .fold(BestBuild::none(), |best, result| {
            if result.total_score > best.score {
                BestBuild {
                    kit_id: Some(result.kit_id.clone()),
                    score: result.total_score,
                }
            } else {
                best
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(kit_id: &str, valid: bool, score: u64) -> EvaluationResult {
        EvaluationResult {
            kit_id: kit_id.to_string(),
            valid,
            reasons: Vec::new(),
            total_cost: 0,
            total_score: score,
        }
    }

    #[test]
    fn test_empty_results() {
        let best = select_best(&[]);
        assert!(best.is_none());
        assert_eq!(best.label(), NO_BEST_KIT);
        assert_eq!(best.score, 0);
    }

    #[test]
    fn test_first_wins_tie() {
        let best = select_best(&[result("A", true, 100), result("B", true, 100)]);
        assert_eq!(best.label(), "A");
        assert_eq!(best.score, 100);
    }

    #[test]
    fn test_invalid_kits_ignored() {
        let best = select_best(&[
            result("A", false, 500),
            result("B", true, 120),
            result("C", true, 90),
        ]);
        assert_eq!(
            best,
            BestBuild {
                kit_id: Some("B".to_string()),
                score: 120
            }
        );
    }

    #[test]
    fn test_later_higher_score_displaces() {
        let best = select_best(&[result("A", true, 100), result("B", true, 101)]);
        assert_eq!(best.label(), "B");
    }

    #[test]
    fn test_zero_score_valid_kit_never_wins() {
        let best = select_best(&[result("A", true, 0)]);
        assert_eq!(best, BestBuild::none());
    }

    #[test]
    fn test_kit_named_like_sentinel_is_not_confused() {
        let best = BestBuild::none();
        assert!(!best.is_kit("NONE"));

        let best = select_best(&[result("NONE", true, 10)]);
        assert!(!best.is_none());
        assert!(best.is_kit("NONE"));
    }

    #[test]
    fn test_serializes_label() {
        let json = serde_json::to_value(BestBuild::none()).unwrap();
        assert_eq!(json["kit_id"], "NONE");
        assert_eq!(json["score"], 0);
    }
}
