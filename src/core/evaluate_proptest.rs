//! Property-based tests for kit evaluation
//!
//! Generates five-part kits with random sockets, memory types, TDPs and
//! prices and checks the evaluator against an independent restatement of
//! the rules.

#[cfg(test)]
mod tests {
    use crate::core::component::Component;
    use crate::core::evaluate::Evaluator;
    use crate::core::kit::BuildKit;
    use crate::core::reason::FailureReason;
    use crate::core::registry::ComponentRegistry;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    struct Parts {
        cpu_socket: String,
        cpu_tdp: u32,
        board_socket: String,
        board_ram: String,
        gpu_tdp: u32,
        ram_type: String,
        wattage: u32,
        scores: [u32; 5],
        costs: [u32; 5],
    }

    impl Parts {
        fn registry(&self) -> ComponentRegistry {
            let s = |i: usize| self.scores[i].to_string();
            let c = |i: usize| self.costs[i].to_string();
            vec![
                Component::from_fields(
                    "C",
                    "CPU",
                    &s(0),
                    &c(0),
                    &self.cpu_socket,
                    &self.cpu_tdp.to_string(),
                ),
                Component::from_fields(
                    "M",
                    "Motherboard",
                    &s(1),
                    &c(1),
                    &self.board_socket,
                    &self.board_ram,
                ),
                Component::from_fields("G", "GPU", &s(2), &c(2), "vram", &self.gpu_tdp.to_string()),
                Component::from_fields("R", "RAM", &s(3), &c(3), &self.ram_type, "16GB"),
                Component::from_fields("P", "PSU", &s(4), &c(4), &self.wattage.to_string(), "80+"),
            ]
            .into_iter()
            .map(|component| component.unwrap())
            .collect()
        }

        fn total_cost(&self) -> u64 {
            self.costs.iter().map(|&c| u64::from(c)).sum()
        }

        fn total_score(&self) -> u64 {
            self.scores.iter().map(|&s| u64::from(s)).sum()
        }

        fn compatible(&self) -> bool {
            self.cpu_socket == self.board_socket
                && self.ram_type == self.board_ram
                && u64::from(self.wattage) >= u64::from(self.cpu_tdp) + u64::from(self.gpu_tdp) + 50
        }
    }

    fn kit() -> BuildKit {
        BuildKit::new("K", "C", "M", "G", "R", "P")
    }

    prop_compose! {
        fn any_parts()(
            cpu_socket in prop::sample::select(vec!["AM4", "AM5", "LGA1700"]),
            board_socket in prop::sample::select(vec!["AM4", "AM5", "LGA1700"]),
            board_ram in prop::sample::select(vec!["DDR4", "DDR5"]),
            ram_type in prop::sample::select(vec!["DDR4", "DDR5"]),
            cpu_tdp in 0u32..300,
            gpu_tdp in 0u32..450,
            wattage in 0u32..1200,
            scores in prop::array::uniform5(0u32..1000),
            costs in prop::array::uniform5(0u32..2000),
        ) -> Parts {
            Parts {
                cpu_socket: cpu_socket.to_string(),
                cpu_tdp,
                board_socket: board_socket.to_string(),
                board_ram: board_ram.to_string(),
                gpu_tdp,
                ram_type: ram_type.to_string(),
                wattage,
                scores,
                costs,
            }
        }
    }

    prop_compose! {
        fn compatible_parts()(
            socket in prop::sample::select(vec!["AM4", "AM5", "LGA1700"]),
            ram in prop::sample::select(vec!["DDR4", "DDR5"]),
            cpu_tdp in 0u32..300,
            gpu_tdp in 0u32..450,
            headroom in 0u32..500,
            scores in prop::array::uniform5(0u32..1000),
            costs in prop::array::uniform5(0u32..2000),
        ) -> Parts {
            Parts {
                cpu_socket: socket.to_string(),
                cpu_tdp,
                board_socket: socket.to_string(),
                board_ram: ram.to_string(),
                gpu_tdp,
                ram_type: ram.to_string(),
                wattage: cpu_tdp + gpu_tdp + 50 + headroom,
                scores,
                costs,
            }
        }
    }

    proptest! {
        #[test]
        fn test_compatible_kit_within_budget_is_valid(
            parts in compatible_parts(),
            slack in 0u64..1000,
        ) {
            let registry = parts.registry();
            let budget = i64::try_from(parts.total_cost() + slack).unwrap();
            let result = Evaluator::new(&registry, budget).evaluate(&kit());

            prop_assert!(result.valid);
            prop_assert!(result.reasons.is_empty());
            prop_assert_eq!(result.total_cost, parts.total_cost());
            prop_assert_eq!(result.total_score, parts.total_score());
        }

        #[test]
        fn test_validity_matches_rules(parts in any_parts(), budget in -1_000i64..10_000) {
            let registry = parts.registry();
            let result = Evaluator::new(&registry, budget).evaluate(&kit());

            let affordable = i128::from(parts.total_cost()) <= i128::from(budget);
            prop_assert_eq!(result.valid, parts.compatible() && affordable);
            prop_assert_eq!(result.valid, result.reasons.is_empty());
            prop_assert_eq!(
                result.reasons.contains(&FailureReason::OverBudget),
                !affordable
            );
        }

        #[test]
        fn test_missing_component_has_single_reason(
            parts in any_parts(),
            slot in 0usize..5,
            budget in -1_000i64..10_000,
        ) {
            let registry = parts.registry();
            let mut kit = kit();
            match slot {
                0 => kit.cpu = "absent".to_string(),
                1 => kit.motherboard = "absent".to_string(),
                2 => kit.gpu = "absent".to_string(),
                3 => kit.ram = "absent".to_string(),
                _ => kit.psu = "absent".to_string(),
            }
            let result = Evaluator::new(&registry, budget).evaluate(&kit);

            prop_assert!(!result.valid);
            prop_assert_eq!(
                result.reasons,
                vec![FailureReason::MissingComponents(vec!["absent".to_string()])]
            );
            prop_assert_eq!(result.total_cost, 0);
            prop_assert_eq!(result.total_score, 0);
        }

        #[test]
        fn test_evaluation_is_idempotent(parts in any_parts(), budget in -1_000i64..10_000) {
            let registry = parts.registry();
            let evaluator = Evaluator::new(&registry, budget);
            prop_assert_eq!(evaluator.evaluate(&kit()), evaluator.evaluate(&kit()));
        }
    }
}
