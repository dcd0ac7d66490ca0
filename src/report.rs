//! Report rendering
//!
//! Everything here returns a `String` so the CLI decides where it goes and
//! tests can inspect it. Colors come from `colored` and switch off with
//! `NO_COLOR` or `--no-color`.

use crate::core::budget::check_budget;
use crate::core::reason::join_reasons;
use crate::core::{EvaluationResult, ValidationOutcome};
use crate::error::Result;
use crate::input::BuildInput;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;

const PASS: &str = "✅";
const FAIL: &str = "❌";

/// Best build first, then one line per kit that did not win.
pub fn render_summary(outcome: &ValidationOutcome) -> String {
    let mut out = String::new();
    let best = &outcome.best;

    let _ = writeln!(out, "{} {}", "Maximum Score:".bold(), best.score);
    let _ = writeln!(out, "{} {}", "Best Build:".bold(), best.label().cyan().bold());

    for result in &outcome.results {
        if !result.valid {
            let _ = writeln!(
                out,
                "{} {}",
                format!("Build {} failed:", result.kit_id).red(),
                join_reasons(&result.reasons)
            );
        } else if !best.is_kit(&result.kit_id) {
            let _ = writeln!(
                out,
                "{} Score is less than {}",
                format!("Build {} passed:", result.kit_id).green(),
                best.label()
            );
        }
    }

    out
}

fn budget_line(result: &EvaluationResult, budget: i64) -> String {
    let status = match check_budget(result.total_cost, budget) {
        None => PASS,
        Some(_) => FAIL,
    };
    format!(
        "{}: {} (under {}) {}",
        result.kit_id, result.total_cost, budget, status
    )
}

fn compatibility_line(result: &EvaluationResult) -> String {
    if result.valid {
        format!("{} passes all checks {}", result.kit_id, PASS)
    } else {
        format!(
            "{} fails: {} {}",
            result.kit_id,
            join_reasons(&result.reasons),
            FAIL
        )
    }
}

fn score_line(result: &EvaluationResult, outcome: &ValidationOutcome) -> String {
    let note = if !result.valid {
        "(ignored due to incompatibility)".dimmed().to_string()
    } else if outcome.best.is_kit(&result.kit_id) {
        format!("{PASS} (best build)")
    } else {
        String::new()
    };

    format!("{}: {} {}", result.kit_id, result.total_score, note)
        .trim_end()
        .to_string()
}

/// Budget, compatibility and score tables followed by the winner line.
pub fn render_detailed(outcome: &ValidationOutcome) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Detailed PC Build Validator Report".blue().bold());
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "Budget Check:".bold());
    for result in &outcome.results {
        let _ = writeln!(out, "{}", budget_line(result, outcome.budget));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Compatibility Check:".bold());
    for result in &outcome.results {
        let _ = writeln!(out, "{}", compatibility_line(result));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Performance Score:".bold());
    for result in &outcome.results {
        let _ = writeln!(out, "{}", score_line(result, outcome));
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        format!(
            "Winner: {} with {} points.",
            outcome.best.label(),
            outcome.best.score
        )
        .green()
        .bold()
    );

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    budget: i64,
    best_kit: &'a str,
    best_score: u64,
    results: &'a [EvaluationResult],
}

pub fn render_json(outcome: &ValidationOutcome) -> Result<String> {
    let report = JsonReport {
        budget: outcome.budget,
        best_kit: outcome.best.label(),
        best_score: outcome.best.score,
        results: &outcome.results,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// The echo of collected input shown before asking for confirmation.
pub fn render_input_summary(input: &BuildInput) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "--- Current Inventory & Build Kits ---".blue().bold());
    let _ = writeln!(out, "{:<25} {}", "Field", "Value");
    let _ = writeln!(out, "{:<25} {}", "Total Budget", input.budget);
    let _ = writeln!(out, "{:<25} {}", "Number of Components", input.component_count);

    let _ = writeln!(out);
    let _ = writeln!(out, "Components:");
    for component in input.registry.iter() {
        let _ = writeln!(
            out,
            "{:<10} {:<12} Score:{:<5} Cost:{:<5} Spec1:{:<8} Spec2:{}",
            component.id,
            component.kind().as_str(),
            component.performance_score,
            component.cost,
            component.raw_specs.0,
            component.raw_specs.1
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Number of Build Kits: {}", input.kits.len());
    for kit in &input.kits {
        let _ = writeln!(
            out,
            "Kit ID: {}, CPU: {}, Motherboard: {}, GPU: {}, RAM: {}, PSU: {}",
            kit.id, kit.cpu, kit.motherboard, kit.gpu, kit.ram, kit.psu
        );
    }
    let _ = writeln!(out, "{}", "--- End of Input ---".blue().bold());

    out
}

/// Sample text input printed by the `template` command.
pub fn text_template() -> &'static str {
    "\
# Total budget
1000
# Number of components, then one per line:
# component_id type performance_score cost spec1 spec2
#   CPU:         spec1 = socket,   spec2 = TDP (W)
#   Motherboard: spec1 = socket,   spec2 = RAM type
#   GPU:         spec1 = label,    spec2 = TDP (W)
#   RAM:         spec1 = RAM type, spec2 = label
#   PSU:         spec1 = wattage,  spec2 = label
5
C1 CPU 50 200 AM4 65
M1 Motherboard 10 100 AM4 DDR4
G1 GPU 80 400 8GB 150
R1 RAM 20 80 DDR4 16GB
P1 PSU 5 90 300 Bronze
# Number of build kits, then one per line:
# kit_id cpu_id mobo_id gpu_id ram_id psu_id
1
K1 C1 M1 G1 R1 P1
"
}

/// Sample JSON input printed by `template --json`.
pub fn json_template() -> Result<String> {
    let template = serde_json::json!({
        "budget": 1000,
        "components": [
            {"id": "C1", "type": "CPU", "score": 50, "cost": 200, "spec1": "AM4", "spec2": 65},
            {"id": "M1", "type": "Motherboard", "score": 10, "cost": 100, "spec1": "AM4", "spec2": "DDR4"},
            {"id": "G1", "type": "GPU", "score": 80, "cost": 400, "spec1": "8GB", "spec2": 150},
            {"id": "R1", "type": "RAM", "score": 20, "cost": 80, "spec1": "DDR4", "spec2": "16GB"},
            {"id": "P1", "type": "PSU", "score": 5, "cost": 90, "spec1": 300, "spec2": "Bronze"}
        ],
        "kits": [
            {"id": "K1", "cpu": "C1", "motherboard": "M1", "gpu": "G1", "ram": "R1", "psu": "P1"}
        ]
    });
    Ok(serde_json::to_string_pretty(&template)?)
}
