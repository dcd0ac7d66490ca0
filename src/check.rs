//! The `check` command: read an input file, validate every kit, print the
//! report.

use std::time::{Duration, Instant};

use crate::config::{CheckOptions, DetailMode, OutputFormat};
use crate::core::{validate_builds, ValidationOutcome};
use crate::error::Result;
use crate::input::{load_input, BuildInput};
use crate::report::{render_detailed, render_json, render_summary};

pub struct CheckCommand {
    options: CheckOptions,
}

impl CheckCommand {
    pub fn new(options: CheckOptions) -> Self {
        Self { options }
    }

    pub fn execute(&self) -> Result<()> {
        let input = load_input(&self.options)?;
        let outcome = self.validate(&input);
        print!("{}", self.render(&outcome)?);
        Ok(())
    }

    pub fn validate(&self, input: &BuildInput) -> ValidationOutcome {
        let started = Instant::now();
        let outcome = validate_builds(&input.registry, &input.kits, input.budget);
        crate::logging::log_performance("validate_builds", whole_millis(started.elapsed()));
        outcome
    }

    /// Renders the outcome in the configured output format. The `Ask`
    /// detail mode has no one to ask here, so it renders the summary only.
    pub fn render(&self, outcome: &ValidationOutcome) -> Result<String> {
        match self.options.output_format {
            OutputFormat::Json => {
                let mut json = render_json(outcome)?;
                json.push('\n');
                Ok(json)
            }
            OutputFormat::Text => {
                let mut text = render_summary(outcome);
                if self.options.detail == DetailMode::Detailed {
                    text.push('\n');
                    text.push_str(&render_detailed(outcome));
                }
                Ok(text)
            }
        }
    }
}

/// Saturates instead of truncating durations too long for a `u64`.
fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
