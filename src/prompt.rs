//! The `interactive` command: collect input through prompts, confirm it,
//! validate, and offer the detailed report.

use colored::Colorize;
use dialoguer::{Confirm, Input};
use std::io::Write;

use crate::config::DetailMode;
use crate::core::{validate_builds, ComponentRegistry, ValidationOutcome};
use crate::error::Result;
use crate::input::{
    parse_budget, parse_component_line, parse_count, parse_kit_line, BuildInput,
    COMPONENT_LINE_FORMAT, KIT_LINE_FORMAT,
};
use crate::report::{render_detailed, render_input_summary, render_summary};

/// Where the interactive session gets its answers from.
pub trait Prompter {
    fn text(&mut self, prompt: &str) -> Result<String>;

    /// A Y/N question that defaults to "no".
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Prompts on the terminal through dialoguer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str) -> Result<String> {
        Ok(Input::<String>::new().with_prompt(prompt).interact_text()?)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}

pub struct InteractiveCommand<P = TerminalPrompter> {
    detail: DetailMode,
    prompter: P,
}

impl InteractiveCommand {
    pub fn new(detail: DetailMode) -> Self {
        Self::with_prompter(detail, TerminalPrompter)
    }
}

impl<P: Prompter> InteractiveCommand<P> {
    pub fn with_prompter(detail: DetailMode, prompter: P) -> Self {
        Self { detail, prompter }
    }

    pub fn execute(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        self.run(&mut stdout.lock())?;
        Ok(())
    }

    /// Runs one session. Prompts go through the prompter; the input echo and
    /// the reports are written to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<ValidationOutcome> {
        writeln!(
            out,
            "{}",
            "Run `pcbv template` to see the input format and syntax before entering data.".dimmed()
        )?;
        writeln!(out)?;

        let input = loop {
            let input = self.collect_input()?;
            writeln!(out)?;
            write!(out, "{}", render_input_summary(&input))?;
            writeln!(out)?;

            if self
                .prompter
                .confirm("Do you want to proceed with this input?")?
            {
                break input;
            }
            writeln!(out, "{}", "Please re-enter the input.".yellow())?;
            writeln!(out)?;
        };

        let outcome = validate_builds(&input.registry, &input.kits, input.budget);
        writeln!(out)?;
        write!(out, "{}", render_summary(&outcome))?;

        let show_detailed = match self.detail {
            DetailMode::Detailed => true,
            DetailMode::SummaryOnly => false,
            DetailMode::Ask => {
                writeln!(out)?;
                self.prompter
                    .confirm("Do you want to proceed with detailed report?")?
            }
        };

        if show_detailed {
            writeln!(out)?;
            write!(out, "{}", render_detailed(&outcome))?;
        } else {
            writeln!(out, "{}", "Exiting program. Goodbye!".dimmed())?;
        }

        Ok(outcome)
    }

    /// Prompts for budget, components and kits in the same order as the
    /// text input format. Entries are numbered from 1 across the whole
    /// session, so an error names the same line the entry would occupy in a
    /// text input file. A malformed entry aborts the session.
    fn collect_input(&mut self) -> Result<BuildInput> {
        let mut entry = 0;

        let (line, answer) = self.next_entry(&mut entry, "Enter total budget")?;
        let budget = parse_budget(&answer, line)?;

        let (line, answer) = self.next_entry(&mut entry, "Enter number of components")?;
        let component_count =
            parse_count(&answer, line, "number of components (non-negative integer)")?;

        let mut registry = ComponentRegistry::new();
        let mut entered = 0;
        let component_prompt = format!("Enter component ({COMPONENT_LINE_FORMAT})");
        for _ in 0..component_count {
            let (line, answer) = self.next_entry(&mut entry, &component_prompt)?;
            registry.register(parse_component_line(&answer, line)?);
            entered += 1;
        }

        let (line, answer) = self.next_entry(&mut entry, "Enter number of build kits")?;
        let kit_count = parse_count(&answer, line, "number of build kits (non-negative integer)")?;

        let mut kits = Vec::new();
        let kit_prompt = format!("Enter build kit ({KIT_LINE_FORMAT})");
        for _ in 0..kit_count {
            let (line, answer) = self.next_entry(&mut entry, &kit_prompt)?;
            kits.push(parse_kit_line(&answer, line)?);
        }

        Ok(BuildInput {
            budget,
            component_count: entered,
            registry,
            kits,
        })
    }

    fn next_entry(&mut self, entry: &mut usize, prompt: &str) -> Result<(usize, String)> {
        *entry += 1;
        Ok((*entry, self.prompter.text(prompt)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidatorError;
    use crate::test_utils::mocks::ScriptedPrompter;

    const REFERENCE_ENTRIES: [&str; 9] = [
        "1000",
        "5",
        "C1 CPU 50 200 AM4 65",
        "M1 Motherboard 10 100 AM4 DDR4",
        "G1 GPU 80 400 8GB 150",
        "R1 RAM 20 80 DDR4 16GB",
        "P1 PSU 5 90 300 Bronze",
        "1",
        "K1 C1 M1 G1 R1 P1",
    ];

    fn session(
        detail: DetailMode,
        prompter: ScriptedPrompter,
    ) -> (InteractiveCommand<ScriptedPrompter>, Result<ValidationOutcome>, String) {
        colored::control::set_override(false);
        let mut command = InteractiveCommand::with_prompter(detail, prompter);
        let mut out = Vec::new();
        let result = command.run(&mut out);
        (command, result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_summary_only_never_asks_for_details() {
        let prompter = ScriptedPrompter::new()
            .with_answers(REFERENCE_ENTRIES)
            .with_confirmations(&[true]);
        let (command, result, out) = session(DetailMode::SummaryOnly, prompter);

        let outcome = result.unwrap();
        assert_eq!(outcome.best.label(), "K1");
        assert_eq!(
            command.prompter.questions(),
            ["Do you want to proceed with this input?"]
        );
        assert!(out.contains("Kit ID: K1, CPU: C1, Motherboard: M1, GPU: G1, RAM: R1, PSU: P1"));
        assert!(out.contains("Best Build: K1"));
        assert!(out.contains("Exiting program. Goodbye!"));
        assert!(!out.contains("Budget Check:"));
    }

    #[test]
    fn test_detailed_mode_skips_the_question() {
        let prompter = ScriptedPrompter::new()
            .with_answers(REFERENCE_ENTRIES)
            .with_confirmations(&[true]);
        let (command, result, out) = session(DetailMode::Detailed, prompter);

        assert!(result.is_ok());
        assert_eq!(command.prompter.questions().len(), 1);
        assert!(command.prompter.is_exhausted());
        assert!(out.contains("Winner: K1 with 165 points."));
        assert!(!out.contains("Goodbye"));
    }

    #[test]
    fn test_ask_mode_yes_shows_details() {
        let prompter = ScriptedPrompter::new()
            .with_answers(REFERENCE_ENTRIES)
            .with_confirmations(&[true, true]);
        let (command, result, out) = session(DetailMode::Ask, prompter);

        assert!(result.is_ok());
        assert_eq!(
            command.prompter.questions(),
            [
                "Do you want to proceed with this input?",
                "Do you want to proceed with detailed report?"
            ]
        );
        assert!(out.contains("Detailed PC Build Validator Report"));
    }

    #[test]
    fn test_ask_mode_no_says_goodbye() {
        let prompter = ScriptedPrompter::new()
            .with_answers(REFERENCE_ENTRIES)
            .with_confirmations(&[true, false]);
        let (_, result, out) = session(DetailMode::Ask, prompter);

        assert!(result.is_ok());
        assert!(out.contains("Exiting program. Goodbye!"));
        assert!(!out.contains("Detailed PC Build Validator Report"));
    }

    #[test]
    fn test_reentry_replaces_rejected_input() {
        let first = ["500", "1", "C9 CPU 1 1 AM5 10", "1", "K9 C9 C9 C9 C9 C9"];
        let prompter = ScriptedPrompter::new()
            .with_answers(first)
            .with_answers(REFERENCE_ENTRIES)
            .with_confirmations(&[false, true]);
        let (command, result, out) = session(DetailMode::SummaryOnly, prompter);

        let outcome = result.unwrap();
        assert_eq!(outcome.budget, 1000);
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].kit_id, "K1");
        assert_eq!(outcome.best.label(), "K1");
        assert!(command.prompter.is_exhausted());
        assert!(out.contains("Please re-enter the input."));
        assert!(out.contains("Kit ID: K9"));
        assert!(!out.contains("Build K9"));
    }

    #[test]
    fn test_negative_budget_fails_every_kit() {
        let mut entries = REFERENCE_ENTRIES;
        entries[0] = "-100";
        let prompter = ScriptedPrompter::new()
            .with_answers(entries)
            .with_confirmations(&[true]);
        let (_, result, out) = session(DetailMode::SummaryOnly, prompter);

        let outcome = result.unwrap();
        assert!(outcome.best.is_none());
        assert!(out.contains("Best Build: NONE"));
        assert!(out.contains("Build K1 failed: Over budget"));
    }

    #[test]
    fn test_malformed_kit_names_its_entry_number() {
        let mut entries = REFERENCE_ENTRIES;
        entries[8] = "K1 C1 M1";
        let prompter = ScriptedPrompter::new().with_answers(entries);
        let (_, result, _) = session(DetailMode::SummaryOnly, prompter);

        assert!(matches!(
            result.unwrap_err(),
            ValidatorError::MalformedLine { line: 9, .. }
        ));
    }

    #[test]
    fn test_malformed_component_names_its_entry_number() {
        let mut entries = REFERENCE_ENTRIES;
        entries[3] = "M1 Motherboard 10";
        let prompter = ScriptedPrompter::new().with_answers(entries);
        let (_, result, _) = session(DetailMode::SummaryOnly, prompter);

        assert!(matches!(
            result.unwrap_err(),
            ValidatorError::MalformedLine { line: 4, .. }
        ));
    }

    #[test]
    fn test_huge_kit_count_reads_entries_lazily() {
        let prompter = ScriptedPrompter::new().with_answers(["1000", "0", "10000000000000"]);
        let (command, result, _) = session(DetailMode::SummaryOnly, prompter);

        assert!(matches!(
            result.unwrap_err(),
            ValidatorError::UnexpectedEndOfInput { .. }
        ));
        assert_eq!(command.prompter.asked().len(), 4);
    }
}
