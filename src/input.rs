//! Input collection: the line-oriented text format and JSON documents
//!
//! Both formats produce a [`BuildInput`]. Any malformed record is fatal;
//! nothing is evaluated from a partially read input.

use crate::config::{CheckOptions, InputFormat, InputSource};
use crate::core::{BuildKit, Component, ComponentRegistry};
use crate::error::{Result, ValidatorError};
use serde::Deserialize;
use std::fmt;
use std::io::Read;

pub const COMPONENT_LINE_FORMAT: &str =
    "component_id type performance_score cost spec1 spec2";
pub const KIT_LINE_FORMAT: &str = "kit_id cpu_id mobo_id gpu_id ram_id psu_id";

/// A budget, the component inventory and the kits to check, in order.
#[derive(Debug, Clone, Default)]
pub struct BuildInput {
    pub budget: i64,
    /// Number of component records entered, counting any duplicate ids that
    /// the registry collapsed.
    pub component_count: usize,
    pub registry: ComponentRegistry,
    pub kits: Vec<BuildKit>,
}

impl BuildInput {
    pub fn with_budget(mut self, budget: i64) -> Self {
        self.budget = budget;
        self
    }
}

/// Parses one `component_id type performance_score cost spec1 spec2` record.
pub fn parse_component_line(line: &str, line_number: usize) -> Result<Component> {
    match line.split_whitespace().collect::<Vec<_>>().as_slice() {
        [id, kind, score, cost, spec1, spec2] => {
            Component::from_fields(id, kind, score, cost, spec1, spec2)
        }
        _ => Err(ValidatorError::malformed_line(
            line_number,
            COMPONENT_LINE_FORMAT,
            line.trim(),
        )),
    }
}

/// Parses one `kit_id cpu_id mobo_id gpu_id ram_id psu_id` record.
pub fn parse_kit_line(line: &str, line_number: usize) -> Result<BuildKit> {
    match line.split_whitespace().collect::<Vec<_>>().as_slice() {
        [id, cpu, motherboard, gpu, ram, psu] => {
            Ok(BuildKit::new(*id, *cpu, *motherboard, *gpu, *ram, *psu))
        }
        _ => Err(ValidatorError::malformed_line(
            line_number,
            KIT_LINE_FORMAT,
            line.trim(),
        )),
    }
}

/// Parses the total budget. Any integer is accepted; a negative budget
/// leaves every kit over budget.
pub fn parse_budget(value: &str, line_number: usize) -> Result<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        ValidatorError::malformed_line(line_number, "total budget (integer)", value.trim())
    })
}

/// Parses a non-negative record count.
pub fn parse_count(value: &str, line_number: usize, what: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ValidatorError::malformed_line(line_number, what, value.trim()))
}

/// Content lines with their 1-based line numbers; blank lines and `#`
/// comments are skipped.
struct ContentLines<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> ContentLines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
        }
    }

    fn next_required(&mut self, expected: &str) -> Result<(usize, &'a str)> {
        self.next()
            .ok_or_else(|| ValidatorError::unexpected_end_of_input(expected))
    }
}

impl<'a> Iterator for ContentLines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.lines
            .by_ref()
            .map(|(index, line)| (index + 1, line))
            .find(|(_, line)| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
    }
}

/// Parses the text format: budget, component count, component records,
/// kit count, kit records.
pub fn parse_text(text: &str) -> Result<BuildInput> {
    let mut lines = ContentLines::new(text);

    let (line_number, line) = lines.next_required("total budget")?;
    let budget = parse_budget(line, line_number)?;

    let (line_number, line) = lines.next_required("number of components")?;
    let component_count =
        parse_count(line, line_number, "number of components (non-negative integer)")?;

    let mut registry = ComponentRegistry::new();
    let mut entered = 0;
    for _ in 0..component_count {
        let (line_number, line) = lines.next_required(COMPONENT_LINE_FORMAT)?;
        registry.register(parse_component_line(line, line_number)?);
        entered += 1;
    }

    let (line_number, line) = lines.next_required("number of build kits")?;
    let kit_count = parse_count(line, line_number, "number of build kits (non-negative integer)")?;

    let mut kits = Vec::new();
    for _ in 0..kit_count {
        let (line_number, line) = lines.next_required(KIT_LINE_FORMAT)?;
        kits.push(parse_kit_line(line, line_number)?);
    }

    if let Some((line_number, line)) = lines.next() {
        return Err(ValidatorError::malformed_line(
            line_number,
            "end of input",
            line.trim(),
        ));
    }

    Ok(BuildInput {
        budget,
        component_count: entered,
        registry,
        kits,
    })
}

/// A JSON field that may be written as a string or a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Number(i64),
    Text(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonComponent {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(alias = "performance_score")]
    score: FieldValue,
    cost: FieldValue,
    #[serde(default)]
    spec1: FieldValue,
    #[serde(default)]
    spec2: FieldValue,
}

#[derive(Debug, Deserialize)]
struct JsonInput {
    budget: i64,
    #[serde(default)]
    components: Vec<JsonComponent>,
    #[serde(default)]
    kits: Vec<BuildKit>,
}

pub fn parse_json(text: &str) -> Result<BuildInput> {
    let document: JsonInput = serde_json::from_str(text)?;

    let mut registry = ComponentRegistry::new();
    for raw in &document.components {
        registry.register(Component::from_fields(
            &raw.id,
            &raw.kind,
            &raw.score.to_string(),
            &raw.cost.to_string(),
            &raw.spec1.to_string(),
            &raw.spec2.to_string(),
        )?);
    }

    Ok(BuildInput {
        budget: document.budget,
        component_count: document.components.len(),
        registry,
        kits: document.kits,
    })
}

pub fn parse_input(text: &str, format: InputFormat) -> Result<BuildInput> {
    match format {
        InputFormat::Json => parse_json(text),
        InputFormat::Text | InputFormat::Auto => parse_text(text),
    }
}

fn read_source(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| ValidatorError::io_error("read standard input", None, e))?;
            Ok(text)
        }
        InputSource::File(path) => std::fs::read_to_string(path).map_err(|e| {
            ValidatorError::io_error("read input file", Some(path.display().to_string()), e)
        }),
    }
}

/// Reads and parses the input named by the options, applying any budget
/// override.
pub fn load_input(options: &CheckOptions) -> Result<BuildInput> {
    let text = read_source(&options.source)?;
    let mut input = parse_input(&text, options.effective_input_format())?;
    if let Some(budget) = options.budget_override {
        input = input.with_budget(budget);
    }

    crate::logging::log_input_loaded(
        &options.source.describe(),
        input.budget,
        input.registry.len(),
        input.kits.len(),
    );
    Ok(input)
}
