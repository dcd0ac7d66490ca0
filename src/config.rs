//! Run options for the `check` and `interactive` commands

use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where input is read from. `-` on the command line means standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Pick by file extension: `.json` is JSON, everything else is text.
    #[default]
    Auto,
    Text,
    Json,
}

impl InputFormat {
    /// Resolves `Auto` against the input source.
    pub fn resolve(self, source: &InputSource) -> InputFormat {
        match (self, source) {
            (InputFormat::Auto, InputSource::File(path)) if has_json_extension(path) => {
                InputFormat::Json
            }
            (InputFormat::Auto, _) => InputFormat::Text,
            (format, _) => format,
        }
    }
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(InputFormat::Auto),
            "text" | "txt" => Ok(InputFormat::Text),
            "json" => Ok(InputFormat::Json),
            other => Err(format!(
                "unknown input format '{other}' (expected auto, text or json)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Whether the detailed report follows the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailMode {
    #[default]
    SummaryOnly,
    Detailed,
    /// Ask after the summary, as the interactive flow does.
    Ask,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub source: InputSource,
    pub input_format: InputFormat,
    pub output_format: OutputFormat,
    /// Replaces the budget given in the input.
    pub budget_override: Option<i64>,
    pub detail: DetailMode,
}

impl CheckOptions {
    pub fn new(source: InputSource) -> Self {
        Self {
            source,
            input_format: InputFormat::Auto,
            output_format: OutputFormat::Text,
            budget_override: None,
            detail: DetailMode::SummaryOnly,
        }
    }

    pub fn with_input_format(mut self, format: InputFormat) -> Self {
        self.input_format = format;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_budget_override(mut self, budget: Option<i64>) -> Self {
        self.budget_override = budget;
        self
    }

    pub fn with_detail(mut self, detail: DetailMode) -> Self {
        self.detail = detail;
        self
    }

    pub fn effective_input_format(&self) -> InputFormat {
        self.input_format.resolve(&self.source)
    }
}
