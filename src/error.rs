use colored::Colorize;
use std::fmt;

#[derive(Debug)]
pub enum ValidatorError {
    InvalidNumber {
        component_id: String,
        field: String,
        value: String,
    },
    NegativeValue {
        component_id: String,
        field: String,
        value: i64,
    },
    UnknownComponentType {
        component_id: String,
        type_name: String,
    },
    MalformedLine {
        line: usize,
        expected: String,
        found: String,
    },
    UnexpectedEndOfInput {
        expected: String,
    },
    JsonError {
        source: serde_json::Error,
    },
    IoError {
        operation: String,
        path: Option<String>,
        source: std::io::Error,
    },
    Other(anyhow::Error),
}

impl ValidatorError {
    pub fn invalid_number(
        component_id: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidNumber {
            component_id: component_id.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn negative_value(
        component_id: impl Into<String>,
        field: impl Into<String>,
        value: i64,
    ) -> Self {
        Self::NegativeValue {
            component_id: component_id.into(),
            field: field.into(),
            value,
        }
    }

    pub fn unknown_component_type(
        component_id: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::UnknownComponentType {
            component_id: component_id.into(),
            type_name: type_name.into(),
        }
    }

    pub fn malformed_line(
        line: usize,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::MalformedLine {
            line,
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn unexpected_end_of_input(expected: impl Into<String>) -> Self {
        Self::UnexpectedEndOfInput {
            expected: expected.into(),
        }
    }

    pub fn io_error(
        operation: impl Into<String>,
        path: Option<String>,
        source: std::io::Error,
    ) -> Self {
        Self::IoError {
            operation: operation.into(),
            path,
            source,
        }
    }
}

impl fmt::Display for ValidatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber {
                component_id,
                field,
                value,
            } => {
                writeln!(
                    f,
                    "{} Invalid numeric value for component {}",
                    "✗".red().bold(),
                    component_id.yellow()
                )?;
                writeln!(f, "  {} Field: {}", "→".blue(), field)?;
                writeln!(f, "  {} Value: {}", "→".blue(), value.red())?;
                Ok(())
            }
            Self::NegativeValue {
                component_id,
                field,
                value,
            } => {
                writeln!(
                    f,
                    "{} Invalid numeric value for component {}",
                    "✗".red().bold(),
                    component_id.yellow()
                )?;
                writeln!(f, "  {} Field: {}", "→".blue(), field)?;
                writeln!(
                    f,
                    "  {} Value {} must not be negative",
                    "→".blue(),
                    value.to_string().red()
                )?;
                Ok(())
            }
            Self::UnknownComponentType {
                component_id,
                type_name,
            } => {
                writeln!(
                    f,
                    "{} Unknown component type: {}",
                    "✗".red().bold(),
                    type_name.yellow()
                )?;
                writeln!(f, "  {} Component: {}", "→".blue(), component_id)?;
                writeln!(
                    f,
                    "  {} Expected one of: CPU, Motherboard, GPU, RAM, PSU",
                    "→".blue()
                )?;
                Ok(())
            }
            Self::MalformedLine {
                line,
                expected,
                found,
            } => {
                writeln!(
                    f,
                    "{} Malformed input on line {}",
                    "✗".red().bold(),
                    line.to_string().yellow()
                )?;
                writeln!(f, "  {} Expected: {}", "→".blue(), expected)?;
                writeln!(f, "  {} Found: {}", "→".blue(), found)?;
                Ok(())
            }
            Self::UnexpectedEndOfInput { expected } => {
                writeln!(f, "{} Input ended too early", "✗".red().bold())?;
                writeln!(f, "  {} Expected: {}", "→".blue(), expected)?;
                Ok(())
            }
            Self::JsonError { source } => {
                writeln!(f, "{} Invalid JSON input", "✗".red().bold())?;
                writeln!(f, "  {} Error: {}", "→".blue(), source)?;
                Ok(())
            }
            Self::IoError {
                operation,
                path,
                source,
            } => {
                writeln!(
                    f,
                    "{} I/O error during: {}",
                    "✗".red().bold(),
                    operation.yellow()
                )?;
                if let Some(path) = path {
                    writeln!(f, "  {} Path: {}", "→".blue(), path)?;
                }
                writeln!(f, "  {} Error: {}", "→".blue(), source)?;
                Ok(())
            }
            Self::Other(err) => write!(f, "{} {}", "✗".red().bold(), err),
        }
    }
}

impl std::error::Error for ValidatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError { source, .. } => Some(source),
            Self::JsonError { source } => Some(source),
            Self::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ValidatorError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            operation: "unknown".to_string(),
            path: None,
            source: err,
        }
    }
}

impl From<serde_json::Error> for ValidatorError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError { source: err }
    }
}

impl From<anyhow::Error> for ValidatorError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

impl From<dialoguer::Error> for ValidatorError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Other(anyhow::anyhow!("Dialog error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
