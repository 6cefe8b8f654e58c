//! Schema violation reporting.
//!
//! A failed schema check yields one [`Violation`] per problem the validator
//! found, each located by a JSON pointer into the serialized document.

use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single schema violation with its location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// JSON pointer to the offending value, empty for the document root.
    pub instance_path: String,
    /// JSON pointer to the schema keyword that failed.
    pub schema_path: String,
    pub message: String,
}

impl Violation {
    pub fn new(
        instance_path: impl Into<String>,
        schema_path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            instance_path: instance_path.into(),
            schema_path: schema_path.into(),
            message: message.into(),
        }
    }

    fn location(&self) -> &str {
        if self.instance_path.is_empty() {
            "/"
        } else {
            &self.instance_path
        }
    }

    /// Format the violation with colors for terminal output
    pub fn format_colored(&self) -> String {
        format!(
            "{} [{}] {}\n  {} {}\n",
            "✗".red().bold(),
            self.location().bright_blue(),
            self.message,
            "→".bright_green(),
            format!("schema: {}", self.schema_path).green()
        )
    }

    /// Format without colors for logs or non-terminal output
    pub fn format_plain(&self) -> String {
        format!(
            "[ERROR] [{}] {}\n  Schema: {}\n",
            self.location(),
            self.message,
            self.schema_path
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at '{}': {}", self.location(), self.message)
    }
}

/// The serialized document does not conform to the schema.
///
/// Never empty: a successful validation does not produce one, and
/// [`SchemaViolation::from_violations`] is the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    violations: Vec<Violation>,
}

impl SchemaViolation {
    /// Returns `None` when `violations` is empty.
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    pub fn first(&self) -> Option<&Violation> {
        self.violations.first()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Print the report with colors
    pub fn print_colored(&self) {
        for violation in &self.violations {
            print!("{}", violation.format_colored());
        }
        println!(
            "\n{} {}",
            "Summary:".bold(),
            self.summary().red().bold()
        );
    }

    /// Print without colors (for logs)
    pub fn print_plain(&self) {
        for violation in &self.violations {
            print!("{}", violation.format_plain());
        }
        println!("\nSummary: {}", self.summary());
    }

    fn summary(&self) -> String {
        let count = self.violations.len();
        format!("{} {}", count, if count == 1 { "violation" } else { "violations" })
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first() {
            Some(first) => write!(f, "{}, first {}", self.summary(), first),
            None => write!(f, "{}", self.summary()),
        }
    }
}

impl std::error::Error for SchemaViolation {}
