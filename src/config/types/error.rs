//! Configuration error types.

use super::FieldPath;
use crate::utils::plural_s;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// A single validation failure found while resolving a `RawConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required field {0}")]
    MissingField(FieldPath),

    #[error("default locale `{0}` is not in the declared locale set")]
    InvalidDefaultLocale(String),

    #[error("locale `{0}` is declared more than once")]
    DuplicateLocale(String),

    #[error("invalid link target `{0}`")]
    InvalidLink(String),
}

// ============================================================================
// LoadError
// ============================================================================

/// Errors from reading, parsing and resolving a config file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A validation error located at a config field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "footer.links[0].items[1].to")
    pub field: FieldPath,
    pub error: ConfigError,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, error: ConfigError) -> Self {
        Self {
            field,
            error,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.error)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Every finding of one resolve run.
///
/// Errors fail the run; warnings are only displayed. Both keep the order in
/// which the resolver recorded them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, error: ConfigError) {
        self.errors.push(ConfigDiagnostic::new(field, error));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(&mut self, field: FieldPath, error: ConfigError, hint: impl Into<String>) {
        self.errors
            .push(ConfigDiagnostic::new(field, error).with_hint(hint));
    }

    /// Record a missing required field at `field`.
    pub fn missing(&mut self, field: FieldPath) {
        self.errors
            .push(ConfigDiagnostic::new(field.clone(), ConfigError::MissingField(field)));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Print collected warnings, grouped under one header.
    pub fn print_warnings(&self, source: &str) {
        if self.warnings.is_empty() {
            return;
        }
        crate::log!("warning"; "{}:", source);
        for (field, message) in &self.warnings {
            eprintln!("- [{}] {}", field.as_str(), message);
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    /// The bare errors, without field paths and hints.
    pub fn kinds(&self) -> impl Iterator<Item = &ConfigError> {
        self.errors.iter().map(|d| &d.error)
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                format!("error{}", plural_s(self.errors.len())).dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
