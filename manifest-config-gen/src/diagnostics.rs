//! Validation diagnostics collected during a generation round.
//!
//! Message text is fixed-format so hosts and tests can match on it
//! literally. The collector is scoped to one round: a fresh instance is
//! created per batch and drained into the round's result, so no state
//! survives between rounds.

use std::fmt;

use thiserror::Error;

use crate::types::ConfigType;

/// Coarse classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Declared return type is outside the supported catalog.
    UnsupportedType,
    /// Resolved manifest key is empty or contains whitespace.
    InvalidKey,
    /// Default literal does not parse as the declared type.
    InvalidValue,
}

/// A validation failure scoped to one interface method.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The method's declared return type is not a supported config type.
    #[error("Type {0} not supported as manifest config type.")]
    UnsupportedType(String),
    /// The resolved manifest key is the empty string.
    #[error("Cannot use empty meta key")]
    EmptyKey,
    /// The resolved manifest key contains a whitespace character.
    #[error("Cannot use whitespace in meta key")]
    WhitespaceKey,
    /// The default literal does not parse as the declared type.
    #[error("Cannot convert \"{literal}\" into type {ty}")]
    InvalidValue {
        /// Declared type the literal failed to parse as.
        ty: ConfigType,
        /// Offending literal, verbatim.
        literal: String,
    },
}

impl ValidationError {
    /// Classification used by hosts to group failures.
    #[must_use]
    pub const fn kind(&self) -> DiagnosticKind {
        match self {
            Self::UnsupportedType(_) => DiagnosticKind::UnsupportedType,
            Self::EmptyKey | Self::WhitespaceKey => DiagnosticKind::InvalidKey,
            Self::InvalidValue { .. } => DiagnosticKind::InvalidValue,
        }
    }
}

/// Where a diagnostic was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Interface whose processing raised the diagnostic.
    pub interface: String,
    /// Offending method, when the failure is method-scoped.
    pub method: Option<String>,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.method {
            Some(method) => write!(f, "{}.{method}", self.interface),
            None => f.write_str(&self.interface),
        }
    }
}

/// A single validation failure tied to its source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// The underlying validation failure.
    pub error: ValidationError,
    /// Location the failure is tied to.
    pub location: SourceLocation,
}

impl Diagnostic {
    /// Classification of the failure.
    #[must_use]
    pub const fn kind(&self) -> DiagnosticKind {
        self.error.kind()
    }

    /// Fixed-format message text for the failure.
    #[must_use]
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.error)
    }
}

/// Round-scoped diagnostic accumulator.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Records a failure against an interface, optionally tied to a method.
    pub fn record(&mut self, interface: &str, method: Option<&str>, error: ValidationError) {
        self.entries.push(Diagnostic {
            error,
            location: SourceLocation {
                interface: interface.to_owned(),
                method: method.map(str::to_owned),
            },
        });
    }

    /// True when no failures have been recorded this round.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates recorded diagnostics in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Consumes the collector, returning diagnostics in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

/// Diagnostics from one round, formatted for host display.
#[derive(Debug, Default)]
pub struct DiagnosticReport(Vec<Diagnostic>);

impl DiagnosticReport {
    /// Wraps a round's diagnostics.
    #[must_use]
    pub const fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self(diagnostics)
    }

    /// Iterates the contained diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    /// Number of diagnostics in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the report carries no diagnostics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {diagnostic}", i + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_fixed_format() {
        assert_eq!(
            ValidationError::UnsupportedType("double".to_owned()).to_string(),
            "Type double not supported as manifest config type."
        );
        assert_eq!(
            ValidationError::EmptyKey.to_string(),
            "Cannot use empty meta key"
        );
        assert_eq!(
            ValidationError::WhitespaceKey.to_string(),
            "Cannot use whitespace in meta key"
        );
        assert_eq!(
            ValidationError::InvalidValue {
                ty: ConfigType::Integer,
                literal: "abc".to_owned(),
            }
            .to_string(),
            "Cannot convert \"abc\" into type int"
        );
    }

    #[test]
    fn kinds_group_the_two_key_failures() {
        assert_eq!(ValidationError::EmptyKey.kind(), DiagnosticKind::InvalidKey);
        assert_eq!(
            ValidationError::WhitespaceKey.kind(),
            DiagnosticKind::InvalidKey
        );
    }

    #[test]
    fn collector_preserves_insertion_order() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.record("First", Some("getA"), ValidationError::EmptyKey);
        diagnostics.record("Second", None, ValidationError::WhitespaceKey);

        let entries = diagnostics.into_vec();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries.first().map(|d| d.location.to_string()),
            Some("First.getA".to_owned())
        );
        assert_eq!(
            entries.last().map(|d| d.location.to_string()),
            Some("Second".to_owned())
        );
    }

    #[test]
    fn report_numbers_each_diagnostic() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.record("Config", Some("getCount"), ValidationError::EmptyKey);
        diagnostics.record("Config", Some("getLabel"), ValidationError::WhitespaceKey);

        let report = DiagnosticReport::new(diagnostics.into_vec());
        let rendered = report.to_string();
        assert_eq!(
            rendered,
            "1: Config.getCount: Cannot use empty meta key\n\
             2: Config.getLabel: Cannot use whitespace in meta key"
        );
    }
}
