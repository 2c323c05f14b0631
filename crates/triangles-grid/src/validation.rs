//! Field-level validation results.
//!
//! Rules never short-circuit: every violated field is recorded so that a
//! caller can show all problems with a request at once.

/// How serious a validation entry is.
///
/// Only [`Severity::Error`] makes a request invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// One rule violation, keyed by the field it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered list of validation entries for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ValidationOutcome {
    failures: Vec<ValidationFailure>,
}

impl ValidationOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>, severity: Severity) {
        self.failures.push(ValidationFailure {
            field: field.into(),
            message: message.into(),
            severity,
        });
    }

    pub fn error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(field, message, Severity::Error);
    }

    pub fn warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(field, message, Severity::Warning);
    }

    /// True when no entry has [`Severity::Error`].
    pub fn is_valid(&self) -> bool {
        self.failures.iter().all(|f| f.severity != Severity::Error)
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationFailure> {
        self.failures.iter().filter(|f| f.severity == Severity::Error)
    }

    /// Entries recorded against `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationFailure> {
        self.failures.iter().filter(move |f| f.field == field)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.for_field(field).next().is_some()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Require `value` to lie in `[min, max]`, recording one message per bound.
    pub(crate) fn check_range(
        &mut self,
        field: &str,
        value: i32,
        (min, below): (i32, &str),
        (max, above): (i32, &str),
    ) {
        if value < min {
            self.error(field, below);
        }
        if value > max {
            self.error(field, above);
        }
    }
}

impl IntoIterator for ValidationOutcome {
    type Item = ValidationFailure;
    type IntoIter = std::vec::IntoIter<ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl Extend<ValidationFailure> for ValidationOutcome {
    fn extend<I: IntoIterator<Item = ValidationFailure>>(&mut self, iter: I) {
        self.failures.extend(iter);
    }
}

impl std::fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

/// A request that carries its own rule set.
pub trait Validate {
    /// Evaluate every rule and collect the violations.
    fn validate(&self) -> ValidationOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_outcome_is_valid() {
        let outcome = ValidationOutcome::new();
        assert!(outcome.is_valid());
        assert!(outcome.is_empty());
    }

    #[test]
    fn warnings_do_not_invalidate() {
        let mut outcome = ValidationOutcome::new();
        outcome.warning("Row", "off the grid");
        outcome.push("Column", "noted", Severity::Info);
        assert!(outcome.is_valid());
        assert_eq!(outcome.len(), 2);
        assert_eq!(outcome.errors().count(), 0);
    }

    #[test]
    fn any_error_invalidates() {
        let mut outcome = ValidationOutcome::new();
        outcome.warning("Row", "off the grid");
        outcome.error("Column", "Column must be between 1 and 12");
        assert!(!outcome.is_valid());
        assert!(outcome.has_field("Column"));
        assert!(!outcome.has_field("X1"));
    }

    #[test]
    fn range_check_reports_the_broken_bound() {
        let mut outcome = ValidationOutcome::new();
        outcome.check_range("X1", -1, (0, "low"), (60, "high"));
        outcome.check_range("Y1", 61, (0, "low"), (60, "high"));
        outcome.check_range("X2", 30, (0, "low"), (60, "high"));

        let messages: Vec<_> = outcome
            .failures()
            .iter()
            .map(|f| (f.field.as_str(), f.message.as_str()))
            .collect();
        assert_eq!(messages, vec![("X1", "low"), ("Y1", "high")]);
    }

    #[test]
    fn display_joins_entries() {
        let mut outcome = ValidationOutcome::new();
        outcome.error("Row", "Please Specify Row");
        outcome.error("Column", "Column must be between 1 and 12");
        assert_eq!(
            outcome.to_string(),
            "Row: Please Specify Row; Column: Column must be between 1 and 12"
        );
    }
}
