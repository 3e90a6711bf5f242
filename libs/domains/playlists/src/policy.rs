//! Failure policy for multi-statement operations.
//!
//! Schema creation and data loading each run several statements in
//! sequence. Whether a failure aborts the remainder is an explicit choice
//! of the caller, not an accident of unchecked return codes.

use std::fmt;

/// What to do when a statement in a multi-statement operation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionPolicy {
    /// Abort on the first failed statement and return its error
    #[default]
    FailFast,

    /// Execute every statement, collecting failures into the report
    ContinueOnError,
}

impl ExecutionPolicy {
    pub fn fail_fast(&self) -> bool {
        matches!(self, ExecutionPolicy::FailFast)
    }
}

/// Outcome of a multi-statement operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// The first failure, preserved verbatim for the caller's log
    pub first_error: Option<String>,
}

impl BatchReport {
    pub fn record_success(&mut self) {
        self.attempted += 1;
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self, error: impl Into<String>) {
        self.attempted += 1;
        self.failed += 1;
        if self.first_error.is_none() {
            self.first_error = Some(error.into());
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} statements succeeded",
            self.succeeded, self.attempted
        )?;
        if let Some(ref error) = self.first_error {
            write!(f, "; first error: {error}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_fail_fast() {
        assert_eq!(ExecutionPolicy::default(), ExecutionPolicy::FailFast);
        assert!(ExecutionPolicy::FailFast.fail_fast());
        assert!(!ExecutionPolicy::ContinueOnError.fail_fast());
    }

    #[test]
    fn test_report_counts() {
        let mut report = BatchReport::default();
        report.record_success();
        report.record_failure("boom");
        report.record_success();

        assert_eq!(report.attempted, 3);
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, 1);
        assert!(!report.all_succeeded());
    }

    #[test]
    fn test_report_keeps_first_error_only() {
        let mut report = BatchReport::default();
        report.record_failure("first");
        report.record_failure("second");

        assert_eq!(report.first_error.as_deref(), Some("first"));
    }

    #[test]
    fn test_report_display() {
        let mut report = BatchReport::default();
        report.record_success();
        report.record_success();
        assert_eq!(report.to_string(), "2 of 2 statements succeeded");

        report.record_failure("timed out");
        assert_eq!(
            report.to_string(),
            "2 of 3 statements succeeded; first error: timed out"
        );
    }
}
