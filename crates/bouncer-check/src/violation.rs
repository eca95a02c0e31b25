//! Rule findings collected during a run

use crate::report::ResultData;
use crate::types::{RuleKind, Severity};
use serde::Serialize;

/// Everything one rule found
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub rule: RuleKind,
    pub severity: Severity,
    /// Human-readable descriptions; empty when the rule passed clean
    pub findings: Vec<String>,
    /// Set when the rule could not finish
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Violation {
    pub fn new(rule: RuleKind, findings: Vec<String>) -> Self {
        Self {
            rule,
            severity: rule.severity(),
            findings,
            error: None,
        }
    }

    /// A rule that failed internally
    pub fn failed(rule: RuleKind, error: impl Into<String>) -> Self {
        Self {
            rule,
            severity: rule.severity(),
            findings: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty() && self.error.is_none()
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// What the text report shows for this rule
    pub fn result_data(&self) -> ResultData {
        if self.is_failed() {
            return ResultData::Scalar(format!("\"{}\": internal error", self.rule.label()));
        }
        ResultData::from(self.findings.clone())
    }

    fn weight(&self) -> usize {
        self.findings.len() + usize::from(self.is_failed())
    }
}

/// Findings of every enabled rule, in report order
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    pub violations: Vec<Violation>,
}

impl CheckReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no error-severity rule found anything
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// Findings of error-severity rules, counting each failed rule once
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .map(Violation::weight)
            .sum()
    }

    /// Violations of one severity, in report order
    pub fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(move |v| v.severity == severity)
    }

    /// Get a human-readable summary
    pub fn summary(&self) -> String {
        let errors = self.error_count();
        let warnings = self.warning_count();
        if errors == 0 && warnings == 0 {
            return "No problems found.".to_string();
        }

        format!("{} error(s), {} warning(s)", errors, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_severity() {
        let report = CheckReport {
            violations: vec![
                Violation::new(
                    RuleKind::UnpackedImages,
                    vec!["\"A\": a.png".to_string(), "\"B\": b.png".to_string()],
                ),
                Violation::failed(RuleKind::MissingLibraries, "boom"),
                Violation::new(RuleKind::ObjectNames, vec!["\"Cube\"".to_string()]),
                Violation::new(RuleKind::MaterialNames, Vec::new()),
            ],
        };

        assert_eq!(report.error_count(), 3);
        assert_eq!(report.warning_count(), 1);
        assert!(!report.is_valid());
        assert_eq!(report.summary(), "3 error(s), 1 warning(s)");
        assert_eq!(report.by_severity(Severity::Warning).count(), 2);
    }

    #[test]
    fn test_empty_report_is_valid() {
        let report = CheckReport::new();
        assert!(report.is_valid());
        assert_eq!(report.summary(), "No problems found.");
    }

    #[test]
    fn test_failed_rule_result_data() {
        let violation = Violation::failed(RuleKind::SingleImageBsdf, "dangling link");
        assert!(!violation.is_clean());
        assert_eq!(
            violation.result_data(),
            ResultData::Scalar("\"single image BSDF\": internal error".to_string())
        );
    }

    #[test]
    fn test_clean_violation() {
        let violation = Violation::new(RuleKind::OrphanedImages, Vec::new());
        assert!(violation.is_clean());
        assert_eq!(violation.result_data(), ResultData::Empty);
    }
}
