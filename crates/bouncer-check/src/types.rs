//! Rule identity and severity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level for rule findings; selects the report section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Section header label in the text report
    pub fn section_label(&self) -> &'static str {
        match self {
            Severity::Error => "detected errors",
            Severity::Warning => "detected warnings",
        }
    }
}

/// The checks the checklist knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    UnpackedImages,
    OrphanedImages,
    MissingLibraries,
    ObjectNames,
    MaterialNames,
    SingleImageBsdf,
}

impl RuleKind {
    /// Every rule, in report order
    pub const ALL: [RuleKind; 6] = [
        RuleKind::UnpackedImages,
        RuleKind::OrphanedImages,
        RuleKind::MissingLibraries,
        RuleKind::ObjectNames,
        RuleKind::MaterialNames,
        RuleKind::SingleImageBsdf,
    ];

    /// Label shown in the text report
    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::UnpackedImages => "unpacked images",
            RuleKind::OrphanedImages => "orphaned images",
            RuleKind::MissingLibraries => "missing libraries",
            RuleKind::ObjectNames => "object names",
            RuleKind::MaterialNames => "material names",
            RuleKind::SingleImageBsdf => "single image BSDF",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            RuleKind::UnpackedImages | RuleKind::OrphanedImages | RuleKind::MissingLibraries => {
                Severity::Error
            }
            RuleKind::ObjectNames | RuleKind::MaterialNames | RuleKind::SingleImageBsdf => {
                Severity::Warning
            }
        }
    }

    /// Rules of one severity, in report order
    pub fn with_severity(severity: Severity) -> impl Iterator<Item = RuleKind> {
        Self::ALL
            .into_iter()
            .filter(move |rule| rule.severity() == severity)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_are_grouped_by_severity() {
        let errors: Vec<_> = RuleKind::with_severity(Severity::Error).collect();
        assert_eq!(
            errors,
            vec![
                RuleKind::UnpackedImages,
                RuleKind::OrphanedImages,
                RuleKind::MissingLibraries
            ]
        );

        let warnings: Vec<_> = RuleKind::with_severity(Severity::Warning).collect();
        assert_eq!(
            warnings,
            vec![
                RuleKind::ObjectNames,
                RuleKind::MaterialNames,
                RuleKind::SingleImageBsdf
            ]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(RuleKind::SingleImageBsdf.to_string(), "single image BSDF");
        assert_eq!(Severity::Warning.section_label(), "detected warnings");
    }
}
