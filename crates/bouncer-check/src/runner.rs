//! Checklist runner

use crate::config::{ReportingOptions, RuleConfig};
use crate::lexicon::Dictionary;
use crate::report::{ReportBuilder, ReportDocument};
use crate::rules::RuleContext;
use crate::types::Severity;
use crate::violation::{CheckReport, Violation};
use bouncer_core::SceneSnapshot;
use std::path::Path;

/// Evaluates the enabled rules against one snapshot
pub struct RuleEvaluator<'a> {
    ctx: RuleContext<'a>,
}

impl<'a> RuleEvaluator<'a> {
    /// Create a new evaluator
    pub fn new(
        snapshot: &'a SceneSnapshot,
        config: &'a RuleConfig,
        dictionary: &'a Dictionary,
        root: &'a Path,
    ) -> Self {
        Self {
            ctx: RuleContext {
                snapshot,
                config,
                dictionary,
                root,
            },
        }
    }

    /// Run every enabled rule, in report order.
    ///
    /// A rule that fails is recorded as failed and the run moves on to the
    /// next rule.
    pub fn validate(&self) -> CheckReport {
        let mut report = CheckReport::new();

        for rule in self.ctx.config.enabled_rules() {
            let violation = match rule.evaluate(&self.ctx) {
                Ok(findings) => {
                    tracing::debug!(rule = %rule, findings = findings.len(), "rule finished");
                    Violation::new(rule, findings)
                }
                Err(e) => {
                    tracing::warn!(rule = %rule, error = %e, "rule failed");
                    Violation::failed(rule, e.to_string())
                }
            };
            report.violations.push(violation);
        }

        report
    }
}

/// Render a report: title, then errors, then warnings
pub fn render_report(report: &CheckReport, options: &ReportingOptions) -> ReportDocument {
    let mut builder = ReportBuilder::new(options);
    builder.add_divider();
    builder.add_line(options.title.as_str());

    for severity in [Severity::Error, Severity::Warning] {
        builder.add_section_header(severity.section_label());
        for violation in report.by_severity(severity) {
            builder.add_result(violation.rule.label(), &violation.result_data());
        }
    }

    builder.add_blank_lines(2);
    builder.add_divider();
    builder.add_blank_lines(1);
    builder.finish()
}

/// Check a snapshot and render the text report
pub fn run(
    snapshot: &SceneSnapshot,
    config: &RuleConfig,
    dictionary: &Dictionary,
    root: &Path,
) -> ReportDocument {
    let report = RuleEvaluator::new(snapshot, config, dictionary, root).validate();
    render_report(&report, &config.reporting)
}
