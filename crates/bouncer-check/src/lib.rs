//! Bouncer Check - Asset checklist engine
//!
//! This crate evaluates a fixed, ordered set of naming, packaging and authoring
//! rules against a `SceneSnapshot` and renders the findings as a text report.

mod config;
mod files;
mod lexicon;
mod patterns;
mod report;
mod rules;
mod runner;
mod spelling;
mod types;
mod violation;

pub use config::{
    MaterialNamesConfig, ObjectNamesConfig, ReportingOptions, RuleConfig, ToggleConfig,
    UnpackedImagesConfig,
};
pub use files::{exists, resolve_path};
pub use lexicon::Dictionary;
pub use patterns::PatternSet;
pub use report::{render_divider, ReportBuilder, ReportDocument, ResultData};
pub use rules::RuleContext;
pub use runner::{render_report, run, RuleEvaluator};
pub use spelling::{is_well_spelled, tokenize};
pub use types::{RuleKind, Severity};
pub use violation::{CheckReport, Violation};
