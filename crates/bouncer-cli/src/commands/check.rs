//! Scene check command

use anyhow::{Context, Result};
use bouncer_check::{render_report, CheckReport, Dictionary, RuleConfig, RuleEvaluator};
use bouncer_scene::load_snapshot;
use std::fs;

pub struct CheckArgs {
    pub scene: String,
    pub config: Option<String>,
    pub words: String,
    pub format: String,
    pub output: Option<String>,
}

pub fn run(args: CheckArgs) -> Result<()> {
    // Startup failures abort before any rule runs
    let config = match &args.config {
        Some(path) => RuleConfig::load_file(path)?,
        None => RuleConfig::default(),
    };
    let dictionary = Dictionary::load_file(&args.words)?;
    let scene = load_snapshot(&args.scene)?;

    tracing::info!(scene = %scene.name, root = %scene.root.display(), "checking scene");

    let report =
        RuleEvaluator::new(&scene.snapshot, &config, &dictionary, &scene.root).validate();

    let rendered = if args.format == "json" {
        report_json(&report)?
    } else {
        render_report(&report, &config.reporting).to_string()
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path))?;
            println!("{}", report.summary());
            println!("Report written to {}", path);
        }
        None => println!("{}", rendered),
    }

    if !report.is_valid() {
        std::process::exit(1);
    }

    Ok(())
}

fn report_json(report: &CheckReport) -> Result<String> {
    let rules: Vec<serde_json::Value> = report
        .violations
        .iter()
        .map(|v| {
            serde_json::json!({
                "rule": v.rule,
                "label": v.rule.label(),
                "severity": v.severity,
                "findings": v.findings,
                "failed": v.is_failed(),
                "error": v.error,
            })
        })
        .collect();

    let output = serde_json::json!({
        "valid": report.is_valid(),
        "summary": report.summary(),
        "errors": report.error_count(),
        "warnings": report.warning_count(),
        "rules": rules,
    });

    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bouncer_check::{RuleKind, Violation};
    use std::path::PathBuf;

    fn demo_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/kitchen")
    }

    #[test]
    fn test_demo_scene_findings() {
        let dir = demo_dir();
        let scene = load_snapshot(dir.join("kitchen.toml")).unwrap();
        let dictionary = Dictionary::load_file(dir.join("words.txt")).unwrap();
        let config = RuleConfig::default();

        let report =
            RuleEvaluator::new(&scene.snapshot, &config, &dictionary, &scene.root).validate();
        let findings: Vec<_> = report
            .violations
            .iter()
            .map(|v| (v.rule, v.findings.clone()))
            .collect();

        assert_eq!(
            findings,
            vec![
                (
                    RuleKind::UnpackedImages,
                    vec!["\"Stone\": //textures/stone.png".to_string()]
                ),
                (
                    RuleKind::OrphanedImages,
                    vec!["\"Old Decal\": //textures/decal.png".to_string()]
                ),
                (
                    RuleKind::MissingLibraries,
                    vec!["\"props.blend\": //lib/props.blend".to_string()]
                ),
                (RuleKind::ObjectNames, vec!["\"Cube.003\"".to_string()]),
                (RuleKind::MaterialNames, vec!["\"Material.001\"".to_string()]),
                (RuleKind::SingleImageBsdf, vec!["\"Oak\"".to_string()]),
            ]
        );
        assert_eq!(report.error_count(), 3);
    }

    #[test]
    fn test_report_json() {
        let report = CheckReport {
            violations: vec![
                Violation::new(
                    RuleKind::OrphanedImages,
                    vec!["\"Old\": //old.png".to_string()],
                ),
                Violation::failed(RuleKind::SingleImageBsdf, "dangling link"),
            ],
        };

        let json: serde_json::Value = serde_json::from_str(&report_json(&report).unwrap()).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"], 1);
        assert_eq!(json["warnings"], 1);
        assert_eq!(json["rules"][0]["rule"], "orphaned_images");
        assert_eq!(json["rules"][0]["severity"], "error");
        assert_eq!(json["rules"][0]["findings"][0], "\"Old\": //old.png");
        assert_eq!(json["rules"][1]["failed"], true);
        assert_eq!(json["rules"][1]["label"], "single image BSDF");
    }
}
