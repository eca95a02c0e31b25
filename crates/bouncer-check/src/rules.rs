//! The checklist rules
//!
//! Each rule reads the snapshot and its own section of the config and returns
//! one description per finding. Rules never touch scene data.

use crate::config::RuleConfig;
use crate::files;
use crate::lexicon::Dictionary;
use crate::patterns::PatternSet;
use crate::spelling::is_well_spelled;
use crate::types::RuleKind;
use bouncer_core::{
    BouncerError, Material, Node, Result, SceneSnapshot, ShaderGraph, BSDF_PRINCIPLED, TEX_IMAGE,
};
use std::path::Path;

/// Everything a rule may read
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    pub snapshot: &'a SceneSnapshot,
    pub config: &'a RuleConfig,
    pub dictionary: &'a Dictionary,
    /// Directory relative file paths resolve against
    pub root: &'a Path,
}

impl RuleKind {
    /// Run this rule against a snapshot
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<String>> {
        match self {
            RuleKind::UnpackedImages => Ok(unpacked_images(ctx)),
            RuleKind::OrphanedImages => Ok(orphaned_images(ctx)),
            RuleKind::MissingLibraries => Ok(missing_libraries(ctx)),
            RuleKind::ObjectNames => Ok(object_names(ctx)),
            RuleKind::MaterialNames => Ok(material_names(ctx)),
            RuleKind::SingleImageBsdf => single_image_bsdf(ctx),
        }
    }
}

fn file_finding(name: &str, filepath: &str) -> String {
    format!("\"{}\": {}", name, filepath)
}

fn name_finding(name: &str) -> String {
    format!("\"{}\"", name)
}

/// Images in use that are neither packed nor (optionally) present on disk
fn unpacked_images(ctx: &RuleContext<'_>) -> Vec<String> {
    let ok_if_file_exists = ctx.config.unpacked_images.ok_if_file_exists;

    ctx.snapshot
        .images
        .iter()
        .filter(|img| !img.filepath.is_empty() && img.users > 0 && !img.packed)
        .filter(|img| !ok_if_file_exists || !files::exists(&img.filepath, ctx.root))
        .map(|img| file_finding(&img.name, &img.filepath))
        .collect()
}

fn orphaned_images(ctx: &RuleContext<'_>) -> Vec<String> {
    ctx.snapshot
        .images
        .iter()
        .filter(|img| img.users == 0)
        .map(|img| file_finding(&img.name, &img.filepath))
        .collect()
}

fn missing_libraries(ctx: &RuleContext<'_>) -> Vec<String> {
    ctx.snapshot
        .libraries
        .iter()
        .filter(|lib| !files::exists(&lib.filepath, ctx.root))
        .map(|lib| file_finding(&lib.name, &lib.filepath))
        .collect()
}

/// Settings shared by the two name rules
struct NameCheck<'a> {
    patterns: Option<&'a PatternSet>,
    dictionary: Option<&'a Dictionary>,
}

impl NameCheck<'_> {
    /// A name is reported once, however many sub-checks flag it
    fn is_flagged(&self, name: &str) -> bool {
        let avoided = self
            .patterns
            .map(|patterns| patterns.matches_any(name))
            .unwrap_or(false);
        let misspelled = self
            .dictionary
            .map(|dict| !is_well_spelled(name, dict))
            .unwrap_or(false);
        avoided || misspelled
    }

    fn findings<'n>(&self, names: impl Iterator<Item = &'n str>) -> Vec<String> {
        names
            .filter(|name| self.is_flagged(name))
            .map(name_finding)
            .collect()
    }
}

fn object_names(ctx: &RuleContext<'_>) -> Vec<String> {
    let cfg = &ctx.config.object_names;
    let check = NameCheck {
        patterns: cfg.check_avoided.then_some(&cfg.patterns),
        dictionary: cfg.check_spelling.then_some(ctx.dictionary),
    };

    let names = ctx
        .snapshot
        .objects
        .iter()
        .filter(|obj| cfg.types.contains(&obj.kind))
        .map(|obj| obj.name.as_str());
    check.findings(names)
}

fn material_names(ctx: &RuleContext<'_>) -> Vec<String> {
    let cfg = &ctx.config.material_names;
    let check = NameCheck {
        patterns: cfg.check_avoided.then_some(&cfg.patterns),
        dictionary: cfg.check_spelling.then_some(ctx.dictionary),
    };

    let names = ctx.snapshot.materials.iter().map(|mat| mat.name.as_str());
    check.findings(names)
}

/// Materials with a Principled BSDF node fed by exactly one image texture.
///
/// A material is listed once per qualifying node.
fn single_image_bsdf(ctx: &RuleContext<'_>) -> Result<Vec<String>> {
    let mut findings = Vec::new();

    for material in &ctx.snapshot.materials {
        let Some(graph) = &material.shader else {
            continue;
        };

        for node in graph.nodes_of_kind(BSDF_PRINCIPLED) {
            if image_inputs(material, graph, node)? == 1 {
                findings.push(name_finding(&material.name));
            }
        }
    }

    Ok(findings)
}

/// Count the inputs of `node` linked from an image texture node
fn image_inputs(material: &Material, graph: &ShaderGraph, node: &Node) -> Result<usize> {
    let mut count = 0;

    for input in node.inputs.iter().filter(|input| input.linked) {
        let source = graph.link_source(input).ok_or_else(|| BouncerError::MalformedGraph {
            material: material.name.clone(),
            reason: format!(
                "input '{}' of node '{}' is linked from unknown node '{}'",
                input.name,
                node.name,
                input.from_node.as_deref().unwrap_or("")
            ),
        })?;

        if source.kind == TEX_IMAGE {
            count += 1;
        }
    }

    Ok(count)
}
