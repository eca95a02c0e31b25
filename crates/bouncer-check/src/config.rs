//! Checklist configuration
//!
//! A `RuleConfig` is read once at startup and passed by reference into every
//! rule. All patterns are compiled while loading, so a config that loads is
//! ready to run.

use crate::patterns::PatternSet;
use crate::types::RuleKind;
use bouncer_core::{BouncerError, ObjectKind, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Text report layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportingOptions {
    /// First line after the top divider
    pub title: String,
    /// Column width labels are padded to
    pub label_width: usize,
    /// Repeated to draw the top and bottom dividers
    pub divider_style: String,
    pub divider_width: usize,
    /// Report single-finding lists on one line
    pub squash_singleton_lists: bool,
}

impl Default for ReportingOptions {
    fn default() -> Self {
        Self {
            title: "Bouncer Report".to_string(),
            label_width: 20,
            divider_style: "^-".to_string(),
            divider_width: 50,
            squash_singleton_lists: false,
        }
    }
}

/// A rule with no parameters beyond its on/off switch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleConfig {
    pub enabled: bool,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnpackedImagesConfig {
    pub enabled: bool,
    /// Only report unpacked images whose external file is missing
    pub ok_if_file_exists: bool,
}

impl Default for UnpackedImagesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ok_if_file_exists: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObjectNamesConfig {
    pub enabled: bool,
    /// Flag names matching a forbidden pattern
    pub check_avoided: bool,
    /// Flag names containing words missing from the dictionary
    pub check_spelling: bool,
    /// Only objects of these types are checked
    pub types: Vec<ObjectKind>,
    pub patterns: PatternSet,
}

impl ObjectNamesConfig {
    /// Whether the rule has any work to do
    pub fn is_active(&self) -> bool {
        self.enabled && (self.check_avoided || self.check_spelling)
    }
}

impl Default for ObjectNamesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            check_avoided: true,
            check_spelling: true,
            types: vec![
                ObjectKind::Curve,
                ObjectKind::Lattice,
                ObjectKind::Camera,
                ObjectKind::Light,
                ObjectKind::Mesh,
                ObjectKind::Font,
                ObjectKind::Armature,
                ObjectKind::Surface,
            ],
            patterns: default_patterns(&[
                "plane",
                "cube",
                "circle",
                "sphere",
                "icosphere",
                "cylinder",
                "cone",
                "torus",
                "empty",
                r"\d{3,}$",
                "^ +",
                " +$",
            ]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialNamesConfig {
    pub enabled: bool,
    pub check_avoided: bool,
    pub check_spelling: bool,
    pub patterns: PatternSet,
}

impl MaterialNamesConfig {
    pub fn is_active(&self) -> bool {
        self.enabled && (self.check_avoided || self.check_spelling)
    }
}

impl Default for MaterialNamesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            check_avoided: true,
            check_spelling: true,
            patterns: default_patterns(&["^material$", r"\d{3,}$", "^ +", " +$"]),
        }
    }
}

fn default_patterns(patterns: &[&str]) -> PatternSet {
    PatternSet::compile(patterns).expect("built-in patterns are valid")
}

/// Complete checklist configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    pub reporting: ReportingOptions,
    pub unpacked_images: UnpackedImagesConfig,
    pub orphaned_images: ToggleConfig,
    pub missing_libraries: ToggleConfig,
    pub object_names: ObjectNamesConfig,
    pub material_names: MaterialNamesConfig,
    pub single_image_bsdf: ToggleConfig,
}

impl RuleConfig {
    /// Load configuration from a TOML file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BouncerError::ConfigLoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::load_string(&content)?;
        tracing::info!(path = %path.display(), "loaded checklist config");
        Ok(config)
    }

    /// Load configuration from a TOML string.
    ///
    /// Missing sections and fields take their defaults, so an empty string
    /// yields the default configuration.
    pub fn load_string(content: &str) -> Result<Self> {
        let config: RuleConfig = toml::from_str(content).map_err(|e| {
            BouncerError::ConfigLoadError(format!("Failed to parse config TOML: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.reporting.divider_style.is_empty() {
            return Err(BouncerError::ConfigLoadError(
                "reporting.divider_style must not be empty".to_string(),
            ));
        }
        if self.reporting.divider_width == 0 {
            return Err(BouncerError::ConfigLoadError(
                "reporting.divider_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether a rule runs and gets a line in the report
    pub fn is_enabled(&self, rule: RuleKind) -> bool {
        match rule {
            RuleKind::UnpackedImages => self.unpacked_images.enabled,
            RuleKind::OrphanedImages => self.orphaned_images.enabled,
            RuleKind::MissingLibraries => self.missing_libraries.enabled,
            RuleKind::ObjectNames => self.object_names.is_active(),
            RuleKind::MaterialNames => self.material_names.is_active(),
            RuleKind::SingleImageBsdf => self.single_image_bsdf.enabled,
        }
    }

    /// Enabled rules, in report order
    pub fn enabled_rules(&self) -> Vec<RuleKind> {
        RuleKind::ALL
            .into_iter()
            .filter(|rule| self.is_enabled(*rule))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = RuleConfig::load_string("").unwrap();
        assert_eq!(config.reporting, ReportingOptions::default());
        assert!(config.unpacked_images.ok_if_file_exists);
        assert_eq!(config.object_names.types.len(), 8);
        assert_eq!(config.object_names.patterns.len(), 12);
        assert_eq!(config.material_names.patterns.len(), 4);
        assert_eq!(config.enabled_rules(), RuleKind::ALL.to_vec());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
[reporting]
divider_style = "="
squash_singleton_lists = true

[unpacked_images]
ok_if_file_exists = false

[orphaned_images]
enabled = false

[object_names]
types = ["MESH", "CAMERA"]
patterns = ["^untitled"]
"#;

        let config = RuleConfig::load_string(toml_str).unwrap();
        assert_eq!(config.reporting.divider_style, "=");
        assert_eq!(config.reporting.divider_width, 50);
        assert!(config.reporting.squash_singleton_lists);
        assert!(!config.unpacked_images.ok_if_file_exists);
        assert!(!config.is_enabled(RuleKind::OrphanedImages));
        assert_eq!(
            config.object_names.types,
            vec![ObjectKind::Mesh, ObjectKind::Camera]
        );
        assert!(config.object_names.patterns.matches_any("Untitled.1"));
        assert!(config.object_names.check_spelling);
    }

    #[test]
    fn test_names_rule_without_subchecks_is_disabled() {
        let toml_str = r#"
[material_names]
check_avoided = false
check_spelling = false
"#;
        let config = RuleConfig::load_string(toml_str).unwrap();
        assert!(!config.is_enabled(RuleKind::MaterialNames));
        assert!(config.is_enabled(RuleKind::ObjectNames));
        assert_eq!(config.enabled_rules().len(), 5);
    }

    #[test]
    fn test_invalid_pattern_is_fatal() {
        let toml_str = r#"
[object_names]
patterns = ["[unclosed"]
"#;
        let err = RuleConfig::load_string(toml_str).unwrap_err();
        assert!(matches!(err, BouncerError::ConfigLoadError(_)));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let toml_str = r#"
[unpacked_images]
ok_if_file_exist = false
"#;
        assert!(RuleConfig::load_string(toml_str).is_err());
    }

    #[test]
    fn test_bad_divider_is_rejected() {
        assert!(RuleConfig::load_string("[reporting]\ndivider_style = \"\"\n").is_err());
        assert!(RuleConfig::load_string("[reporting]\ndivider_width = 0\n").is_err());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = RuleConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        assert!(toml_str.contains("[object_names]"));
        assert!(toml_str.contains("ok_if_file_exists = true"));

        let reloaded = RuleConfig::load_string(&toml_str).unwrap();
        assert_eq!(
            reloaded.object_names.patterns.sources(),
            config.object_names.patterns.sources()
        );
        assert_eq!(reloaded.object_names.types, config.object_names.types);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bouncer.toml");
        fs::write(&path, "[single_image_bsdf]\nenabled = false\n").unwrap();

        let config = RuleConfig::load_file(&path).unwrap();
        assert!(!config.is_enabled(RuleKind::SingleImageBsdf));
        assert!(RuleConfig::load_file(dir.path().join("missing.toml")).is_err());
    }
}
