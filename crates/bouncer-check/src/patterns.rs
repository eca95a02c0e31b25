//! Case-insensitive forbidden-name patterns

use bouncer_core::{BouncerError, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// An ordered list of compiled, case-insensitive regular expressions.
///
/// Serializes as the list of source patterns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PatternSet {
    sources: Vec<String>,
    compiled: Vec<Regex>,
}

impl PatternSet {
    /// Compile a list of patterns, failing on the first invalid one
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut sources = Vec::with_capacity(patterns.len());
        let mut compiled = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| BouncerError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })?;
            sources.push(pattern.to_string());
            compiled.push(regex);
        }

        Ok(Self { sources, compiled })
    }

    /// Check whether any pattern occurs anywhere in `name`
    pub fn matches_any(&self, name: &str) -> bool {
        self.first_match(name).is_some()
    }

    /// Source text of the first pattern, in list order, found in `name`
    pub fn first_match(&self, name: &str) -> Option<&str> {
        self.compiled
            .iter()
            .zip(&self.sources)
            .find(|(regex, _)| regex.is_match(name))
            .map(|(_, source)| source.as_str())
    }

    /// The source patterns in order
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl TryFrom<Vec<String>> for PatternSet {
    type Error = BouncerError;

    fn try_from(patterns: Vec<String>) -> Result<Self> {
        Self::compile(&patterns)
    }
}

impl From<PatternSet> for Vec<String> {
    fn from(set: PatternSet) -> Self {
        set.sources
    }
}
