//! Default config creation command

use anyhow::Result;
use bouncer_check::RuleConfig;
use std::fs;
use std::path::Path;

pub fn run(path: &str) -> Result<()> {
    let target = Path::new(path);

    if target.exists() {
        anyhow::bail!("File '{}' already exists", path);
    }

    fs::write(target, default_config()?)?;
    println!("Wrote default checklist config to {}", path);
    Ok(())
}

fn default_config() -> Result<String> {
    let body = RuleConfig::default().to_toml_string()?;
    Ok(format!(
        "# Bouncer checklist config\n# Patterns are case-insensitive regular expressions.\n\n{}",
        body
    ))
}
