//! Scene description loading

use crate::format::SceneFile;
use bouncer_core::{BouncerError, Result, SceneSnapshot};
use std::fs;
use std::path::{Path, PathBuf};

/// A loaded scene: the snapshot plus the project root its paths resolve against
#[derive(Debug, Clone)]
pub struct LoadedScene {
    pub name: String,
    pub root: PathBuf,
    pub snapshot: SceneSnapshot,
}

/// Load a scene description from a TOML file
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<LoadedScene> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        BouncerError::SceneLoadError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let base = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    load_snapshot_string(&content, base)
}

/// Load a scene description from a TOML string.
///
/// `base` is the directory the description lives in; it becomes the project root
/// unless the description names its own.
pub fn load_snapshot_string<P: AsRef<Path>>(content: &str, base: P) -> Result<LoadedScene> {
    let scene_file: SceneFile = toml::from_str(content).map_err(|e| {
        BouncerError::SceneLoadError(format!("Failed to parse scene TOML: {}", e))
    })?;

    let base = base.as_ref();
    let root = match &scene_file.scene.root {
        Some(root) => base.join(root),
        None => base.to_path_buf(),
    };
    let name = scene_file.scene.name.clone();
    let snapshot = scene_file.into_snapshot();

    tracing::debug!(
        scene = %name,
        images = snapshot.images.len(),
        materials = snapshot.materials.len(),
        objects = snapshot.objects.len(),
        libraries = snapshot.libraries.len(),
        "loaded scene description"
    );

    Ok(LoadedScene {
        name,
        root,
        snapshot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const SCENE: &str = r#"
[scene]
name = "Kitchen"

[[image]]
name = "Wood"
filepath = "//textures/wood.png"
users = 1
"#;

    #[test]
    fn test_root_defaults_to_base() {
        let loaded = load_snapshot_string(SCENE, "/projects/kitchen").unwrap();
        assert_eq!(loaded.name, "Kitchen");
        assert_eq!(loaded.root, Path::new("/projects/kitchen"));
        assert_eq!(loaded.snapshot.images.len(), 1);
    }

    #[test]
    fn test_relative_root_joins_base() {
        let content = "[scene]\nname = \"Kitchen\"\nroot = \"assets\"\n";
        let loaded = load_snapshot_string(content, "/projects/kitchen").unwrap();
        assert_eq!(loaded.root, Path::new("/projects/kitchen/assets"));
    }

    #[test]
    fn test_absolute_root_wins() {
        let content = "[scene]\nname = \"Kitchen\"\nroot = \"/srv/kitchen\"\n";
        let loaded = load_snapshot_string(content, "/projects/kitchen").unwrap();
        assert_eq!(loaded.root, Path::new("/srv/kitchen"));
    }

    #[test]
    fn test_malformed_scene_is_an_error() {
        let err = load_snapshot_string("[[image]]\nname = 3\n", ".").unwrap_err();
        assert!(matches!(err, BouncerError::SceneLoadError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kitchen.toml");
        fs::write(&path, SCENE).unwrap();

        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded.root, dir.path());
        assert_eq!(loaded.snapshot.images[0].name, "Wood");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_snapshot("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, BouncerError::SceneLoadError(_)));
    }
}
