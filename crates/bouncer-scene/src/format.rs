//! Scene description format definitions

use bouncer_core::{Image, Library, Material, SceneObject, SceneSnapshot};
use serde::{Deserialize, Serialize};

/// Root structure of a scene description TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub scene: SceneMetadata,
    #[serde(default, rename = "image")]
    pub images: Vec<Image>,
    #[serde(default, rename = "material")]
    pub materials: Vec<Material>,
    #[serde(default, rename = "object")]
    pub objects: Vec<SceneObject>,
    #[serde(default, rename = "library")]
    pub libraries: Vec<Library>,
}

/// Scene metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub name: String,
    /// Project root that relative file paths resolve against.
    /// Relative values are taken from the description file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
}

impl SceneFile {
    /// Create a new, empty scene description
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scene: SceneMetadata {
                name: name.into(),
                root: None,
            },
            images: Vec::new(),
            materials: Vec::new(),
            objects: Vec::new(),
            libraries: Vec::new(),
        }
    }

    /// Consume the description into the records the checklist inspects
    pub fn into_snapshot(self) -> SceneSnapshot {
        SceneSnapshot {
            images: self.images,
            materials: self.materials,
            objects: self.objects,
            libraries: self.libraries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bouncer_core::ObjectKind;

    #[test]
    fn test_scene_file_serialization() {
        let mut scene = SceneFile::new("Test Scene");
        scene.images.push(Image::new("Tex", "//textures/tex.png"));
        scene
            .objects
            .push(SceneObject::new("Table", ObjectKind::Mesh));

        let toml_str = toml::to_string_pretty(&scene).unwrap();
        assert!(toml_str.contains("Test Scene"));
        assert!(toml_str.contains("[[image]]"));
        assert!(toml_str.contains("MESH"));
    }

    #[test]
    fn test_scene_file_deserialization() {
        let toml_str = r#"
[scene]
name = "Kitchen"

[[image]]
name = "Wood"
filepath = "//textures/wood.png"
users = 1

[[material]]
name = "Oak"

[[material.shader.node]]
name = "Principled BSDF"
kind = "BSDF_PRINCIPLED"

[[object]]
name = "Table"
kind = "MESH"

[[library]]
name = "props.blend"
filepath = "//lib/props.blend"
"#;

        let scene: SceneFile = toml::from_str(toml_str).unwrap();
        assert_eq!(scene.scene.name, "Kitchen");
        assert!(scene.scene.root.is_none());

        let snapshot = scene.into_snapshot();
        assert_eq!(snapshot.images.len(), 1);
        assert_eq!(snapshot.materials.len(), 1);
        assert!(snapshot.materials[0].shader.is_some());
        assert_eq!(snapshot.objects[0].kind, ObjectKind::Mesh);
        assert_eq!(snapshot.libraries[0].filepath, "//lib/props.blend");
    }

    #[test]
    fn test_empty_scene() {
        let scene: SceneFile = toml::from_str("[scene]\nname = \"Empty\"\n").unwrap();
        assert!(scene.into_snapshot().is_empty());
    }
}
