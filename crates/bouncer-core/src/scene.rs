//! Scene records inspected by the checklist

use crate::shader::ShaderGraph;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An image datablock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub name: String,
    /// External file path; empty for generated images
    #[serde(default)]
    pub filepath: String,
    /// Number of datablocks referencing this image
    #[serde(default)]
    pub users: u32,
    /// Whether the image data is embedded in the project file
    #[serde(default)]
    pub packed: bool,
}

impl Image {
    pub fn new(name: impl Into<String>, filepath: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filepath: filepath.into(),
            users: 1,
            packed: false,
        }
    }

    pub fn with_users(mut self, users: u32) -> Self {
        self.users = users;
        self
    }

    pub fn packed(mut self) -> Self {
        self.packed = true;
        self
    }
}

/// A material, optionally driven by a shader node graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shader: Option<ShaderGraph>,
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shader: None,
        }
    }

    pub fn with_shader(mut self, shader: ShaderGraph) -> Self {
        self.shader = Some(shader);
        self
    }
}

/// Object type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectKind {
    Mesh,
    Curve,
    Surface,
    Meta,
    Font,
    Armature,
    Lattice,
    Empty,
    Light,
    LightProbe,
    Camera,
    Speaker,
    #[serde(rename = "GPENCIL")]
    GreasePencil,
    Volume,
    /// Any type this checklist has no special handling for
    #[serde(other)]
    Other,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Mesh => "MESH",
            ObjectKind::Curve => "CURVE",
            ObjectKind::Surface => "SURFACE",
            ObjectKind::Meta => "META",
            ObjectKind::Font => "FONT",
            ObjectKind::Armature => "ARMATURE",
            ObjectKind::Lattice => "LATTICE",
            ObjectKind::Empty => "EMPTY",
            ObjectKind::Light => "LIGHT",
            ObjectKind::LightProbe => "LIGHT_PROBE",
            ObjectKind::Camera => "CAMERA",
            ObjectKind::Speaker => "SPEAKER",
            ObjectKind::GreasePencil => "GPENCIL",
            ObjectKind::Volume => "VOLUME",
            ObjectKind::Other => "OTHER",
        };
        write!(f, "{}", name)
    }
}

/// A scene object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// A linked library file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
    #[serde(default)]
    pub filepath: String,
}

impl Library {
    pub fn new(name: impl Into<String>, filepath: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filepath: filepath.into(),
        }
    }
}

/// Read-only, point-in-time view of the scene data checked in one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneSnapshot {
    pub images: Vec<Image>,
    pub materials: Vec<Material>,
    pub objects: Vec<SceneObject>,
    pub libraries: Vec<Library>,
}

impl SceneSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.images.push(image);
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }

    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    pub fn with_library(mut self, library: Library) -> Self {
        self.libraries.push(library);
        self
    }

    /// Check if the snapshot holds no records at all
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
            && self.materials.is_empty()
            && self.objects.is_empty()
            && self.libraries.is_empty()
    }
}
