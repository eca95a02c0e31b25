//! Material shader node graphs

use serde::{Deserialize, Serialize};

/// Node type tag of the Principled BSDF shader node
pub const BSDF_PRINCIPLED: &str = "BSDF_PRINCIPLED";

/// Node type tag of the image texture node
pub const TEX_IMAGE: &str = "TEX_IMAGE";

/// An input socket of a shader node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    pub name: String,
    #[serde(default)]
    pub linked: bool,
    /// Name of the node feeding this input, when linked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_node: Option<String>,
}

impl Input {
    /// An input with nothing connected
    pub fn unlinked(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            linked: false,
            from_node: None,
        }
    }

    /// An input fed by the named node
    pub fn linked_from(name: impl Into<String>, node: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            linked: true,
            from_node: Some(node.into()),
        }
    }
}

/// A shader node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    /// Type tag, e.g. `BSDF_PRINCIPLED`
    pub kind: String,
    #[serde(default)]
    pub inputs: Vec<Input>,
}

impl Node {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: Input) -> Self {
        self.inputs.push(input);
        self
    }
}

/// A material's node graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShaderGraph {
    #[serde(default, rename = "node")]
    pub nodes: Vec<Node>,
}

impl ShaderGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Look up a node by name
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Get all nodes with the given type tag
    pub fn nodes_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }

    /// Resolve the node feeding a linked input.
    ///
    /// Returns `None` when the input is unlinked or its link points at a node
    /// that is not part of this graph.
    pub fn link_source(&self, input: &Input) -> Option<&Node> {
        if !input.linked {
            return None;
        }
        input.from_node.as_deref().and_then(|name| self.node(name))
    }
}
