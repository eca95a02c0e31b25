//! Bouncer Core - Foundational types for the Bouncer asset checklist
//!
//! This crate provides the types that all other Bouncer crates depend on:
//! - `SceneSnapshot` - Read-only view of the images, materials, objects and libraries of a scene
//! - `ShaderGraph` - Material node graphs
//! - Error types and Result alias

mod error;
mod scene;
mod shader;

pub use error::{BouncerError, Result};
pub use scene::{Image, Library, Material, ObjectKind, SceneObject, SceneSnapshot};
pub use shader::{Input, Node, ShaderGraph, BSDF_PRINCIPLED, TEX_IMAGE};
