//! Bouncer Scene - TOML scene descriptions
//!
//! This crate turns a scene description file into a `SceneSnapshot`, standing in
//! for a live host application when the checklist runs from the command line.

mod format;
mod loader;

pub use format::{SceneFile, SceneMetadata};
pub use loader::{load_snapshot, load_snapshot_string, LoadedScene};
