//! Domain Entities
//!
//! Core objects the injector works on: the bundler manifest, the file
//! specs describing what to fill, and the markup groups built in between.

mod file_spec;
mod manifest;
mod markup_groups;

pub use file_spec::{FileSpec, SpecValidationError, DEFAULT_PREFIX};
pub use manifest::{AssetManifest, Chunk};
pub use markup_groups::{MarkupGroup, MarkupGroups};
