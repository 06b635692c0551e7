//! BundleHash - inject hashed bundle asset tags into HTML templates
//!
//! Reads a bundler's stats JSON (`publicPath` + `assetsByChunkName`),
//! renders one markup snippet per emitted file through a per-extension
//! helper, and replaces `<!-- KEY --> ... <!-- /KEY -->` mount points in
//! configured templates, writing the result to target files.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DiffUseCase, InjectOptions, InjectReport, InjectUseCase, WatchUseCase};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{AssetManifest, Chunk, FileSpec, MarkupGroups};
pub use domain::ports::{HelperRegistry, MarkupHelper};
pub use domain::services::{group_assets, render_template, RenderOutput};
pub use error::{BundleHashError, BundleHashResult};
