//! Configuration module for BundleHash
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BUNDLEHASH_*)
//! 3. Config file (`--config`, else `./bundlehash.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{discover, load_or_default, with_env_overrides, CONFIG_FILE_NAME};
pub use types::{Config, FileEntry};
