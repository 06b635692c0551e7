//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `events/` - Console and NDJSON inject event sinks
//! - `helpers/` - Built-in and configurable markup helpers
//! - `manifest` - Stats JSON loading (file or stdin)

pub mod events;
pub mod fs;
pub mod helpers;
pub mod manifest;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use helpers::{builtin_helpers, template_helpers};
pub use manifest::{load_manifest, ManifestSource};
