//! Domain Layer
//!
//! The core of BundleHash - pure injection logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - AssetManifest, FileSpec, MarkupGroups
//! - `value_objects/` - Encoding, LineEnding, MountKey
//! - `services/` - Grouper, Renderer, Differ
//! - `ports/` - Interfaces for infrastructure (FileSystem, MarkupHelper, events)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
