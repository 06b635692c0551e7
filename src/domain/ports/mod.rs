//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod inject_events;
pub mod markup_helper;

pub use file_system::{FileSystem, FsError, FsResult};
#[cfg(test)]
pub use inject_events::RecordingEventSink;
pub use inject_events::{InjectEvent, InjectEventSink, NoopEventSink};
pub use markup_helper::{HelperRegistry, MarkupHelper};
