//! Inject Event Port
//!
//! Observable interface for inject runs. Every diagnostic the injector
//! produces (progress, skipped specs, missing mount points, write results)
//! flows through here; console and NDJSON renderings live in
//! `infrastructure::events`.

use std::path::PathBuf;

/// Event emitted during an inject run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectEvent {
    /// Run started
    Started { spec_count: usize },

    /// No file specs were configured
    NoFiles,

    /// Spec failed validation and was skipped
    SpecInvalid { index: usize, reason: String },

    /// Markup groups computed for a spec
    GroupsBuilt {
        index: usize,
        template: PathBuf,
        group_count: usize,
        snippet_count: usize,
    },

    /// A group key has no mount point in the template
    MountPointMissing {
        index: usize,
        key: String,
        template: PathBuf,
    },

    /// Template could not be read or decoded
    TemplateReadFailed {
        index: usize,
        path: PathBuf,
        error: String,
    },

    /// Template decoded to empty text; nothing is rendered or written
    TemplateEmpty { index: usize, path: PathBuf },

    /// Template could not be rendered
    RenderFailed {
        index: usize,
        path: PathBuf,
        error: String,
    },

    /// Target written
    TargetWritten { index: usize, path: PathBuf },

    /// Target rendered but not written (dry run)
    TargetRendered { index: usize, path: PathBuf },

    /// Target could not be written
    TargetWriteFailed {
        index: usize,
        path: PathBuf,
        error: String,
    },

    /// Run finished
    Completed {
        written: usize,
        rendered: usize,
        failed: usize,
        skipped: usize,
    },
}

/// Trait for receiving inject events
///
/// Implementations:
/// - `ConsoleEventSink`: tagged lines on stdout/stderr
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait InjectEventSink: Send + Sync {
    /// Handle an inject event
    fn on_event(&self, event: InjectEvent);

    /// Whether this sink wants per-spec detail events such as `GroupsBuilt`
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl InjectEventSink for NoopEventSink {
    fn on_event(&self, _event: InjectEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

/// Event sink that records every event (test helper)
#[cfg(test)]
#[derive(Default)]
pub struct RecordingEventSink {
    events: std::sync::Mutex<Vec<InjectEvent>>,
}

#[cfg(test)]
impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<InjectEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl InjectEventSink for RecordingEventSink {
    fn on_event(&self, event: InjectEvent) {
        self.events.lock().unwrap().push(event);
    }
}
