//! JSON Event Sink
//!
//! Outputs inject events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{InjectEvent, InjectEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Write one NDJSON line
    pub fn emit(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// NDJSON representation of an inject event
pub fn event_to_json(event: &InjectEvent) -> serde_json::Value {
    match event {
        InjectEvent::Started { spec_count } => serde_json::json!({
            "event": "start",
            "command": "inject",
            "spec_count": spec_count,
        }),

        InjectEvent::NoFiles => serde_json::json!({
            "event": "no_files",
            "command": "inject",
        }),

        InjectEvent::SpecInvalid { index, reason } => serde_json::json!({
            "event": "spec_invalid",
            "index": index,
            "reason": reason,
        }),

        InjectEvent::GroupsBuilt {
            index,
            template,
            group_count,
            snippet_count,
        } => serde_json::json!({
            "event": "groups_built",
            "index": index,
            "template": template.display().to_string(),
            "groups": group_count,
            "snippets": snippet_count,
        }),

        InjectEvent::MountPointMissing {
            index,
            key,
            template,
        } => serde_json::json!({
            "event": "mount_point_missing",
            "index": index,
            "key": key,
            "template": template.display().to_string(),
        }),

        InjectEvent::TemplateReadFailed { index, path, error } => serde_json::json!({
            "event": "template_read_failed",
            "index": index,
            "path": path.display().to_string(),
            "error": error,
        }),

        InjectEvent::TemplateEmpty { index, path } => serde_json::json!({
            "event": "template_empty",
            "index": index,
            "path": path.display().to_string(),
        }),

        InjectEvent::RenderFailed { index, path, error } => serde_json::json!({
            "event": "render_failed",
            "index": index,
            "path": path.display().to_string(),
            "error": error,
        }),

        InjectEvent::TargetWritten { index, path } => serde_json::json!({
            "event": "target_written",
            "index": index,
            "path": path.display().to_string(),
        }),

        InjectEvent::TargetRendered { index, path } => serde_json::json!({
            "event": "target_rendered",
            "index": index,
            "path": path.display().to_string(),
        }),

        InjectEvent::TargetWriteFailed { index, path, error } => serde_json::json!({
            "event": "target_write_failed",
            "index": index,
            "path": path.display().to_string(),
            "error": error,
        }),

        InjectEvent::Completed {
            written,
            rendered,
            failed,
            skipped,
        } => {
            let status = if *failed == 0 && *skipped == 0 {
                "success"
            } else {
                "partial"
            };
            serde_json::json!({
                "event": "complete",
                "command": "inject",
                "status": status,
                "written": written,
                "rendered": rendered,
                "failed": failed,
                "skipped": skipped,
            })
        }
    }
}

impl InjectEventSink for JsonEventSink {
    fn on_event(&self, event: InjectEvent) {
        self.emit(event_to_json(&event));
    }
}
