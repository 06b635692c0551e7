//! Event Sink Implementations
//!
//! Concrete implementations of InjectEventSink:
//! - ConsoleEventSink: tagged, human-readable lines
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::{ConsoleEventSink, TAG};
pub use json::{event_to_json, JsonEventSink};

/// Cloneable in-memory writer for asserting on sink output
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl SharedBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[cfg(test)]
impl std::io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
