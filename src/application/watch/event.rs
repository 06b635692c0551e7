//! Watch event types and options

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::domain::entities::FileSpec;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Stats JSON to reload on every run
    pub stats: PathBuf,
    /// Resolved file specs
    pub specs: Vec<FileSpec>,
}

impl WatchOptions {
    pub fn new(stats: impl Into<PathBuf>, specs: Vec<FileSpec>) -> Self {
        Self {
            stats: stats.into(),
            specs,
        }
    }

    /// Files whose changes trigger a run: the stats file, then every
    /// template of a valid spec, without duplicates
    pub fn watched_files(&self) -> Vec<PathBuf> {
        let mut files = vec![self.stats.clone()];
        for spec in &self.specs {
            if spec.validate().is_ok() && !files.contains(&spec.template) {
                files.push(spec.template.clone());
            }
        }
        files
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted { stats: String, watching: Vec<String> },
    /// Watched file changed
    FileChanged { path: String },
    /// Inject run started
    InjectStarted,
    /// Inject run completed
    InjectComplete {
        written: usize,
        failed: usize,
        skipped: usize,
        missing: usize,
    },
    /// Error occurred (the watcher keeps running)
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Watcher state for debouncing
#[derive(Debug, Default)]
pub struct WatcherState {
    pending_changes: HashSet<PathBuf>,
    last_change: Option<Instant>,
}

impl WatcherState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file change to pending changes
    pub fn add_change(&mut self, path: PathBuf) {
        self.pending_changes.insert(path);
        self.last_change = Some(Instant::now());
    }

    /// Check if debounce period has passed and we have pending changes
    pub fn should_run(&self) -> bool {
        match self.last_change {
            Some(last) => {
                !self.pending_changes.is_empty()
                    && last.elapsed() >= Duration::from_millis(DEBOUNCE_MS)
            }
            None => false,
        }
    }

    /// Take all pending changes (sorted), resetting state
    pub fn take_changes(&mut self) -> Vec<PathBuf> {
        let mut changes: Vec<_> = self.pending_changes.drain().collect();
        changes.sort();
        self.last_change = None;
        changes
    }

    pub fn has_pending(&self) -> bool {
        !self.pending_changes.is_empty()
    }
}
