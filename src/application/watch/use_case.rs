//! Watch Use Case implementation

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::inject::{InjectOptions, InjectUseCase};
use crate::domain::ports::InjectEventSink;
use crate::error::{BundleHashError, BundleHashResult};
use crate::infrastructure::fs::LocalFs;
use crate::infrastructure::manifest::{load_manifest, ManifestSource};

use super::event::{WatchEvent, WatchOptions, WatcherState};

/// Watch Use Case
///
/// This is the main entry point for the `bundlehash watch` command.
pub struct WatchUseCase {
    options: WatchOptions,
}

impl WatchUseCase {
    pub fn new(options: WatchOptions) -> Self {
        Self { options }
    }

    /// Start watching (blocking)
    ///
    /// Runs one inject immediately, then blocks until `running` is cleared.
    /// Inject diagnostics go to `inject_events`; watcher lifecycle events go
    /// to `on_event`.
    pub fn start<F>(
        &self,
        running: Arc<AtomicBool>,
        inject_events: &dyn InjectEventSink,
        on_event: F,
    ) -> BundleHashResult<()>
    where
        F: Fn(WatchEvent),
    {
        let watched: Vec<PathBuf> = self
            .options
            .watched_files()
            .iter()
            .map(|p| normalize(p))
            .collect();

        on_event(WatchEvent::WatchStarted {
            stats: self.options.stats.display().to_string(),
            watching: watched.iter().map(|p| p.display().to_string()).collect(),
        });

        // Taken before the first run so that anything rewritten from here
        // on is picked up, even while startup events are being discarded
        let mut snapshots = Snapshots::capture(&watched);

        self.run_once(inject_events, &on_event);

        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            Config::default(),
        )
        .map_err(|e| BundleHashError::Watch(e.to_string()))?;

        // Parent directories, so editors that replace files by rename and a
        // stats file that does not exist yet are both picked up.
        let directories: HashSet<PathBuf> = watched
            .iter()
            .map(|p| parent_dir(p).to_path_buf())
            .collect();
        for dir in &directories {
            watcher
                .watch(dir, RecursiveMode::NonRecursive)
                .map_err(|e| BundleHashError::Watch(format!("{}: {}", dir.display(), e)))?;
        }

        let mut state = WatcherState::new();

        // Startup cooldown: notify may report events for files that were
        // touched right before registration. Events are dropped here, so
        // the contents are compared afterwards instead.
        let cooldown_end = Instant::now() + Duration::from_millis(500);
        while Instant::now() < cooldown_end {
            let _ = rx.recv_timeout(Duration::from_millis(50));
        }
        for path in snapshots.refresh_all() {
            state.add_change(path);
        }

        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(Duration::from_millis(50)) {
                let path = normalize(&path);
                if snapshots.refresh(&path) {
                    state.add_change(path);
                }
            }

            if state.should_run() {
                for path in state.take_changes() {
                    on_event(WatchEvent::FileChanged {
                        path: path.display().to_string(),
                    });
                }
                self.run_once(inject_events, &on_event);
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    /// One inject run with a freshly loaded manifest
    pub(crate) fn run_once(&self, inject_events: &dyn InjectEventSink, on_event: &impl Fn(WatchEvent)) {
        on_event(WatchEvent::InjectStarted);

        let manifest = match load_manifest(&ManifestSource::File(self.options.stats.clone())) {
            Ok(manifest) => manifest,
            Err(e) => {
                on_event(WatchEvent::Error {
                    message: e.to_string(),
                });
                return;
            }
        };

        let inject = InjectUseCase::new(LocalFs::new());
        let report = inject.execute(
            &manifest,
            &self.options.specs,
            &InjectOptions::new(),
            inject_events,
        );

        on_event(WatchEvent::InjectComplete {
            written: report.written_count(),
            failed: report.failed_count(),
            skipped: report.skipped_count(),
            missing: report.missing_count(),
        });
    }
}

/// Last seen contents of every watched file (`None` while it is missing)
#[derive(Debug, Default)]
pub(crate) struct Snapshots {
    contents: HashMap<PathBuf, Option<Vec<u8>>>,
}

impl Snapshots {
    pub(crate) fn capture(paths: &[PathBuf]) -> Self {
        Self {
            contents: paths
                .iter()
                .map(|p| (p.clone(), std::fs::read(p).ok()))
                .collect(),
        }
    }

    /// Re-read `path`; true when it is watched and its content changed
    pub(crate) fn refresh(&mut self, path: &Path) -> bool {
        let Some(snapshot) = self.contents.get_mut(path) else {
            return false;
        };

        let current = std::fs::read(path).ok();
        if *snapshot == current {
            return false;
        }
        *snapshot = current;
        true
    }

    /// Re-read every watched file and return the ones that changed, sorted
    pub(crate) fn refresh_all(&mut self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.contents.keys().cloned().collect();
        paths.sort();
        paths.retain(|p| self.refresh(p));
        paths
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Absolute form of `path` that also works for files that do not exist yet
pub(crate) fn normalize(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    match path.file_name() {
        Some(name) => parent_dir(path)
            .canonicalize()
            .map(|parent| parent.join(name))
            .unwrap_or_else(|_| path.to_path_buf()),
        None => path.to_path_buf(),
    }
}
