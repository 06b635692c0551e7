//! Diff Use Case
//!
//! Orchestrates the diff flow:
//! 1. Render every spec without writing (inject dry run)
//! 2. Read the current target contents
//! 3. Compare and return what would change
//!
//! This is essentially a dry-run of the inject use case.

use std::path::PathBuf;

use crate::domain::entities::{AssetManifest, FileSpec};
use crate::domain::ports::{FileSystem, InjectEventSink};
use crate::domain::services::{DiffResult, Differ};

use super::inject::{InjectOptions, InjectReport, InjectUseCase};

/// Type of change for a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    /// Target does not exist yet
    Create,
    /// Target exists with different content
    Update,
    /// Target already holds the rendered content
    Unchanged,
}

/// Pending change for one target
#[derive(Debug, Clone)]
pub struct TargetDiff {
    pub target: PathBuf,
    pub change_type: ChangeType,
    /// Current target content (empty when the target is new or unreadable)
    pub old_content: String,
    pub new_content: String,
    pub diff: DiffResult,
}

/// Result of the diff operation
#[derive(Debug, Clone, Default)]
pub struct DiffReport {
    /// The underlying dry run, including skipped and failed specs
    pub inject: InjectReport,
    pub entries: Vec<TargetDiff>,
}

impl DiffReport {
    pub fn has_changes(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.change_type != ChangeType::Unchanged)
    }

    pub fn changed(&self) -> impl Iterator<Item = &TargetDiff> {
        self.entries
            .iter()
            .filter(|e| e.change_type != ChangeType::Unchanged)
    }
}

/// Diff use case - previews inject without writing
pub struct DiffUseCase<FS>
where
    FS: FileSystem,
{
    inject: InjectUseCase<FS>,
    differ: Differ,
}

impl<FS> DiffUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self {
            inject: InjectUseCase::new(file_system),
            differ: Differ::new(),
        }
    }

    pub fn execute(
        &self,
        manifest: &AssetManifest,
        specs: &[FileSpec],
        events: &dyn InjectEventSink,
    ) -> DiffReport {
        let options = InjectOptions::new().with_dry_run(true);
        let inject = self.inject.execute(manifest, specs, &options, events);

        let entries = inject
            .outcomes
            .iter()
            .filter_map(|outcome| {
                let new_content = outcome.rendered()?;
                let spec = specs.get(outcome.index)?;
                Some(self.diff_target(spec, new_content))
            })
            .collect();

        DiffReport { inject, entries }
    }

    fn diff_target(&self, spec: &FileSpec, new_content: &str) -> TargetDiff {
        let fs = self.inject.file_system();
        let exists = fs.exists(&spec.target);
        let old_content = fs
            .read(&spec.target)
            .ok()
            .and_then(|bytes| spec.encoding.decode(&bytes).ok())
            .unwrap_or_default();

        let change_type = if !exists {
            ChangeType::Create
        } else if old_content == new_content {
            ChangeType::Unchanged
        } else {
            ChangeType::Update
        };

        TargetDiff {
            target: spec.target.clone(),
            change_type,
            diff: self.differ.diff(&old_content, new_content),
            old_content,
            new_content: new_content.to_string(),
        }
    }
}
