//! Inject Use Case
//!
//! Runs every file spec through the same pipeline:
//! 1. Validate the spec paths
//! 2. Group manifest files into markup for the spec's prefix and helpers
//! 3. Read and decode the template (an empty one ends the spec)
//! 4. Fill mount points
//! 5. Encode and write the target (skipped in dry-run mode)
//!
//! Specs are processed sequentially and independently. Every step that
//! can fail ends only the current spec.

use crate::domain::entities::{AssetManifest, FileSpec};
use crate::domain::ports::{FileSystem, InjectEvent, InjectEventSink};
use crate::domain::services::{group_assets, render_template};

use super::options::InjectOptions;
use super::result::{InjectReport, SpecOutcome, SpecStatus};

/// Inject use case, parameterized by the file system port
pub struct InjectUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
}

impl<FS> InjectUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    /// Process `specs` in order against one manifest
    pub fn execute(
        &self,
        manifest: &AssetManifest,
        specs: &[FileSpec],
        options: &InjectOptions,
        events: &dyn InjectEventSink,
    ) -> InjectReport {
        events.on_event(InjectEvent::Started {
            spec_count: specs.len(),
        });

        let mut report = InjectReport::new();

        if specs.is_empty() {
            events.on_event(InjectEvent::NoFiles);
        }

        for (index, spec) in specs.iter().enumerate() {
            let outcome = self.process(index, manifest, spec, options, events);
            report.outcomes.push(outcome);
        }

        events.on_event(InjectEvent::Completed {
            written: report.written_count(),
            rendered: report.rendered_count(),
            failed: report.failed_count(),
            skipped: report.skipped_count(),
        });

        report
    }

    fn process(
        &self,
        index: usize,
        manifest: &AssetManifest,
        spec: &FileSpec,
        options: &InjectOptions,
        events: &dyn InjectEventSink,
    ) -> SpecOutcome {
        let mut outcome = SpecOutcome {
            index,
            template: spec.template.clone(),
            target: spec.target.clone(),
            status: SpecStatus::Written,
            missing: Vec::new(),
        };

        if let Err(err) = spec.validate() {
            events.on_event(InjectEvent::SpecInvalid {
                index,
                reason: err.to_string(),
            });
            outcome.status = SpecStatus::Invalid(err);
            return outcome;
        }

        let groups = group_assets(manifest, &spec.prefix, &spec.helpers);
        if events.wants_detailed_events() {
            events.on_event(InjectEvent::GroupsBuilt {
                index,
                template: spec.template.clone(),
                group_count: groups.len(),
                snippet_count: groups.snippet_count(),
            });
        }

        let template = match self.read_template(spec) {
            Ok(template) => template,
            Err(error) => {
                events.on_event(InjectEvent::TemplateReadFailed {
                    index,
                    path: spec.template.clone(),
                    error: error.clone(),
                });
                outcome.status = SpecStatus::ReadFailed(error);
                return outcome;
            }
        };

        if template.is_empty() {
            events.on_event(InjectEvent::TemplateEmpty {
                index,
                path: spec.template.clone(),
            });
            outcome.status = SpecStatus::EmptyTemplate;
            return outcome;
        }

        let rendered = match render_template(&template, &groups, spec.line_ending.as_str()) {
            Ok(rendered) => rendered,
            Err(err) => {
                let error = err.to_string();
                events.on_event(InjectEvent::RenderFailed {
                    index,
                    path: spec.template.clone(),
                    error: error.clone(),
                });
                outcome.status = SpecStatus::RenderFailed(error);
                return outcome;
            }
        };

        for key in &rendered.missing {
            events.on_event(InjectEvent::MountPointMissing {
                index,
                key: key.clone(),
                template: spec.template.clone(),
            });
        }
        outcome.missing = rendered.missing;

        if options.dry_run {
            events.on_event(InjectEvent::TargetRendered {
                index,
                path: spec.target.clone(),
            });
            outcome.status = SpecStatus::Rendered {
                content: rendered.content,
            };
            return outcome;
        }

        match self.write_target(spec, &rendered.content) {
            Ok(()) => {
                events.on_event(InjectEvent::TargetWritten {
                    index,
                    path: spec.target.clone(),
                });
            }
            Err(error) => {
                events.on_event(InjectEvent::TargetWriteFailed {
                    index,
                    path: spec.target.clone(),
                    error: error.clone(),
                });
                outcome.status = SpecStatus::WriteFailed(error);
            }
        }

        outcome
    }

    fn read_template(&self, spec: &FileSpec) -> Result<String, String> {
        let bytes = self
            .file_system
            .read(&spec.template)
            .map_err(|e| e.to_string())?;
        spec.encoding.decode(&bytes).map_err(|e| e.to_string())
    }

    fn write_target(&self, spec: &FileSpec, content: &str) -> Result<(), String> {
        let bytes = spec.encoding.encode(content).map_err(|e| e.to_string())?;
        self.file_system
            .write(&spec.target, &bytes)
            .map_err(|e| e.to_string())
    }
}
