//! Inject Result
//!
//! Per-spec outcomes of an inject run. Failures are recorded here instead
//! of being returned as errors so one bad spec never stops its siblings.

use std::path::PathBuf;

use crate::domain::entities::SpecValidationError;

/// What happened to one file spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecStatus {
    /// Target written
    Written,
    /// Target rendered but not written (dry run)
    Rendered { content: String },
    /// Spec failed validation, nothing was read or written
    Invalid(SpecValidationError),
    /// Template could not be read or decoded
    ReadFailed(String),
    /// Template is empty, nothing was rendered or written
    EmptyTemplate,
    /// Mount points could not be filled
    RenderFailed(String),
    /// Target could not be encoded or written
    WriteFailed(String),
}

/// Outcome for the spec at `index`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecOutcome {
    pub index: usize,
    pub template: PathBuf,
    pub target: PathBuf,
    pub status: SpecStatus,
    /// Group keys with no mount point in the template
    pub missing: Vec<String>,
}

impl SpecOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self.status,
            SpecStatus::ReadFailed(_) | SpecStatus::RenderFailed(_) | SpecStatus::WriteFailed(_)
        )
    }

    /// Rendered content of a dry run
    pub fn rendered(&self) -> Option<&str> {
        match &self.status {
            SpecStatus::Rendered { content } => Some(content),
            _ => None,
        }
    }
}

/// Result of an inject run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectReport {
    pub outcomes: Vec<SpecOutcome>,
}

impl InjectReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets written to disk
    pub fn written(&self) -> Vec<&PathBuf> {
        self.outcomes
            .iter()
            .filter(|o| o.status == SpecStatus::Written)
            .map(|o| &o.target)
            .collect()
    }

    pub fn written_count(&self) -> usize {
        self.written().len()
    }

    pub fn rendered_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.rendered().is_some()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, SpecStatus::Invalid(_) | SpecStatus::EmptyTemplate))
            .count()
    }

    /// Total number of missing mount points across specs
    pub fn missing_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.missing.len()).sum()
    }

    pub fn is_success(&self) -> bool {
        self.failed_count() == 0 && self.skipped_count() == 0
    }
}
