//! FileSpec entity - one template/target pair and how to fill it

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::ports::HelperRegistry;
use crate::domain::value_objects::{Encoding, LineEnding};

/// Prefix used for mount keys when none is configured
pub const DEFAULT_PREFIX: &str = "chunk";

/// Reasons a file spec is skipped before any I/O happens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecValidationError {
    #[error("Template file path must be defined.")]
    MissingTemplate,

    #[error("Target file path must be defined.")]
    MissingTarget,

    #[error("Template and target path must be different.")]
    SamePath { path: PathBuf },
}

/// A fully resolved injection job.
///
/// An empty `template` or `target` path means "not configured"; this is
/// reported by [`FileSpec::validate`] instead of being rejected at
/// construction so that one bad entry never hides its siblings.
#[derive(Debug, Clone)]
pub struct FileSpec {
    pub template: PathBuf,
    pub target: PathBuf,
    pub prefix: String,
    pub encoding: Encoding,
    pub line_ending: LineEnding,
    pub helpers: HelperRegistry,
}

impl FileSpec {
    pub fn new(template: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            target: target.into(),
            prefix: DEFAULT_PREFIX.to_string(),
            encoding: Encoding::default(),
            line_ending: LineEnding::default(),
            helpers: HelperRegistry::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn with_helpers(mut self, helpers: HelperRegistry) -> Self {
        self.helpers = helpers;
        self
    }

    /// Check the path invariants: both set, and not the same file
    pub fn validate(&self) -> Result<(), SpecValidationError> {
        if is_unset(&self.template) {
            return Err(SpecValidationError::MissingTemplate);
        }

        if is_unset(&self.target) {
            return Err(SpecValidationError::MissingTarget);
        }

        if self.template == self.target {
            return Err(SpecValidationError::SamePath {
                path: self.target.clone(),
            });
        }

        Ok(())
    }
}

fn is_unset(path: &Path) -> bool {
    path.as_os_str().is_empty()
}
