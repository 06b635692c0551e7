//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up, and turns
//! CLI input into resolved file specs. This is the dependency injection
//! point for the application.

use std::path::{Path, PathBuf};

use crate::application::{DiffUseCase, InjectUseCase};
use crate::config::{self, Config, ConfigWarning, FileEntry};
use crate::domain::entities::FileSpec;
use crate::domain::value_objects::{Encoding, LineEnding};
use crate::error::BundleHashResult;
use crate::infrastructure::fs::LocalFs;
use crate::infrastructure::manifest::ManifestSource;

use super::cli::InputArgs;

/// Type alias for the concrete InjectUseCase
pub type ConcreteInjectUseCase = InjectUseCase<LocalFs>;

/// Type alias for the concrete DiffUseCase
pub type ConcreteDiffUseCase = DiffUseCase<LocalFs>;

/// Create an inject use case writing to the local disk
pub fn create_inject_use_case() -> ConcreteInjectUseCase {
    InjectUseCase::new(LocalFs::new())
}

/// Create a diff use case reading from the local disk
pub fn create_diff_use_case() -> ConcreteDiffUseCase {
    DiffUseCase::new(LocalFs::new())
}

/// Everything a command needs from its input arguments
#[derive(Debug, Clone)]
pub struct ResolvedInput {
    pub manifest: ManifestSource,
    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
    pub specs: Vec<FileSpec>,
}

/// Resolve config file, env and CLI layers into file specs
pub fn resolve_input(input: &InputArgs, cwd: &Path) -> BundleHashResult<ResolvedInput> {
    let config_path = config::discover(input.config.as_deref(), cwd);
    let (config, warnings) = config::load_or_default(input.config.as_deref(), cwd)?;
    let config = apply_cli_overrides(config, input)?;

    Ok(ResolvedInput {
        manifest: ManifestSource::from_arg(&input.stats),
        config_path,
        warnings,
        specs: config.file_specs(),
    })
}

/// Apply CLI flags on top of an already env-resolved config
pub fn apply_cli_overrides(mut config: Config, input: &InputArgs) -> BundleHashResult<Config> {
    if let Some(prefix) = &input.prefix {
        config.prefix = Some(prefix.clone());
    }

    if let Some(encoding) = &input.encoding {
        let encoding: Encoding = encoding.parse()?;
        config.encoding = Some(encoding);
    }

    if let Some(line_ending) = &input.line_ending {
        config.line_ending = Some(LineEnding::parse(line_ending));
    }

    if let (Some(template), Some(target)) = (&input.template, &input.target) {
        config.files = vec![FileEntry::new(template, target)];
    }

    Ok(config)
}
