//! Configuration warning value object.

use std::path::PathBuf;

/// Non-fatal warning raised while loading `bundlehash.toml`
/// (currently: keys the config schema does not know).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key (last path segment)
    pub key: String,
    /// Config file the key was found in
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, if found
    pub line: Option<usize>,
    /// Closest known key, if one is near enough
    pub suggestion: Option<String>,
}
