//! Manifest loading
//!
//! Reads bundler stats JSON from a file, or from stdin when the path is `-`.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::domain::entities::AssetManifest;
use crate::error::{BundleHashError, BundleHashResult};

/// Where the stats JSON comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    Stdin,
    File(PathBuf),
}

impl ManifestSource {
    /// `-` selects stdin, anything else is a file path
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            ManifestSource::Stdin
        } else {
            ManifestSource::File(arg.to_path_buf())
        }
    }

    /// Name used in error messages
    pub fn display_name(&self) -> String {
        match self {
            ManifestSource::Stdin => "<stdin>".to_string(),
            ManifestSource::File(path) => path.display().to_string(),
        }
    }

    /// File path to watch, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            ManifestSource::Stdin => None,
            ManifestSource::File(path) => Some(path),
        }
    }
}

/// Parse stats JSON text
pub fn parse_manifest(json: &str, source_name: &str) -> BundleHashResult<AssetManifest> {
    serde_json::from_str(json).map_err(|e| BundleHashError::InvalidManifest {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}

/// Read and parse the manifest from its source
pub fn load_manifest(source: &ManifestSource) -> BundleHashResult<AssetManifest> {
    let json = match source {
        ManifestSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        ManifestSource::File(path) => {
            std::fs::read_to_string(path).map_err(|e| BundleHashError::InvalidManifest {
                source_name: path.display().to_string(),
                message: e.to_string(),
            })?
        }
    };

    parse_manifest(&json, &source.display_name())
}
