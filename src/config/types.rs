//! Configuration type definitions

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::domain::entities::{FileSpec, DEFAULT_PREFIX};
use crate::domain::ports::HelperRegistry;
use crate::domain::value_objects::{Encoding, LineEnding};
use crate::error::BundleHashResult;
use crate::infrastructure::helpers::{builtin_helpers, template_helpers};

use super::loader::{self, ConfigWarning};

/// Top-level `bundlehash.toml`
///
/// Every scalar is optional so that the resolution layers (file, env, CLI)
/// can tell "unset" apart from "set to the default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Separator between snippets of one mount point
    pub line_ending: Option<LineEnding>,

    /// Template and target encoding
    pub encoding: Option<Encoding>,

    /// Mount key prefix
    pub prefix: Option<String>,

    /// Extension -> markup template containing `{url}`
    #[serde(default)]
    pub helpers: BTreeMap<String, String>,

    /// `[[file]]` array or a single `[file]` table
    #[serde(default, rename = "file", deserialize_with = "one_or_many")]
    pub files: Vec<FileEntry>,
}

/// One `[[file]]` entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    pub template: Option<PathBuf>,
    pub target: Option<PathBuf>,
    pub prefix: Option<String>,
    pub encoding: Option<Encoding>,
    pub line_ending: Option<LineEnding>,

    /// Merged over the top-level `[helpers]`
    #[serde(default)]
    pub helpers: BTreeMap<String, String>,
}

impl FileEntry {
    pub fn new(template: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            template: Some(template.into()),
            target: Some(target.into()),
            ..Self::default()
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BundleHashResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> BundleHashResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve every entry into a [`FileSpec`], in configuration order.
    ///
    /// Per-file values win over top-level ones, which win over the built-in
    /// defaults. Helpers layer the same way: built-ins, then `[helpers]`,
    /// then the entry's own `helpers`. A missing path resolves to an empty
    /// one and is reported later by validation.
    pub fn file_specs(&self) -> Vec<FileSpec> {
        let mut shared_helpers = builtin_helpers();
        shared_helpers.merge(&template_helpers(&self.helpers));

        self.files
            .iter()
            .map(|entry| self.resolve_entry(entry, &shared_helpers))
            .collect()
    }

    fn resolve_entry(&self, entry: &FileEntry, shared_helpers: &HelperRegistry) -> FileSpec {
        let mut helpers = shared_helpers.clone();
        helpers.merge(&template_helpers(&entry.helpers));

        let prefix = entry
            .prefix
            .as_deref()
            .or(self.prefix.as_deref())
            .unwrap_or(DEFAULT_PREFIX);
        let encoding = entry.encoding.or(self.encoding).unwrap_or_default();
        let line_ending = entry
            .line_ending
            .clone()
            .or_else(|| self.line_ending.clone())
            .unwrap_or_default();

        FileSpec::new(
            entry.template.clone().unwrap_or_default(),
            entry.target.clone().unwrap_or_default(),
        )
        .with_prefix(prefix)
        .with_encoding(encoding)
        .with_line_ending(line_ending)
        .with_helpers(helpers)
    }
}

/// Accept either a single table or an array of tables.
///
/// Written as a visitor rather than an untagged enum so that unknown keys
/// inside entries still reach `serde_ignored`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<FileEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<FileEntry>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a [file] table or an array of [[file]] tables")
        }

        fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let entry = FileEntry::deserialize(de::value::MapAccessDeserializer::new(map))?;
            Ok(vec![entry])
        }

        fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            Vec::<FileEntry>::deserialize(de::value::SeqAccessDeserializer::new(seq))
        }
    }

    deserializer.deserialize_any(EntriesVisitor)
}
