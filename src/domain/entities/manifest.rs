//! AssetManifest entity - the bundler's report of emitted files
//!
//! Mirrors the subset of a bundler `stats.json` the injector reads:
//!
//! ```json
//! {
//!   "publicPath": "/dist/",
//!   "assetsByChunkName": {
//!     "main": ["main.3f2a.js", "main.3f2a.css"],
//!     "vendor": "vendor.91bc.js"
//!   }
//! }
//! ```
//!
//! Chunk order is the order of the JSON object, which is why chunks are
//! kept as a list instead of a map.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One named chunk and the files emitted for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub name: String,
    pub files: Vec<String>,
}

impl Chunk {
    pub fn new(name: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }
}

/// Finished build manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetManifest {
    /// Base URL prepended to every file name (may be empty)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub public_path: String,

    #[serde(default, rename = "assetsByChunkName")]
    chunks: OrderedChunks,
}

impl AssetManifest {
    pub fn new(public_path: impl Into<String>, chunks: Vec<Chunk>) -> Self {
        Self {
            public_path: public_path.into(),
            chunks: OrderedChunks(chunks),
        }
    }

    /// Chunks in manifest order
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks.0
    }

    /// Total number of emitted files across all chunks
    pub fn file_count(&self) -> usize {
        self.chunks.0.iter().map(|c| c.files.len()).sum()
    }

    /// URL a helper receives for `file_name`
    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}{}", self.public_path, file_name)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A chunk value is either a single file name or a list of them
#[derive(Deserialize)]
#[serde(untagged)]
enum ChunkFilesDe {
    One(String),
    Many(Vec<String>),
}

impl From<ChunkFilesDe> for Vec<String> {
    fn from(files: ChunkFilesDe) -> Self {
        match files {
            ChunkFilesDe::One(name) => vec![name],
            ChunkFilesDe::Many(names) => names,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct OrderedChunks(Vec<Chunk>);

impl<'de> Deserialize<'de> for OrderedChunks {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ChunksVisitor;

        impl<'de> Visitor<'de> for ChunksVisitor {
            type Value = OrderedChunks;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of chunk names to a file name or a list of file names")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(OrderedChunks::default())
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut chunks: Vec<Chunk> = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, files)) = map.next_entry::<String, ChunkFilesDe>()? {
                    // A repeated key keeps its first position and its last value
                    match chunks.iter_mut().find(|c| c.name == name) {
                        Some(chunk) => chunk.files = files.into(),
                        None => chunks.push(Chunk::new(name, files.into())),
                    }
                }
                Ok(OrderedChunks(chunks))
            }
        }

        deserializer.deserialize_any(ChunksVisitor)
    }
}
