//! Mount key value object - `prefix_chunk_ext` composite names
//!
//! A mount key names both a markup group and the template region it fills.

/// Extension of an emitted file name, without the leading dot.
///
/// Only the base name (after the last `/` or `\`) is considered. A base name
/// with no dot, or whose only dot is the leading one (`.htaccess`), has an
/// empty extension. Case is preserved.
pub fn file_extension(file_name: &str) -> &str {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);

    match base.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &base[idx + 1..],
    }
}

/// Composite key for one (prefix, chunk, extension) triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountKey(String);

impl MountKey {
    pub fn new(prefix: &str, chunk_name: &str, extension: &str) -> Self {
        Self(format!("{prefix}_{chunk_name}_{extension}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for MountKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<MountKey> for String {
    fn from(key: MountKey) -> Self {
        key.0
    }
}
