//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{Encoding, LineEnding};
use crate::error::{BundleHashError, BundleHashResult};

pub use crate::domain::value_objects::ConfigWarning;

use super::types::Config;

/// Config file picked up from the working directory
pub const CONFIG_FILE_NAME: &str = "bundlehash.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BundleHashResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BundleHashError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Config file to use: the explicit one, else `bundlehash.toml` in `cwd`
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let candidate = cwd.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Load the discovered config (or defaults), then apply env overrides
pub fn load_or_default(
    explicit: Option<&Path>,
    cwd: &Path,
) -> BundleHashResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match discover(explicit, cwd) {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config)?, warnings))
}

/// Apply environment variable overrides (BUNDLEHASH_* prefix)
pub fn with_env_overrides(config: Config) -> BundleHashResult<Config> {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

fn with_overrides_from(
    mut config: Config,
    var: impl Fn(&str) -> Option<String>,
) -> BundleHashResult<Config> {
    // BUNDLEHASH_PREFIX
    if let Some(prefix) = var("BUNDLEHASH_PREFIX") {
        config.prefix = Some(prefix);
    }

    // BUNDLEHASH_ENCODING
    if let Some(encoding) = var("BUNDLEHASH_ENCODING") {
        let encoding: Encoding = encoding.parse()?;
        config.encoding = Some(encoding);
    }

    // BUNDLEHASH_LINE_ENDING
    if let Some(line_ending) = var("BUNDLEHASH_LINE_ENDING") {
        config.line_ending = Some(LineEnding::parse(&line_ending));
    }

    Ok(config)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "line_ending",
        "encoding",
        "prefix",
        "helpers",
        "file",
        "template",
        "target",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(super) fn overrides_from(
    config: Config,
    var: impl Fn(&str) -> Option<String>,
) -> BundleHashResult<Config> {
    with_overrides_from(config, var)
}

#[cfg(test)]
pub(super) fn suggest(unknown: &str) -> Option<String> {
    suggest_key(unknown)
}
