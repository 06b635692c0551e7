//! Line ending used to join the markup of one mount point

use serde::{Deserialize, Serialize};

/// Separator placed between markup snippets of the same group.
///
/// Accepts the named forms `lf`, `crlf` and `cr`; any other value is used
/// verbatim, so `"\n"` in TOML and `lf` on the command line are equivalent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LineEnding(String);

impl LineEnding {
    pub fn parse(value: &str) -> Self {
        let resolved = match value.to_lowercase().as_str() {
            "lf" => "\n",
            "crlf" => "\r\n",
            "cr" => "\r",
            _ => value,
        };
        Self(resolved.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self("\n".to_string())
    }
}

impl From<String> for LineEnding {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<LineEnding> for String {
    fn from(line_ending: LineEnding) -> Self {
        line_ending.0
    }
}
