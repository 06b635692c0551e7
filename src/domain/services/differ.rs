//! Differ Domain Service
//!
//! Line diff between an existing target file and freshly rendered output,
//! used by the `diff` command.

use similar::{ChangeTag, TextDiff};

/// A single line in a diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub tag: DiffTag,
    /// Line number in the old version (1-indexed)
    pub old_line: Option<usize>,
    /// Line number in the new version (1-indexed)
    pub new_line: Option<usize>,
    /// Line content without its trailing newline
    pub content: String,
}

/// Type of change in a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTag {
    Delete,
    Insert,
    Equal,
}

impl From<ChangeTag> for DiffTag {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Delete => DiffTag::Delete,
            ChangeTag::Insert => DiffTag::Insert,
            ChangeTag::Equal => DiffTag::Equal,
        }
    }
}

/// Result of a diff operation
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    pub lines: Vec<DiffLine>,
    pub additions: usize,
    pub deletions: usize,
}

impl DiffResult {
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }

    /// Short summary, e.g. "+5, -3"
    pub fn summary(&self) -> String {
        format!("+{}, -{}", self.additions, self.deletions)
    }
}

/// Differ service for comparing target contents
#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    pub fn new() -> Self {
        Self
    }

    /// Diff `old` against `new` line by line
    pub fn diff(&self, old: &str, new: &str) -> DiffResult {
        let text_diff = TextDiff::from_lines(old, new);
        let mut result = DiffResult::default();

        for change in text_diff.iter_all_changes() {
            let tag = DiffTag::from(change.tag());
            match tag {
                DiffTag::Delete => result.deletions += 1,
                DiffTag::Insert => result.additions += 1,
                DiffTag::Equal => {}
            }

            result.lines.push(DiffLine {
                tag,
                old_line: change.old_index().map(|i| i + 1),
                new_line: change.new_index().map(|i| i + 1),
                content: change
                    .value()
                    .trim_end_matches(['\n', '\r'])
                    .to_string(),
            });
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_identical_strings() {
        let result = Differ::new().diff("<html>\n</html>\n", "<html>\n</html>\n");
        assert!(!result.has_changes());
        assert_eq!(result.summary(), "+0, -0");
    }

    #[test]
    fn diff_replaced_mount_point() {
        let old = "<head>\n<!-- chunk_main_js --><!-- /chunk_main_js -->\n</head>\n";
        let new = "<head>\n<script src=\"main.1.js\"></script>\n</head>\n";

        let result = Differ::new().diff(old, new);

        assert!(result.has_changes());
        assert_eq!(result.additions, 1);
        assert_eq!(result.deletions, 1);
    }

    #[test]
    fn diff_against_empty_target() {
        let result = Differ::new().diff("", "a\nb\n");
        assert_eq!(result.additions, 2);
        assert_eq!(result.deletions, 0);
    }

    #[test]
    fn diff_line_numbers_and_content() {
        let result = Differ::new().diff("a\nb\nc\n", "a\nX\nc\n");

        let deleted = result.lines.iter().find(|l| l.tag == DiffTag::Delete).unwrap();
        assert_eq!(deleted.old_line, Some(2));
        assert_eq!(deleted.content, "b");

        let inserted = result.lines.iter().find(|l| l.tag == DiffTag::Insert).unwrap();
        assert_eq!(inserted.new_line, Some(2));
        assert_eq!(inserted.content, "X");
    }
}
