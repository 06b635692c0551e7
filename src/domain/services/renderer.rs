//! Template Renderer
//!
//! Replaces mount-point regions with grouped markup. A region for key
//! `chunk_main_js` looks like:
//!
//! ```text
//! <!-- chunk_main_js -->
//! anything, including newlines
//! <!-- /chunk_main_js -->
//! ```
//!
//! Matching rules:
//! - markers are case-insensitive
//! - one optional space after `<!--` and before `-->`
//! - the region ends at the nearest closing marker for the same key
//! - every region for a key is replaced, markers included
//! - an opening marker with no closing marker does not count as a region

use regex::{NoExpand, Regex, RegexBuilder};

use crate::domain::entities::MarkupGroups;
use crate::error::BundleHashResult;

/// Result of rendering one template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    pub content: String,
    /// Group keys with no mount point in the template, in group order
    pub missing: Vec<String>,
}

impl RenderOutput {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Compiled matcher for the regions of one mount key
#[derive(Debug, Clone)]
pub struct MountPoint {
    pattern: Regex,
}

impl MountPoint {
    pub fn new(key: &str) -> BundleHashResult<Self> {
        let key = regex::escape(key);
        let pattern = RegexBuilder::new(&format!("<!-- ?{key} ?-->.*?<!-- ?/{key} ?-->"))
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()?;
        Ok(Self { pattern })
    }

    pub fn is_present(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Replace every region in `text` with `replacement`, taken literally
    pub fn fill(&self, text: &str, replacement: &str) -> String {
        self.pattern
            .replace_all(text, NoExpand(replacement))
            .into_owned()
    }
}

/// Fill every mount point of `template` that has a group.
///
/// Presence is checked against the original template, so markup inserted
/// for one key can never create a region for a later key.
pub fn render_template(
    template: &str,
    groups: &MarkupGroups,
    line_ending: &str,
) -> BundleHashResult<RenderOutput> {
    let mut content = template.to_string();
    let mut missing = Vec::new();

    for group in groups.iter() {
        let mount_point = MountPoint::new(group.key.as_str())?;

        if mount_point.is_present(template) {
            content = mount_point.fill(&content, &group.markup.join(line_ending));
        } else {
            missing.push(group.key.to_string());
        }
    }

    Ok(RenderOutput { content, missing })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::MountKey;

    fn groups(chunk: &str, markup: &[&str]) -> MarkupGroups {
        let mut groups = MarkupGroups::new();
        for m in markup {
            groups.push(MountKey::new("chunk", chunk, "js"), m.to_string());
        }
        groups
    }

    #[test]
    fn replaces_region_including_markers() {
        let template = "<head><!-- chunk_app_js --> old <!-- /chunk_app_js --></head>";
        let out = render_template(template, &groups("app", &["<script src=x></script>"]), "\n").unwrap();

        assert_eq!(out.content, "<head><script src=x></script></head>");
        assert!(out.is_complete());
    }

    #[test]
    fn markers_without_spaces_match() {
        let template = "a<!--chunk_app_js-->old<!--/chunk_app_js-->b";
        let out = render_template(template, &groups("app", &["X"]), "\n").unwrap();
        assert_eq!(out.content, "aXb");
    }

    #[test]
    fn markers_are_case_insensitive() {
        let template = "<!-- CHUNK_APP_JS -->old<!-- /Chunk_App_Js -->";
        let out = render_template(template, &groups("app", &["X"]), "\n").unwrap();
        assert_eq!(out.content, "X");
    }

    #[test]
    fn region_spans_newlines() {
        let template = "<body>\n<!-- chunk_app_js -->\n<script src=old.js></script>\r\n<!-- /chunk_app_js -->\n</body>";
        let out = render_template(template, &groups("app", &["a", "b"]), "\n").unwrap();
        assert_eq!(out.content, "<body>\na\nb\n</body>");
    }

    #[test]
    fn joins_with_line_ending() {
        let template = "<!-- chunk_app_js --><!-- /chunk_app_js -->";
        let out = render_template(template, &groups("app", &["a", "b", "c"]), "\r\n").unwrap();
        assert_eq!(out.content, "a\r\nb\r\nc");
    }

    #[test]
    fn replaces_every_region_for_a_key() {
        let template = "<!-- chunk_app_js -->1<!-- /chunk_app_js -->|<!-- chunk_app_js -->2<!-- /chunk_app_js -->";
        let out = render_template(template, &groups("app", &["X"]), "\n").unwrap();
        assert_eq!(out.content, "X|X");
    }

    #[test]
    fn region_ends_at_nearest_closing_marker() {
        let template = "<!-- chunk_app_js -->1<!-- /chunk_app_js -->keep<!-- /chunk_app_js -->";
        let out = render_template(template, &groups("app", &["X"]), "\n").unwrap();
        assert_eq!(out.content, "Xkeep<!-- /chunk_app_js -->");
    }

    #[test]
    fn missing_mount_point_is_reported_and_left_alone() {
        let template = "<html><!-- chunk_other_js --><!-- /chunk_other_js --></html>";
        let out = render_template(template, &groups("app", &["X"]), "\n").unwrap();

        assert_eq!(out.content, template);
        assert_eq!(out.missing, vec!["chunk_app_js".to_string()]);
    }

    #[test]
    fn unterminated_marker_counts_as_missing() {
        let template = "<!-- chunk_app_js --> no closing marker";
        let out = render_template(template, &groups("app", &["X"]), "\n").unwrap();

        assert_eq!(out.content, template);
        assert_eq!(out.missing, vec!["chunk_app_js".to_string()]);
    }

    #[test]
    fn template_regions_without_groups_are_untouched() {
        let template = "<!-- chunk_unused_js -->keep<!-- /chunk_unused_js -->";
        let out = render_template(template, &MarkupGroups::new(), "\n").unwrap();
        assert_eq!(out.content, template);
        assert!(out.missing.is_empty());
    }

    #[test]
    fn replacement_is_literal() {
        let template = "<!-- chunk_app_js --><!-- /chunk_app_js -->";
        let out = render_template(template, &groups("app", &["$1 ${0} $$"]), "\n").unwrap();
        assert_eq!(out.content, "$1 ${0} $$");
    }

    #[test]
    fn key_metacharacters_are_escaped() {
        let mut g = MarkupGroups::new();
        g.push(MountKey::new("chunk", "a.b+", "js"), "X".into());

        let literal = "<!-- chunk_a.b+_js -->old<!-- /chunk_a.b+_js -->";
        assert_eq!(render_template(literal, &g, "\n").unwrap().content, "X");

        let lookalike = "<!-- chunk_aXbb_js -->old<!-- /chunk_aXbb_js -->";
        let out = render_template(lookalike, &g, "\n").unwrap();
        assert_eq!(out.content, lookalike);
    }

    #[test]
    fn presence_is_checked_against_original_template() {
        let mut g = MarkupGroups::new();
        g.push(
            MountKey::new("chunk", "a", "js"),
            "<!-- chunk_b_js -->injected<!-- /chunk_b_js -->".into(),
        );
        g.push(MountKey::new("chunk", "b", "js"), "B".into());

        let template = "<!-- chunk_a_js --><!-- /chunk_a_js -->";
        let out = render_template(template, &g, "\n").unwrap();

        assert_eq!(out.missing, vec!["chunk_b_js".to_string()]);
        assert_eq!(out.content, "<!-- chunk_b_js -->injected<!-- /chunk_b_js -->");
    }

    #[test]
    fn does_not_mutate_input() {
        let template = String::from("<!-- chunk_app_js -->old<!-- /chunk_app_js -->");
        let before = template.clone();
        let _ = render_template(&template, &groups("app", &["X"]), "\n").unwrap();
        assert_eq!(template, before);
    }
}
