//! Property tests for mount point rendering.

use proptest::prelude::*;

use bundlehash::domain::value_objects::MountKey;
use bundlehash::{render_template, MarkupGroups};

fn groups(markup: Vec<String>) -> MarkupGroups {
    let mut groups = MarkupGroups::new();
    for m in markup {
        groups.push(MountKey::new("chunk", "main", "js"), m);
    }
    groups
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rendering never panics on arbitrary templates and markup.
    #[test]
    fn property_render_never_panics(
        template in "(?s).{0,256}",
        markup in proptest::collection::vec("(?s).{0,32}", 0..4),
    ) {
        let _ = render_template(&template, &groups(markup), "\n");
    }

    /// PROPERTY: a template without markers comes back unchanged and the
    /// key is reported missing.
    #[test]
    fn property_template_without_markers_is_unchanged(
        template in "[^<]{0,128}",
        markup in proptest::collection::vec("[a-z<>/ ]{1,16}", 1..4),
    ) {
        let out = render_template(&template, &groups(markup), "\n").unwrap();
        prop_assert_eq!(out.content, template);
        prop_assert_eq!(out.missing, vec!["chunk_main_js".to_string()]);
    }

    /// PROPERTY: a filled region keeps the surrounding text and contains
    /// the markup joined by the line ending.
    #[test]
    fn property_fill_keeps_surroundings(
        before in "[a-z \n]{0,32}",
        after in "[a-z \n]{0,32}",
        old in "[a-z \n]{0,32}",
        markup in proptest::collection::vec("[a-z$0-9{}]{1,16}", 1..4),
    ) {
        let template = format!("{before}<!-- chunk_main_js -->{old}<!-- /chunk_main_js -->{after}");
        let out = render_template(&template, &groups(markup.clone()), "\r\n").unwrap();

        prop_assert_eq!(out.content.clone(), format!("{before}{}{after}", markup.join("\r\n")));
        prop_assert!(out.is_complete());
    }
}
