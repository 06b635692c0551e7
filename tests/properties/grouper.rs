//! Property tests for manifest grouping.

use proptest::prelude::*;

use bundlehash::infrastructure::builtin_helpers;
use bundlehash::{group_assets, AssetManifest, Chunk};

fn chunk_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,8}").unwrap()
}

fn file_name() -> impl Strategy<Value = String> {
    (
        proptest::string::string_regex("[a-z0-9]{1,8}").unwrap(),
        prop_oneof![Just("js"), Just("css"), Just("map"), Just("png"), Just("")],
    )
        .prop_map(|(stem, ext)| {
            if ext.is_empty() {
                stem
            } else {
                format!("{stem}.{ext}")
            }
        })
}

fn manifest() -> impl Strategy<Value = AssetManifest> {
    (
        prop_oneof![
            Just(""),
            Just("/"),
            Just("/dist/"),
            Just("https://cdn.example.com/")
        ],
        proptest::collection::vec(
            (chunk_name(), proptest::collection::vec(file_name(), 0..6)),
            0..5,
        ),
    )
        .prop_map(|(public_path, chunks)| {
            AssetManifest::new(
                public_path,
                chunks
                    .into_iter()
                    .map(|(name, files)| Chunk::new(name, files))
                    .collect(),
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every file with a helper yields exactly one snippet.
    #[test]
    fn property_snippet_count_matches_helped_files(m in manifest()) {
        let groups = group_assets(&m, "chunk", &builtin_helpers());

        let expected = m
            .chunks()
            .iter()
            .flat_map(|c| &c.files)
            .filter(|f| f.ends_with(".js") || f.ends_with(".css"))
            .count();

        prop_assert_eq!(groups.snippet_count(), expected);
    }

    /// PROPERTY: snippets inside a key keep manifest file order.
    #[test]
    fn property_snippets_keep_file_order(m in manifest()) {
        let groups = group_assets(&m, "chunk", &builtin_helpers());

        for group in groups.iter() {
            let mut expected = Vec::new();
            for chunk in m.chunks() {
                for file in &chunk.files {
                    if group.key.as_str() == format!("chunk_{}_js", chunk.name) && file.ends_with(".js") {
                        expected.push(m.url_for(file));
                    }
                }
            }
            if group.key.as_str().ends_with("_js") {
                prop_assert_eq!(group.markup.len(), expected.len());
                for (markup, url) in group.markup.iter().zip(&expected) {
                    prop_assert!(markup.contains(url.as_str()));
                }
            }
        }
    }

    /// PROPERTY: every key starts with the prefix.
    #[test]
    fn property_keys_carry_prefix(m in manifest(), prefix in "[a-z]{1,6}") {
        let groups = group_assets(&m, &prefix, &builtin_helpers());
        let expected_start = format!("{}_", prefix);
        for key in groups.keys() {
            prop_assert!(key.starts_with(&expected_start));
        }
    }
}
