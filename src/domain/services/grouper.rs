//! Manifest Grouper
//!
//! Walks the manifest once and renders markup for every file whose
//! extension has a helper, grouped under `prefix_chunk_ext` keys.

use crate::domain::entities::{AssetManifest, MarkupGroups};
use crate::domain::ports::HelperRegistry;
use crate::domain::value_objects::{file_extension, MountKey};

/// Group manifest files into rendered markup.
///
/// Keys appear in first-seen order (manifest chunk order, then file order
/// inside a chunk). Files with no registered helper are skipped silently.
/// Duplicate file names are kept as separate snippets.
pub fn group_assets(
    manifest: &AssetManifest,
    prefix: &str,
    helpers: &HelperRegistry,
) -> MarkupGroups {
    let mut groups = MarkupGroups::new();

    for chunk in manifest.chunks() {
        for file_name in &chunk.files {
            let ext = file_extension(file_name);
            let Some(helper) = helpers.get(ext) else {
                continue;
            };

            let key = MountKey::new(prefix, &chunk.name, ext);
            groups.push(key, helper.render(&manifest.url_for(file_name)));
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Chunk;
    use crate::domain::ports::MarkupHelper;

    #[derive(Debug)]
    struct SingleQuoteScript;

    impl MarkupHelper for SingleQuoteScript {
        fn name(&self) -> &str {
            "script"
        }

        fn render(&self, url: &str) -> String {
            format!("<script src='{url}'></script>")
        }
    }

    #[derive(Debug)]
    struct Link;

    impl MarkupHelper for Link {
        fn name(&self) -> &str {
            "link"
        }

        fn render(&self, url: &str) -> String {
            format!("<link href='{url}'>")
        }
    }

    fn helpers() -> HelperRegistry {
        HelperRegistry::new()
            .with("js", SingleQuoteScript)
            .with("css", Link)
    }

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_chunk_single_file() {
        let manifest = AssetManifest::new("/dist/", vec![Chunk::new("main", files(&["main.abc123.js"]))]);

        let groups = group_assets(&manifest, "chunk", &helpers());

        assert_eq!(groups.len(), 1);
        assert_eq!(
            groups.get("chunk_main_js").unwrap(),
            &["<script src='/dist/main.abc123.js'></script>"]
        );
    }

    #[test]
    fn splits_chunk_by_extension() {
        let manifest = AssetManifest::new(
            "",
            vec![Chunk::new("app", files(&["app.1.js", "app.1.css", "app.2.js"]))],
        );

        let groups = group_assets(&manifest, "chunk", &helpers());

        let keys: Vec<_> = groups.keys().collect();
        assert_eq!(keys, vec!["chunk_app_js", "chunk_app_css"]);
        assert_eq!(
            groups.get("chunk_app_js").unwrap(),
            &[
                "<script src='app.1.js'></script>",
                "<script src='app.2.js'></script>"
            ]
        );
    }

    #[test]
    fn skips_unknown_extensions() {
        let manifest = AssetManifest::new(
            "",
            vec![Chunk::new("main", files(&["logo.png", "main.js.map", "README"]))],
        );

        let groups = group_assets(&manifest, "chunk", &helpers());

        assert!(groups.is_empty());
    }

    #[test]
    fn keys_follow_manifest_order() {
        let manifest = AssetManifest::new(
            "",
            vec![
                Chunk::new("vendor", files(&["vendor.js"])),
                Chunk::new("main", files(&["main.css", "main.js"])),
            ],
        );

        let groups = group_assets(&manifest, "p", &helpers());

        let keys: Vec<_> = groups.keys().collect();
        assert_eq!(keys, vec!["p_vendor_js", "p_main_css", "p_main_js"]);
    }

    #[test]
    fn extension_case_is_preserved() {
        let manifest = AssetManifest::new("", vec![Chunk::new("main", files(&["MAIN.JS"]))]);

        assert!(group_assets(&manifest, "chunk", &helpers()).is_empty());

        let upper = HelperRegistry::new().with("JS", SingleQuoteScript);
        let groups = group_assets(&manifest, "chunk", &upper);
        assert!(groups.get("chunk_main_JS").is_some());
    }

    #[test]
    fn duplicate_files_are_kept() {
        let manifest = AssetManifest::new("", vec![Chunk::new("main", files(&["a.js", "a.js"]))]);

        let groups = group_assets(&manifest, "chunk", &helpers());

        assert_eq!(groups.get("chunk_main_js").unwrap().len(), 2);
    }

    #[test]
    fn empty_registry_yields_nothing() {
        let manifest = AssetManifest::new("", vec![Chunk::new("main", files(&["a.js"]))]);
        assert!(group_assets(&manifest, "chunk", &HelperRegistry::new()).is_empty());
    }
}
