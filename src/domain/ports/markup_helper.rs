//! Markup helper port - turns an asset URL into a markup fragment
//!
//! Helpers are registered per file extension in a [`HelperRegistry`].
//! Implementations live in `infrastructure::helpers`.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Strategy rendering the markup that references one emitted file
pub trait MarkupHelper: Send + Sync + fmt::Debug {
    /// Short strategy name for diagnostics (e.g. "script")
    fn name(&self) -> &str;

    /// Render markup for `url`. Must be pure.
    fn render(&self, url: &str) -> String;
}

/// Extension -> helper mapping.
///
/// Lookups for unregistered extensions return `None`; the grouper treats
/// that as "skip this file".
#[derive(Debug, Clone, Default)]
pub struct HelperRegistry {
    helpers: BTreeMap<String, Arc<dyn MarkupHelper>>,
}

impl HelperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `helper` for `extension`, replacing any previous entry
    pub fn register(&mut self, extension: impl Into<String>, helper: Arc<dyn MarkupHelper>) {
        self.helpers.insert(extension.into(), helper);
    }

    /// Builder form of [`HelperRegistry::register`]
    pub fn with(mut self, extension: impl Into<String>, helper: impl MarkupHelper + 'static) -> Self {
        self.register(extension, Arc::new(helper));
        self
    }

    /// Overlay `other` on top of `self`; entries in `other` win
    pub fn merge(&mut self, other: &HelperRegistry) {
        for (ext, helper) in &other.helpers {
            self.helpers.insert(ext.clone(), Arc::clone(helper));
        }
    }

    pub fn get(&self, extension: &str) -> Option<&dyn MarkupHelper> {
        self.helpers.get(extension).map(|h| h.as_ref())
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.helpers.contains_key(extension)
    }

    /// Registered extensions, sorted
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.helpers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Echo(&'static str);

    impl MarkupHelper for Echo {
        fn name(&self) -> &str {
            self.0
        }

        fn render(&self, url: &str) -> String {
            format!("{}:{}", self.0, url)
        }
    }

    #[test]
    fn lookup_unknown_extension_is_none() {
        let registry = HelperRegistry::new().with("js", Echo("js"));
        assert!(registry.get("png").is_none());
        assert!(!registry.contains("png"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = HelperRegistry::new().with("js", Echo("js"));
        assert!(registry.get("JS").is_none());
    }

    #[test]
    fn register_replaces_existing_helper() {
        let registry = HelperRegistry::new()
            .with("js", Echo("first"))
            .with("js", Echo("second"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("js").unwrap().render("a.js"), "second:a.js");
    }

    #[test]
    fn merge_overrides_and_extends() {
        let mut base = HelperRegistry::new()
            .with("js", Echo("base-js"))
            .with("css", Echo("base-css"));
        let overlay = HelperRegistry::new()
            .with("js", Echo("custom-js"))
            .with("map", Echo("map"));

        base.merge(&overlay);

        let exts: Vec<_> = base.extensions().collect();
        assert_eq!(exts, vec!["css", "js", "map"]);
        assert_eq!(base.get("js").unwrap().name(), "custom-js");
        assert_eq!(base.get("css").unwrap().name(), "base-css");
    }
}
