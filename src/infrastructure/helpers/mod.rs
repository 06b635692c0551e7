//! Markup Helpers
//!
//! Implementations of the `MarkupHelper` port, plus the default registry
//! (`js` -> script tag, `css` -> stylesheet link).

mod script;
mod stylesheet;
mod template;

pub use script::ScriptHelper;
pub use stylesheet::StylesheetHelper;
pub use template::{TemplateHelper, URL_PLACEHOLDER};

use std::collections::BTreeMap;

use crate::domain::ports::HelperRegistry;

/// Registry with the built-in helpers
pub fn builtin_helpers() -> HelperRegistry {
    HelperRegistry::new()
        .with("js", ScriptHelper::new())
        .with("css", StylesheetHelper::new())
}

/// Registry of template helpers from an `ext -> markup` table
pub fn template_helpers(templates: &BTreeMap<String, String>) -> HelperRegistry {
    templates
        .iter()
        .fold(HelperRegistry::new(), |registry, (ext, markup)| {
            registry.with(ext.clone(), TemplateHelper::new(markup.clone()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registers_js_and_css() {
        let helpers = builtin_helpers();
        let exts: Vec<_> = helpers.extensions().collect();
        assert_eq!(exts, vec!["css", "js"]);
        assert_eq!(helpers.get("js").unwrap().name(), "script");
        assert_eq!(helpers.get("css").unwrap().name(), "stylesheet");
    }

    #[test]
    fn builtin_has_no_png_helper() {
        assert!(builtin_helpers().get("png").is_none());
    }

    #[test]
    fn template_helpers_override_builtins_when_merged() {
        let mut table = BTreeMap::new();
        table.insert("js".to_string(), "<script defer src=\"{url}\"></script>".to_string());
        table.insert("map".to_string(), "<!-- {url} -->".to_string());

        let mut helpers = builtin_helpers();
        helpers.merge(&template_helpers(&table));

        assert_eq!(helpers.len(), 3);
        assert_eq!(
            helpers.get("js").unwrap().render("a.js"),
            "<script defer src=\"a.js\"></script>"
        );
        assert_eq!(helpers.get("map").unwrap().render("a.js.map"), "<!-- a.js.map -->");
    }
}
