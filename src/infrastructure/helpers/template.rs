//! Template helper - markup declared in config with a `{url}` placeholder
//!
//! ```toml
//! [helpers]
//! map = '<link rel="sourcemap" href="{url}">'
//! ```

use crate::domain::ports::MarkupHelper;

/// Placeholder replaced by the asset URL
pub const URL_PLACEHOLDER: &str = "{url}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateHelper {
    template: String,
}

impl TemplateHelper {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl MarkupHelper for TemplateHelper {
    fn name(&self) -> &str {
        "template"
    }

    fn render(&self, url: &str) -> String {
        self.template.replace(URL_PLACEHOLDER, url)
    }
}
