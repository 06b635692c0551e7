//! Stylesheet helper - `<link rel="stylesheet">` for CSS bundles

use crate::domain::ports::MarkupHelper;

#[derive(Debug, Clone, Copy, Default)]
pub struct StylesheetHelper;

impl StylesheetHelper {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupHelper for StylesheetHelper {
    fn name(&self) -> &str {
        "stylesheet"
    }

    fn render(&self, url: &str) -> String {
        format!(r#"<link rel="stylesheet" type="text/css" href="{url}">"#)
    }
}
