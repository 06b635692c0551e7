//! Script helper - `<script>` tag for JavaScript bundles

use crate::domain::ports::MarkupHelper;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptHelper;

impl ScriptHelper {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupHelper for ScriptHelper {
    fn name(&self) -> &str {
        "script"
    }

    fn render(&self, url: &str) -> String {
        format!(r#"<script type="text/javascript" src="{url}"></script>"#)
    }
}
