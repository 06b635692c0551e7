pub mod diff;
pub mod groups;
pub mod inject;
pub mod watch;

use anyhow::{Context, Result};

use bundlehash::domain::ports::InjectEventSink;
use bundlehash::infrastructure::{ConsoleEventSink, JsonEventSink};
use bundlehash::presentation::{resolve_input, InputArgs, ResolvedInput};

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Resolve config/env/CLI input and surface config warnings
pub fn prepare(input: &InputArgs, ui: &UiContext) -> Result<ResolvedInput> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let resolved = resolve_input(input, &cwd)?;

    if let Some(path) = &resolved.config_path {
        if ui.json {
            for w in &resolved.warnings {
                println!(
                    "{}",
                    serde_json::json!({
                        "event": "config_warning",
                        "key": w.key,
                        "file": w.file.display().to_string(),
                        "line": w.line,
                        "suggestion": w.suggestion,
                    })
                );
            }
        } else {
            print_config_warnings(path, &resolved.warnings, ui.color, ui.unicode);
        }
    }

    Ok(resolved)
}

/// Event sink matching the output mode
pub fn event_sink(ui: &UiContext) -> Box<dyn InjectEventSink> {
    if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdio(ui.color, ui.verbose))
    }
}
