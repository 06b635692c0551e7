use anyhow::Result;

use bundlehash::infrastructure::load_manifest;
use bundlehash::presentation::{create_diff_use_case, InputArgs};

use crate::ui::context::UiContext;
use crate::ui::views::diff::{diff_to_json, render_diff_summary, render_target_diff};

pub fn cmd_diff(input: &InputArgs, ui: &UiContext) -> Result<()> {
    let resolved = super::prepare(input, ui)?;
    let manifest = load_manifest(&resolved.manifest)?;

    let sink = super::event_sink(ui);
    let report = create_diff_use_case().execute(&manifest, &resolved.specs, sink.as_ref());

    if ui.json {
        for entry in &report.entries {
            println!("{}", diff_to_json(entry));
        }
        return Ok(());
    }

    for entry in report.changed() {
        print!("{}", render_target_diff(entry, ui.color));
    }
    print!("{}", render_diff_summary(&report, ui.color, ui.unicode));

    Ok(())
}
