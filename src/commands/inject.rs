use anyhow::Result;

use bundlehash::application::InjectOptions;
use bundlehash::infrastructure::load_manifest;
use bundlehash::presentation::{create_inject_use_case, InputArgs};

use crate::ui::context::UiContext;

pub fn cmd_inject(input: &InputArgs, dry_run: bool, ui: &UiContext) -> Result<()> {
    let resolved = super::prepare(input, ui)?;
    let manifest = load_manifest(&resolved.manifest)?;

    let sink = super::event_sink(ui);
    let options = InjectOptions::new().with_dry_run(dry_run);

    // Per-spec failures are reported through the sink; the run itself
    // still succeeds.
    create_inject_use_case().execute(&manifest, &resolved.specs, &options, sink.as_ref());

    Ok(())
}
