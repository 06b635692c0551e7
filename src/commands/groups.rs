use anyhow::Result;

use bundlehash::domain::services::group_assets;
use bundlehash::infrastructure::load_manifest;
use bundlehash::presentation::InputArgs;

use crate::ui::context::UiContext;
use crate::ui::views::groups::{groups_to_json, render_invalid_spec, render_spec_groups};

pub fn cmd_groups(input: &InputArgs, ui: &UiContext) -> Result<()> {
    let resolved = super::prepare(input, ui)?;
    let manifest = load_manifest(&resolved.manifest)?;

    if resolved.specs.is_empty() && !ui.json {
        eprintln!("No files to handle!");
    }

    for (index, spec) in resolved.specs.iter().enumerate() {
        if let Err(err) = spec.validate() {
            if ui.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "event": "spec_invalid",
                        "index": index,
                        "reason": err.to_string(),
                    })
                );
            } else {
                eprint!("{}", render_invalid_spec(index, &err.to_string(), ui.color, ui.unicode));
            }
            continue;
        }

        let groups = group_assets(&manifest, &spec.prefix, &spec.helpers);
        if ui.json {
            println!("{}", groups_to_json(index, spec, &groups));
        } else {
            print!("{}", render_spec_groups(spec, &groups, ui.color, ui.unicode));
        }
    }

    Ok(())
}
