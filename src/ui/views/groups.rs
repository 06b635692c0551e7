use crossterm::style::Stylize;

use bundlehash::domain::entities::{FileSpec, MarkupGroups};

use crate::ui::primitives::icon::Icon;
use crate::ui::theme;

pub fn render_spec_groups(
    spec: &FileSpec,
    groups: &MarkupGroups,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {} -> {} (prefix '{}')\n",
        Icon::Progress.colored(supports_color, supports_unicode),
        spec.template.display(),
        spec.target.display(),
        spec.prefix
    );

    if groups.is_empty() {
        out.push_str("  (no markup)\n");
        return out;
    }

    for group in groups.iter() {
        let key = group.key.as_str();
        let key = if supports_color {
            format!("{}", key.with(theme::colors::INFO))
        } else {
            key.to_string()
        };
        out.push_str(&format!("  {} ({})\n", key, group.markup.len()));
        for markup in &group.markup {
            out.push_str(&format!("    {}\n", markup));
        }
    }

    out
}

pub fn render_invalid_spec(
    index: usize,
    reason: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} file #{}: {} File ignored.\n",
        Icon::Error.colored(supports_color, supports_unicode),
        index + 1,
        reason
    )
}

pub fn groups_to_json(index: usize, spec: &FileSpec, groups: &MarkupGroups) -> serde_json::Value {
    let groups: Vec<serde_json::Value> = groups
        .iter()
        .map(|g| {
            serde_json::json!({
                "key": g.key.as_str(),
                "markup": g.markup,
            })
        })
        .collect();

    serde_json::json!({
        "event": "groups",
        "index": index,
        "template": spec.template.display().to_string(),
        "target": spec.target.display().to_string(),
        "prefix": spec.prefix,
        "groups": groups,
    })
}
