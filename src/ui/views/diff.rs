use bundlehash::application::{ChangeType, DiffReport, TargetDiff};

use crate::ui::components::diff::render_unified_diff_with_line_numbers;
use crate::ui::primitives::icon::Icon;

pub fn render_target_diff(entry: &TargetDiff, supports_color: bool) -> String {
    let path = entry.target.display().to_string();
    render_unified_diff_with_line_numbers(&path, &entry.diff, supports_color)
}

pub fn render_diff_summary(
    report: &DiffReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let count = |t: ChangeType| report.entries.iter().filter(|e| e.change_type == t).count();

    let icon = if report.has_changes() {
        Icon::Diff
    } else {
        Icon::Success
    };

    format!(
        "{} {} new, {} modified, {} unchanged\n",
        icon.colored(supports_color, supports_unicode),
        count(ChangeType::Create),
        count(ChangeType::Update),
        count(ChangeType::Unchanged)
    )
}

pub fn diff_to_json(entry: &TargetDiff) -> serde_json::Value {
    let change = match entry.change_type {
        ChangeType::Create => "create",
        ChangeType::Update => "update",
        ChangeType::Unchanged => "unchanged",
    };

    serde_json::json!({
        "event": "diff",
        "target": entry.target.display().to_string(),
        "change": change,
        "additions": entry.diff.additions,
        "deletions": entry.diff.deletions,
    })
}
