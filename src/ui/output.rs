use std::path::Path;

use bundlehash::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

pub fn render_config_warnings(
    path: &Path,
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    let mut out = String::new();

    for w in warnings {
        match w.line {
            Some(line) => out.push_str(&format!(
                "{} Unknown config key '{}' in {}:{}\n",
                icon,
                w.key,
                path.display(),
                line
            )),
            None => out.push_str(&format!(
                "{} Unknown config key '{}' in {}\n",
                icon,
                w.key,
                path.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }

    out
}

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], color: bool, unicode: bool) {
    eprint!("{}", render_config_warnings(path, warnings, color, unicode));
}
