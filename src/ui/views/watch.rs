use bundlehash::application::WatchEvent;

use crate::ui::primitives::icon::Icon;

pub fn render_watch_header(stats: &str, watching: &[String], supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} BundleHash Watch\n  Stats: {}\n",
        Icon::Watch.colored(supports_color, supports_unicode),
        stats
    );
    for path in watching {
        out.push_str(&format!("  Watching: {}\n", path));
    }
    out.push_str("  Hint: Press Ctrl+C to stop\n");
    out
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);

    match event {
        WatchEvent::WatchStarted { stats, .. } => format!(
            "{} {} Watching: {}\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            stats
        ),
        WatchEvent::FileChanged { path } => format!(
            "{} {} Changed: {}\n",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            path
        ),
        WatchEvent::InjectStarted => format!(
            "{} {} Injecting...\n",
            prefix,
            Icon::Progress.colored(supports_color, supports_unicode)
        ),
        WatchEvent::InjectComplete {
            written,
            failed,
            skipped,
            missing,
        } => {
            let has_problems = *failed > 0 || *skipped > 0 || *missing > 0;
            let icon = if has_problems {
                Icon::Warning
            } else {
                Icon::Success
            }
            .colored(supports_color, supports_unicode);

            if has_problems {
                format!(
                    "{} {} Inject: {} written, {} failed, {} skipped, {} missing mount points\n",
                    prefix, icon, written, failed, skipped, missing
                )
            } else {
                format!("{} {} Inject: {} written\n", prefix, icon, written)
            }
        }
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lists_watched_files() {
        let rendered = render_watch_header(
            "stats.json",
            &["/p/stats.json".to_string(), "/p/index.html".to_string()],
            false,
            false,
        );

        insta::assert_snapshot!(rendered, @r"
        [~] BundleHash Watch
          Stats: stats.json
          Watching: /p/stats.json
          Watching: /p/index.html
          Hint: Press Ctrl+C to stop
        ");
    }

    #[test]
    fn clean_inject_is_short() {
        let event = WatchEvent::InjectComplete {
            written: 2,
            failed: 0,
            skipped: 0,
            missing: 0,
        };
        assert_eq!(
            render_watch_event("12:00:00", &event, false, false),
            "[12:00:00] [OK] Inject: 2 written\n"
        );
    }

    #[test]
    fn problems_are_listed() {
        let event = WatchEvent::InjectComplete {
            written: 1,
            failed: 1,
            skipped: 0,
            missing: 2,
        };
        let rendered = render_watch_event("12:00:00", &event, false, false);
        assert!(rendered.starts_with("[12:00:00] [WARN]"));
        assert!(rendered.contains("2 missing mount points"));
    }
}
