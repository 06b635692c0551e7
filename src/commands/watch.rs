use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};

use bundlehash::application::{WatchEvent, WatchOptions, WatchUseCase};
use bundlehash::presentation::InputArgs;

use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub fn cmd_watch(input: &InputArgs, ui: &UiContext) -> Result<()> {
    let resolved = super::prepare(input, ui)?;

    let Some(stats) = resolved.manifest.path() else {
        bail!("watch needs --stats to name a file; stdin cannot be watched");
    };

    let options = WatchOptions::new(stats, resolved.specs.clone());

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    let sink = super::event_sink(ui);
    let json = ui.json;
    let color = ui.color;
    let unicode = ui.unicode;

    WatchUseCase::new(options).start(running, sink.as_ref(), |event| {
        if json {
            println!("{}", event.to_json());
            return;
        }

        if let WatchEvent::WatchStarted { stats, watching } = &event {
            print!("{}", render_watch_header(stats, watching, color, unicode));
            return;
        }

        let rendered = render_watch_event(&timestamp(), &event, color, unicode);
        match event {
            WatchEvent::Error { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    })?;

    Ok(())
}

fn timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 86_400;
            let h = secs / 3600;
            let m = (secs % 3600) / 60;
            let s = secs % 60;
            format!("{:02}:{:02}:{:02}", h, m, s)
        })
        .unwrap_or_else(|_| "00:00:00".to_string())
}
