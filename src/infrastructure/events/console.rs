//! Console Event Sink
//!
//! Human-readable inject output. Every line carries the `BundleHash` tag;
//! informational lines go to stdout, warnings and errors to stderr.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::{Color, Stylize};

use crate::domain::ports::{InjectEvent, InjectEventSink};

/// Tag printed at the start of every console line
pub const TAG: &str = "BundleHash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Plain,
    Info,
    Warning,
    Error,
}

impl Level {
    fn label(&self) -> Option<&'static str> {
        match self {
            Level::Plain => None,
            Level::Info => Some("INFO"),
            Level::Warning => Some("WARNING"),
            Level::Error => Some("ERROR"),
        }
    }

    fn color(&self) -> Color {
        match self {
            Level::Plain => Color::DarkGrey,
            Level::Info => Color::Cyan,
            Level::Warning => Color::Yellow,
            Level::Error => Color::Red,
        }
    }
}

/// Event sink printing tagged lines
pub struct ConsoleEventSink {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    color: bool,
    verbose: u8,
}

impl ConsoleEventSink {
    /// Sink writing to the process stdout/stderr
    pub fn stdio(color: bool, verbose: u8) -> Self {
        Self::with_writers(io::stdout(), io::stderr(), color, verbose)
    }

    /// Sink writing to custom writers
    pub fn with_writers<O, E>(out: O, err: E, color: bool, verbose: u8) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            color,
            verbose,
        }
    }

    fn line(&self, level: Level, message: &str) {
        let tag = if self.color {
            format!("{}", TAG.bold())
        } else {
            TAG.to_string()
        };
        let label = match level.label() {
            Some(label) if self.color => format!(" {}", label.with(level.color())),
            Some(label) => format!(" {}", label),
            None => String::new(),
        };

        let target = match level {
            Level::Warning | Level::Error => &self.err,
            Level::Plain | Level::Info => &self.out,
        };
        if let Ok(mut writer) = target.lock() {
            let _ = writeln!(writer, "{tag}{label} {message}");
            let _ = writer.flush();
        }
    }
}

impl InjectEventSink for ConsoleEventSink {
    fn on_event(&self, event: InjectEvent) {
        match event {
            InjectEvent::Started { .. } => self.line(Level::Plain, "... start"),
            InjectEvent::NoFiles => self.line(Level::Error, "No files to handle!"),
            InjectEvent::SpecInvalid { reason, .. } => {
                self.line(Level::Error, &format!("{} File ignored.", reason))
            }
            InjectEvent::GroupsBuilt {
                template,
                group_count,
                snippet_count,
                ..
            } => {
                if self.verbose > 0 {
                    self.line(
                        Level::Info,
                        &format!(
                            "{} mount point(s), {} snippet(s) for `{}`",
                            group_count,
                            snippet_count,
                            template.display()
                        ),
                    );
                }
            }
            InjectEvent::MountPointMissing { key, template, .. } => self.line(
                Level::Warning,
                &format!(
                    "Expected mountpoint `{}` in the template file `{}` but is absent",
                    key,
                    template.display()
                ),
            ),
            InjectEvent::TemplateReadFailed { path, error, .. } => self.line(
                Level::Error,
                &format!("Cannot read template `{}`: {}", path.display(), error),
            ),
            InjectEvent::TemplateEmpty { path, .. } => self.line(
                Level::Warning,
                &format!("Template file `{}` is empty. File ignored.", path.display()),
            ),
            InjectEvent::RenderFailed { path, error, .. } => self.line(
                Level::Error,
                &format!("Cannot render `{}`: {}", path.display(), error),
            ),
            InjectEvent::TargetWritten { path, .. } => self.line(
                Level::Info,
                &format!("Target file created: `{}`", path.display()),
            ),
            InjectEvent::TargetRendered { path, .. } => self.line(
                Level::Info,
                &format!("Target file rendered (dry run): `{}`", path.display()),
            ),
            InjectEvent::TargetWriteFailed { path, error, .. } => self.line(
                Level::Error,
                &format!("Cannot write target `{}`: {}", path.display(), error),
            ),
            InjectEvent::Completed { .. } => self.line(Level::Plain, "... done"),
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose > 0
    }
}
