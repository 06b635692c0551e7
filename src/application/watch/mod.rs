//! Watch Use Case
//!
//! Re-injects whenever the stats file or a template changes.
//! It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Debouncing (100ms default)
//! - Content comparison, so rewrites with identical bytes are ignored
//! - A full inject run per settled batch of changes
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::new(stats_path, specs);
//! let use_case = WatchUseCase::new(options);
//! use_case.start(running, &inject_sink, |event| { ... });
//! ```

mod event;
mod use_case;


pub use event::{WatchEvent, WatchOptions, WatcherState, DEBOUNCE_MS};
pub use use_case::WatchUseCase;
