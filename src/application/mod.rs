//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `InjectUseCase` - Validate, group, render and write every file spec
//! - `DiffUseCase` - Dry-run inject and compare with existing targets
//! - `WatchUseCase` - Re-inject when the stats file or a template changes

pub mod diff;
pub mod inject;
pub mod watch;

pub use diff::{ChangeType, DiffReport, DiffUseCase, TargetDiff};
pub use inject::{InjectOptions, InjectReport, InjectUseCase, SpecOutcome, SpecStatus};
pub use watch::{WatchEvent, WatchOptions, WatchUseCase, WatcherState, DEBOUNCE_MS};
