//! Inject Module
//!
//! Fills the mount points of every configured template and writes the
//! targets.
//!
//! ## Structure
//!
//! - `options` - Run options (`InjectOptions`)
//! - `result` - Per-spec outcomes and the run report
//! - `use_case` - Core use case logic (`InjectUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use bundlehash::application::inject::{InjectOptions, InjectUseCase};
//!
//! let use_case = InjectUseCase::new(LocalFs::new());
//! let report = use_case.execute(&manifest, &specs, &InjectOptions::new(), &sink);
//! ```

mod options;
mod result;
mod use_case;

pub use options::InjectOptions;
pub use result::{InjectReport, SpecOutcome, SpecStatus};
pub use use_case::InjectUseCase;
