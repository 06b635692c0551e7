//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Resolving config, env and CLI input into file specs
//!
//! ## Structure
//!
//! - `cli` - Clap definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, InputArgs};
pub use factory::{create_diff_use_case, create_inject_use_case, resolve_input, ResolvedInput};
