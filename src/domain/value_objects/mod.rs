//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod encoding;
mod line_ending;
mod mount_key;

pub use config_warning::ConfigWarning;
pub use encoding::{Encoding, EncodingError};
pub use line_ending::LineEnding;
pub use mount_key::{file_extension, MountKey};
