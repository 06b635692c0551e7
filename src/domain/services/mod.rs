//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod differ;
mod grouper;
mod renderer;

pub use differ::{DiffLine, DiffResult, DiffTag, Differ};
pub use grouper::group_assets;
pub use renderer::{render_template, MountPoint, RenderOutput};
