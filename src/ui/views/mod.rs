pub mod diff;
pub mod groups;
pub mod watch;
