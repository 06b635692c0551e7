//! BundleHash CLI - inject hashed bundle asset tags into HTML templates
//!
//! Usage: bundlehash <COMMAND> --stats <PATH>
//!
//! Commands:
//!   inject  Fill template mount points and write the targets
//!   groups  Show the markup computed for each template
//!   diff    Preview target changes without writing
//!   watch   Re-inject whenever the stats file or a template changes

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use bundlehash::presentation::{Cli, Commands};

use crate::ui::context::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    match &cli.command {
        Commands::Inject { input, dry_run } => commands::inject::cmd_inject(input, *dry_run, &ui),
        Commands::Groups { input } => commands::groups::cmd_groups(input, &ui),
        Commands::Diff { input } => commands::diff::cmd_diff(input, &ui),
        Commands::Watch { input } => commands::watch::cmd_watch(input, &ui),
    }
}
