//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - Every subcommand takes the same input arguments (`InputArgs`)

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// BundleHash - inject hashed bundle asset tags into HTML templates
#[derive(Parser, Debug)]
#[command(name = "bundlehash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v shows per-template group counts)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Inputs shared by every subcommand
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct InputArgs {
    /// Bundler stats JSON (`-` reads stdin)
    #[arg(short, long, value_name = "PATH")]
    pub stats: PathBuf,

    /// Config file (default: ./bundlehash.toml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Template file; replaces the configured file list (requires --target)
    #[arg(long, value_name = "PATH", requires = "target")]
    pub template: Option<PathBuf>,

    /// Target file written from --template
    #[arg(long, value_name = "PATH", requires = "template")]
    pub target: Option<PathBuf>,

    /// Mount key prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Template/target encoding (utf8, latin1, utf16le)
    #[arg(long)]
    pub encoding: Option<String>,

    /// Separator between snippets (lf, crlf, cr, or a literal string)
    #[arg(long)]
    pub line_ending: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill template mount points and write the targets
    Inject {
        #[command(flatten)]
        input: InputArgs,

        /// Render without writing targets
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the markup computed for each template
    Groups {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Preview target changes without writing
    Diff {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Re-inject whenever the stats file or a template changes
    Watch {
        #[command(flatten)]
        input: InputArgs,
    },
}

impl Commands {
    pub fn input(&self) -> &InputArgs {
        match self {
            Commands::Inject { input, .. }
            | Commands::Groups { input }
            | Commands::Diff { input }
            | Commands::Watch { input } => input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_inject() {
        let cli = Cli::try_parse_from(["bundlehash", "inject", "--stats", "stats.json"]).unwrap();
        if let Commands::Inject { input, dry_run } = cli.command {
            assert_eq!(input.stats, PathBuf::from("stats.json"));
            assert_eq!(input.config, None);
            assert!(!dry_run);
        } else {
            panic!("Expected Inject command");
        }
    }

    #[test]
    fn test_cli_parse_inject_dry_run_and_overrides() {
        let cli = Cli::try_parse_from([
            "bundlehash",
            "inject",
            "-s",
            "-",
            "--template",
            "src/index.html",
            "--target",
            "dist/index.html",
            "--prefix",
            "app",
            "--line-ending",
            "crlf",
            "--dry-run",
        ])
        .unwrap();

        if let Commands::Inject { input, dry_run } = cli.command {
            assert!(dry_run);
            assert_eq!(input.stats, PathBuf::from("-"));
            assert_eq!(input.template, Some(PathBuf::from("src/index.html")));
            assert_eq!(input.prefix.as_deref(), Some("app"));
            assert_eq!(input.line_ending.as_deref(), Some("crlf"));
        } else {
            panic!("Expected Inject command");
        }
    }

    #[test]
    fn test_cli_stats_is_required() {
        assert!(Cli::try_parse_from(["bundlehash", "inject"]).is_err());
    }

    #[test]
    fn test_cli_template_requires_target() {
        let result = Cli::try_parse_from([
            "bundlehash",
            "inject",
            "--stats",
            "s.json",
            "--template",
            "a.html",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "bundlehash",
            "groups",
            "--stats",
            "s.json",
            "--json",
            "--color",
            "never",
            "-v",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.color, Some(ColorWhen::Never));
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Commands::Groups { .. }));
    }

    #[test]
    fn test_cli_input_accessor() {
        let cli = Cli::try_parse_from(["bundlehash", "watch", "--stats", "dist/stats.json"]).unwrap();
        assert_eq!(cli.command.input().stats, PathBuf::from("dist/stats.json"));
    }
}
