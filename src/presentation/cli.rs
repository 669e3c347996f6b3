//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --config) are inherited by the subcommand
//! - `--source`/`--target` are optional at the clap level; the generate use
//!   case reports missing values with the same message as malformed ones
//! - `-v` prints the version, so clap's default `-V` flag is disabled

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Example line shown under `generate --help`
pub const GENERATE_EXAMPLES: &str = "Examples:\n\n  $ skeleton-cli generate -s <source path of skeleton entry> -t <target path of output skeleton html>";

/// Tool of skeleton
#[derive(Parser, Debug)]
#[command(name = "skeleton-cli")]
#[command(version, about = "Tool of skeleton", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    pub version: Option<bool>,

    /// Emit NDJSON events instead of colored text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Configuration file (defaults to ./skeleton.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// generate the skeleton template
    #[command(visible_alias = "g", after_help = GENERATE_EXAMPLES)]
    Generate {
        /// assign the source of skeleton entry
        #[arg(short, long, value_name = "SOURCE")]
        source: Option<String>,

        /// assign the path of output skeleton html
        #[arg(short, long, value_name = "TARGET")]
        target: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse_generate() {
        let cli = Cli::try_parse_from([
            "skeleton-cli",
            "generate",
            "-s",
            "./Skeleton.vue",
            "--target",
            "./skeleton.html",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Commands::Generate {
                source: Some("./Skeleton.vue".to_string()),
                target: Some("./skeleton.html".to_string()),
            })
        );
    }

    #[test]
    fn test_cli_parse_alias() {
        let cli = Cli::try_parse_from(["skeleton-cli", "g", "-s", "a.vue"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Generate {
                source: Some("a.vue".to_string()),
                target: None,
            })
        );
    }

    #[test]
    fn test_cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "skeleton-cli",
            "generate",
            "--json",
            "--color",
            "never",
            "--config",
            "ci/skeleton.toml",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.color, Some(ColorWhen::Never));
        assert_eq!(cli.config, Some(PathBuf::from("ci/skeleton.toml")));
    }

    #[test]
    fn test_cli_unknown_command_is_invalid_subcommand() {
        let err = Cli::try_parse_from(["skeleton-cli", "build"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_cli_short_v_prints_version() {
        let err = Cli::try_parse_from(["skeleton-cli", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_generate_help_lists_examples() {
        let mut cmd = Cli::command();
        let help = cmd
            .find_subcommand_mut("generate")
            .unwrap()
            .render_help()
            .to_string();
        assert!(help.contains("$ skeleton-cli generate -s <source path of skeleton entry>"));
    }
}
