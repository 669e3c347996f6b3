//! skeleton-cli - generate skeleton HTML from a single-file component
//!
//! Usage: skeleton-cli generate -s <source> -t <target>

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

use skeleton_cli::config::{load_layered, Config};
use skeleton_cli::presentation::{Cli, ColorWhen, Commands};

mod commands;
mod ui;

use ui::context::UiContext;

fn main() {
    let args: Vec<OsString> = std::env::args_os().collect();

    // Nothing to do: show help before touching config or the filesystem
    if args.len() < 2 {
        print_help();
        return;
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::InvalidSubcommand => {
            let rest: Vec<String> = args[1..]
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect();
            let ui = invalid_command_ui(&rest);
            ui::error::print_invalid_command(&rest, ui.error_color);
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    // Replaced by the configured context once config is loaded
    let mut ui = UiContext::new(cli.json, cli.color, &Config::default());
    if let Err(err) = run(cli, &mut ui) {
        ui::error::print_error(&err, ui.json, ui.error_color);
        std::process::exit(1);
    }
}

fn run(cli: Cli, ui: &mut UiContext) -> Result<()> {
    let Some(command) = cli.command else {
        print_help();
        return Ok(());
    };

    let cwd = std::env::current_dir().context("resolve working directory")?;
    let loaded = load_layered(&cwd, cli.config.as_deref())?;
    *ui = UiContext::new(cli.json, cli.color, &loaded.config);

    if let Some(source) = &loaded.source {
        if !ui.json {
            ui::output::print_config_warnings(source, &loaded.warnings, ui.error_color);
        }
    }

    match command {
        Commands::Generate { source, target } => {
            commands::generate::cmd_generate(source, target, &cwd, &loaded.config, ui)
        }
    }
}

/// Output context for an unparseable command line, honoring whatever
/// `--color`/`--config` values can still be read from it
fn invalid_command_ui(args: &[String]) -> UiContext {
    let color = raw_flag(args, "--color").and_then(|v| ColorWhen::from_str(&v, true).ok());
    let config_file = raw_flag(args, "--config").map(PathBuf::from);
    let config = std::env::current_dir()
        .ok()
        .and_then(|cwd| load_layered(&cwd, config_file.as_deref()).ok())
        .map(|loaded| loaded.config)
        .unwrap_or_default();

    UiContext::new(false, color, &config)
}

/// Value of `--name <value>` or `--name=<value>` in raw arguments
fn raw_flag(args: &[String], name: &str) -> Option<String> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == name {
            return iter.next().cloned();
        }
        if let Some(value) = arg.strip_prefix(name).and_then(|r| r.strip_prefix('=')) {
            return Some(value.to_string());
        }
    }
    None
}

fn print_help() {
    let mut cmd = Cli::command();
    let _ = cmd.print_help();
    println!();
}
