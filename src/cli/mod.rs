//! Command-line inspection of a streams config.
//!
//! `resolve` shows which rule and level each stream name lands on; `emit`
//! pushes one line through a configured router so layouts and gating can be
//! checked without writing an application.

use crate::fmt::Layout;
use crate::level::Level;
use crate::router::{Options, Router};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// streamlog - Inspect stream routing rules from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "streamlog",
    version,
    about = "Inspect stream routing rules from the command line"
)]
pub struct Cli {
    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub basic: bool,
    /// Level for streams no rule matches
    #[arg(long, global = true, value_name = "LEVEL", default_value = "off")]
    pub fallback: Level,
    /// Print streamlog's own diagnostics
    #[arg(long, global = true)]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the level each stream name resolves to.
    Resolve {
        /// Absolute path of a YAML or TOML streams config
        config: PathBuf,
        /// Stream names to resolve
        #[arg(required = true)]
        streams: Vec<String>,
    },
    /// Log one message on a stream.
    Emit {
        /// Absolute path of a YAML or TOML streams config
        config: PathBuf,
        /// Stream name
        stream: String,
        /// Level of the call (fatal, error, warn, info, debug, trace)
        level: Level,
        /// Message words
        message: Vec<String>,
    },
    /// List the severity scale, least verbose first.
    Levels,
}

impl Cli {
    fn options(&self) -> Options {
        Options::new()
            .layout(if self.basic {
                Layout::Basic
            } else {
                Layout::Color
            })
            .fallback_level(self.fallback)
            .debug(self.debug)
    }
}

/// Runs a parsed command line.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    match &cli.command {
        Command::Resolve { config, streams } => {
            let Some(router) = load(config, cli.options()) else {
                return ExitCode::FAILURE;
            };
            for stream in streams {
                let rule = router.rules().resolve(stream);
                let palette = router.palette();
                let origin = if rule.is_fallback() {
                    "fallback".to_string()
                } else {
                    format!("/{}/", rule.pattern())
                };
                println!(
                    "{stream} => {} ({origin})",
                    palette.paint(rule.level().style(), rule.level().as_str())
                );
            }
            ExitCode::SUCCESS
        }
        Command::Emit {
            config,
            stream,
            level,
            message,
        } => {
            let Some(router) = load(config, cli.options()) else {
                return ExitCode::FAILURE;
            };
            if !level.is_plain() {
                eprintln!("Level '{level}' has no emitting method");
                return ExitCode::FAILURE;
            }
            router.get_logger(stream).log(*level, message.join(" "));
            if let Err(e) = router.flush() {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Command::Levels => {
            for level in Level::all() {
                let note = if level.is_plain() { "" } else { " (not gate-able)" };
                println!("{} {level}{note}", level.rank());
            }
            ExitCode::SUCCESS
        }
    }
}

fn load(config: &Path, options: Options) -> Option<Router> {
    match Router::from_config(config, options) {
        Ok(router) => Some(router),
        Err(e) => {
            eprintln!("{e}");
            None
        }
    }
}
