//! CLI argument definitions for the StickerSmash editor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "stickersmash",
    version,
    about = "StickerSmash - pick a photo, decorate it, undo/redo, export",
    long_about = "Replay StickerSmash edit scripts against an undo/redo history.\n\n\
                  Each script line is one editor action; the current state is \
                  printed after every action."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Studio configuration file (JSON).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay an edit script.
    Run(RunArgs),

    /// List the available filters.
    Filters,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Script file, or `-` to read from stdin.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Behave as if camera permission was denied.
    #[arg(long = "deny-camera")]
    pub deny_camera: bool,

    /// Directory for `export` lines without a path (default: current directory).
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
