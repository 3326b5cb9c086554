//! StickerSmash CLI.

use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use ss_cli::logging::{init_logging, LogConfig, LogFormat};
use ss_cli::runner::Runner;
use ss_cli::script::parse_script;
use ss_common::StudioConfig;
use ss_export::ManifestExporter;
use ss_filters::FilterRegistry;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, RunArgs};

fn main() {
    let cli = Cli::parse();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let result = load_config(cli.config.as_deref()).and_then(|config| match &cli.command {
        Command::Run(args) => run_script(args, config),
        Command::Filters => {
            list_filters();
            Ok(())
        }
    });
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = io::stderr().is_terminal();
    config
}

fn load_config(path: Option<&Path>) -> Result<StudioConfig> {
    let config = match path {
        Some(path) => StudioConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StudioConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run_script(args: &RunArgs, config: StudioConfig) -> Result<()> {
    let text = if args.script.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.script)
            .with_context(|| format!("reading script {}", args.script.display()))?
    };
    let script = parse_script(&text)?;

    let exporter = Arc::new(ManifestExporter::default());
    let mut runner = Runner::new(config, exporter, io::stdout().lock())
        .with_camera_allowed(!args.deny_camera);
    if let Some(dir) = &args.export_dir {
        runner = runner.with_export_dir(dir);
    }

    let summary = runner.run(&script)?;
    eprintln!(
        "{} commands, {} notices, {} exports",
        summary.commands,
        summary.notices,
        summary.exports.len()
    );
    Ok(())
}

fn list_filters() {
    let registry = FilterRegistry::with_builtins();
    for preset in registry.list() {
        let tint = preset
            .tint
            .map_or_else(|| "-".to_string(), |tint| tint.to_css());
        println!(
            "{:<10} {:<10} {:<14} {tint}",
            preset.kind.as_str(),
            preset.display_name,
            preset.icon
        );
    }
}
