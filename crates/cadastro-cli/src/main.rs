//! Cadastro validator CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use cadastro_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, RecordArgs};
use crate::commands::{Outcome, run_product, run_student};
use crate::summary::print_outcome;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));
    let exit_code = match &cli.command {
        Command::Student(args) => report(run_student(args), args),
        Command::Product(args) => report(run_product(args), args),
    };
    std::process::exit(exit_code);
}

/// Render the outcome and map it to an exit code: 0 valid, 1 invalid,
/// 2 when the record could not be read or parsed.
fn report(outcome: anyhow::Result<Outcome>, args: &RecordArgs) -> i32 {
    match outcome {
        Ok(outcome) => {
            if args.json {
                match serde_json::to_string_pretty(&outcome.result) {
                    Ok(json) => println!("{json}"),
                    Err(error) => {
                        eprintln!("error: {error}");
                        return 2;
                    }
                }
            } else {
                print_outcome(&outcome);
            }
            if outcome.result.is_valid() { 0 } else { 1 }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            2
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    config
}
