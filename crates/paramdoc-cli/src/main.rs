//! `paramdoc` binary: parse parameter sample annotations into JSON.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use eyre::{Context, Result};

use paramdoc::SampleVariant;
use paramdoc_cli::config::{CliConfig, LogLevel};
use paramdoc_cli::error::CliError;
use paramdoc_cli::logging::init_logging;
use paramdoc_cli::output::{RunOptions, process, split_annotations};

/// Parse parameter sample annotations and print them as JSON lines.
#[derive(Parser, Debug)]
#[command(name = "paramdoc", version, about)]
struct Args {
    /// Sample variant (param, header).
    #[arg(long)]
    variant: Option<SampleVariant>,

    /// Group for annotations without a `(group)` label.
    #[arg(long)]
    default_group: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Pretty-print each descriptor.
    #[arg(long)]
    pretty: bool,

    /// Annotations to parse; read from stdin, separated by blank lines, when
    /// none are given.
    annotations: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    match run(&args, &config) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            tracing::warn!(failed, "some annotations did not parse");
            ExitCode::from(1)
        }
        Err(e) => {
            tracing::error!(error = ?e, "paramdoc failed");
            ExitCode::from(1)
        }
    }
}

fn build_config(args: &Args) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(args.log_level, args.variant))
}

fn run(args: &Args, config: &CliConfig) -> Result<usize> {
    let annotations = if args.annotations.is_empty() {
        let text = io::read_to_string(io::stdin()).wrap_err("failed to read stdin")?;
        split_annotations(&text)
    } else {
        args.annotations.clone()
    };

    let options = RunOptions {
        variant: config.variant,
        default_group: args.default_group.clone(),
        pretty: args.pretty,
    };
    let mut out = io::stdout().lock();
    process(&annotations, &options, &mut out).wrap_err("failed to write descriptors")
}
