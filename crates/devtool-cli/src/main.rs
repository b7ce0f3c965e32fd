//! Devtool CLI - command-line access to the transformation engine
//!
//! This is the main entry point for the Devtool CLI application, providing
//! one subcommand per transformer: JSON formatting, Base64 and URL codecs,
//! timestamp conversion, text statistics, and case conversion.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use std::process;

use clap::ValueEnum;
use colored::control;
use tracing::instrument;

use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::Result;
use logging::LoggingConfig;
use output::OutputWriter;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output from the flags; refined below once the config
    // is known
    control::set_override(cli.use_color());

    // Load configuration
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    };

    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);

    // Initialize logging
    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    match run(cli, &config, use_color) {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: &Config, use_color: bool) -> Result<()> {
    let format = resolve_format(&cli, config)?;
    let mut output = OutputWriter::new(format, use_color, cli.quiet);

    tracing::info!(command = ?cli.command, format = ?output.format(), "executing command");

    // Handle the subcommand
    match cli.command {
        Commands::Json(args) => handlers::handle_json(args, &mut output),
        Commands::Base64(args) => handlers::handle_base64(args, &mut output),
        Commands::Timestamp(args) => handlers::handle_timestamp(args, &mut output),
        Commands::Url(args) => handlers::handle_url(args, &mut output),
        Commands::Stats(args) => handlers::handle_stats(args, &mut output),
        Commands::Case(args) => handlers::handle_case(args, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Pick the output format: CLI flag first, then config, then human
fn resolve_format(cli: &Cli, config: &Config) -> Result<OutputFormat> {
    if let Some(format) = cli.output {
        return Ok(format);
    }
    OutputFormat::from_str(&config.output.format, true).map_err(|_| {
        error::Error::config(format!(
            "unknown output format '{}' in config",
            config.output.format
        ))
    })
}

/// Initialize the logging system from the flags and config defaults
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let verbosity = cli.verbosity_level().max(config.output.verbosity);
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    logging::init_logging(logging_config)
}
