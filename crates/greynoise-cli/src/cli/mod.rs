//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing::debug;

use crate::logging;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logging stays scoped to this run
    let _log_guard = logging::init(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let ctx = commands::Context {
        output_format: cli.output.unwrap_or(OutputFormat::Json),
    };
    debug!(output = %ctx.output_format, "Dispatching command");

    match cli.command {
        Commands::Setup(args) => commands::setup::execute(&ctx, args),
        Commands::Noise(args) => commands::noise::execute(&ctx, args).await,
        Commands::QuickCheck(args) => commands::quick_check::execute(&ctx, args).await,
        Commands::MultiQuickCheck(args) => commands::multi_quick_check::execute(&ctx, args).await,
        Commands::Context(args) => commands::ip_context::execute(&ctx, args).await,
        Commands::Actors => commands::actors::execute(&ctx).await,
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}
