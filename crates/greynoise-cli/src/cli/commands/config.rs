//! `greynoise config` - Inspect CLI configuration.

use anyhow::Result;
use colored::Colorize;
use greynoise::Config;
use serde_json::json;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::output::render;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load()?;
    let api_key = config.masked_api_key();

    let shown = json!({
        "api_key": &api_key,
        "api_server": &config.api_server,
        "timeout": config.timeout,
    });
    if let Some(text) = render(ctx.output_format, &shown)? {
        println!("{text}");
        return Ok(());
    }

    println!("{}", "Current Configuration:".bold());
    println!();
    let api_display = api_key.unwrap_or_else(|| "(not set)".dimmed().to_string());
    println!("  {} {}", "api_key:".bold(), api_display);
    println!("  {} {}", "api_server:".bold(), config.api_server);
    println!("  {} {}s", "timeout:".bold(), config.timeout);

    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}
