//! `greynoise setup` - Save the API configuration.

use anyhow::Result;
use greynoise::Config;
use tracing::warn;

use super::Context;
use crate::cli::args::SetupArgs;

pub fn execute(_ctx: &Context, args: SetupArgs) -> Result<()> {
    let path = Config::path()?;

    // Keep whatever the file already holds, without the environment overrides.
    // An unreadable file is replaced rather than blocking setup.
    let mut config = Config::load_from(&path, |_| None).unwrap_or_else(|e| {
        warn!(error = %e, "Discarding unreadable configuration file");
        Config::default()
    });
    config.api_key = args.api_key;
    if let Some(api_server) = args.api_server {
        config.api_server = api_server;
    }
    if let Some(timeout) = args.timeout {
        config.timeout = timeout;
    }

    config.save_to(&path)?;
    println!("Configuration saved to '{}'", path.display());

    Ok(())
}
