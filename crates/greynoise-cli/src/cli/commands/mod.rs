//! Command implementations.

pub mod actors;
pub mod config;
pub mod ip_context;
pub mod multi_quick_check;
pub mod noise;
pub mod quick_check;
pub mod setup;

use greynoise::{Config, GreyNoiseClient};

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,
}

impl Context {
    /// Load the configuration and create a client from it.
    ///
    /// Fails when no API key is configured.
    pub fn client(&self) -> anyhow::Result<GreyNoiseClient> {
        let config = Config::load()?;
        if config.api_key.is_empty() {
            anyhow::bail!(
                "API key required.\n\n\
                 Set it with one of:\n  \
                 1. greynoise setup --api-key <KEY>\n  \
                 2. GREYNOISE_API_KEY environment variable"
            );
        }
        Ok(GreyNoiseClient::from_config(&config)?)
    }
}
