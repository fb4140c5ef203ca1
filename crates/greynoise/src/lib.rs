//! Rust client for the GreyNoise IP threat-intelligence API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use greynoise::GreyNoiseClient;
//!
//! #[tokio::main]
//! async fn main() -> greynoise::Result<()> {
//!     // Reads ~/.config/greynoise/config and the GREYNOISE_* variables
//!     let client = GreyNoiseClient::from_default_config()?;
//!
//!     // Quick check a single address
//!     let status = client.noise().quick("71.6.135.131").await?;
//!     println!("{:?}: {:?}", status.ip(), status.code_message());
//!
//!     // Everything GreyNoise saw scanning on a given day
//!     let ips = client.noise().dump_for("2019-01-01").await?;
//!     println!("{} noisy addresses", ips.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/greynoise/0.3.0")]

// Re-export core types
pub use greynoise_core::*;

// Re-export client
pub use greynoise_client::{
    api, Config, GreyNoiseClient, GreyNoiseClientBuilder, API_VERSION, DEFAULT_API_SERVER,
    DEFAULT_TIMEOUT_SECS, ENV_API_KEY, ENV_API_SERVER, ENV_TIMEOUT,
};

// Re-export runtime for convenience
pub use chrono;
pub use serde;
pub use serde_json;
pub use tokio;
