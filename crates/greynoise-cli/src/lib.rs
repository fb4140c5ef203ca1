//! # greynoise-cli
//!
//! Command-line interface for the GreyNoise IP threat-intelligence API.
//!
//! ## Features
//!
//! - **Noise lookups**: bulk dump (optionally per day), quick checks, context
//! - **Research**: list known scanning actors
//! - **Setup**: write the API key and server to `~/.config/greynoise/config`
//! - **Multiple output formats**: JSON (default), pretty tables, YAML

pub mod cli;
pub mod logging;
pub mod output;

pub use cli::run;
