//! HTTP client for the GreyNoise API.
//!
//! This crate provides the main [`GreyNoiseClient`] for interacting with the GreyNoise API,
//! and the [`Config`] file/environment loader it is usually built from.

#![doc(html_root_url = "https://docs.rs/greynoise-client/0.3.0")]

mod client;
mod config;
pub mod api;

pub use client::{GreyNoiseClient, GreyNoiseClientBuilder, API_VERSION};
pub use config::*;
pub use greynoise_core::{GreyNoiseError, Result};
