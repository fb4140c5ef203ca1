//! Core types and validation for the GreyNoise API client.
//!
//! This crate provides the foundational pieces shared by the client and the CLI:
//!
//! - **Types**: Response shapes for the noise and research endpoints
//! - **Codes**: The static quick-check status code table
//! - **Validation**: IPv4 and date argument checks
//! - **Errors**: Error handling with [`GreyNoiseError`]
//!
//! # Example
//!
//! ```rust
//! use greynoise_core::{describe_code, validate_ip};
//!
//! assert!(validate_ip("8.8.8.8").is_ok());
//! assert_eq!(describe_code("0x07"), "IP is invalid");
//! ```

#![doc(html_root_url = "https://docs.rs/greynoise-core/0.3.0")]

mod codes;
mod error;
pub mod types;
pub mod validate;

pub use codes::{code_message, describe_code, CODE_MESSAGES, UNKNOWN_CODE_MESSAGE};
pub use error::{GreyNoiseError, Result};
pub use types::*;
pub use validate::{is_valid_ip, parse_date, validate_ip, DATE_FORMAT};
