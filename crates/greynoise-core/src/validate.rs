//! Argument validation shared by the client and the CLI.

use crate::{GreyNoiseError, Result};
use chrono::NaiveDate;
use std::net::Ipv4Addr;
use tracing::warn;

/// Date format used by the dated bulk endpoint
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a dotted-quad IPv4 address.
///
/// IPv6 addresses and hostnames are rejected.
pub fn validate_ip(ip: &str) -> Result<Ipv4Addr> {
    ip.parse::<Ipv4Addr>().map_err(|_| {
        let message = format!("Invalid IP address: {ip:?}");
        warn!(ip_address = ip, "{message}");
        GreyNoiseError::InvalidArgument(message)
    })
}

/// Permissive form of [`validate_ip`], used to filter bulk lists
pub fn is_valid_ip(ip: &str) -> bool {
    validate_ip(ip).is_ok()
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|e| {
        GreyNoiseError::InvalidArgument(format!("Invalid date {date:?}: {e}"))
    })
}
