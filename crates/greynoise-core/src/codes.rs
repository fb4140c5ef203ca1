//! Quick-check status codes.

/// Prefix of the message attached to codes missing from [`CODE_MESSAGES`]
pub const UNKNOWN_CODE_MESSAGE: &str = "Code message unknown";

/// Human-readable descriptions for the codes returned by quick checks
pub static CODE_MESSAGES: &[(&str, &str)] = &[
    ("0x00", "IP has never been observed scanning the Internet"),
    ("0x01", "IP has been observed by the GreyNoise sensor network"),
    (
        "0x02",
        "IP has been observed scanning the GreyNoise sensor network, \
         but has not completed a full connection, meaning this can be spoofed",
    ),
    (
        "0x03",
        "IP is adjacent to another host that has been directly observed \
         by the GreyNoise sensor network",
    ),
    ("0x04", "RESERVED"),
    ("0x05", "IP is commonly spoofed in Internet-scan activity"),
    (
        "0x06",
        "IP has been observed as noise, but this host belongs to a cloud provider \
         where IPs can be cycled frequently",
    ),
    ("0x07", "IP is invalid"),
    (
        "0x08",
        "IP was classified as noise, but has not been observed \
         engaging in Internet-wide scans or attacks in over 60 days",
    ),
];

/// Look up the description of a known code
#[must_use]
pub fn code_message(code: &str) -> Option<&'static str> {
    CODE_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| *message)
}

/// Describe a code, falling back to a generated message for unknown codes
#[must_use]
pub fn describe_code(code: &str) -> String {
    code_message(code).map_or_else(
        || format!("{UNKNOWN_CODE_MESSAGE}: {code}"),
        ToString::to_string,
    )
}
