//! Command-line argument definitions using clap.

use crate::output::OutputFormat;
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};

/// Command-line client for the GreyNoise API
///
/// Find out whether an IP address is Internet background noise, who is
/// scanning, and what GreyNoise knows about it.
///
/// Run `greynoise setup --api-key <KEY>` first, or set GREYNOISE_API_KEY.
#[derive(Parser, Debug)]
#[command(name = "greynoise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save the API key and server to the configuration file
    Setup(SetupArgs),

    /// Get the noise IP addresses (optionally for a single day)
    Noise(NoiseArgs),

    /// Quickly check whether an IP address is noise
    QuickCheck(IpArgs),

    /// Quickly check several IP addresses at once
    MultiQuickCheck(MultiQuickCheckArgs),

    /// Get everything GreyNoise knows about an IP address
    Context(IpArgs),

    /// List the known actors scanning the Internet
    Actors,

    /// Inspect CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Setup command
// ============================================================================

#[derive(Args, Debug)]
pub struct SetupArgs {
    /// GreyNoise API key
    #[arg(short = 'k', long)]
    pub api_key: String,

    /// API server to send requests to
    #[arg(short = 's', long)]
    pub api_server: Option<String>,

    /// Request timeout in seconds
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,
}

// ============================================================================
// Lookup commands
// ============================================================================

#[derive(Args, Debug)]
pub struct NoiseArgs {
    /// Only return addresses seen on this day (YYYY-MM-DD)
    #[arg(short, long, value_parser = date)]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct IpArgs {
    /// IPv4 address to look up
    #[arg(value_parser = ipv4)]
    pub ip_address: String,
}

#[derive(Args, Debug)]
pub struct MultiQuickCheckArgs {
    /// IPv4 addresses to check
    #[arg(value_parser = ipv4)]
    pub ip_addresses: Vec<String>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration (file plus environment)
    Show,

    /// Print the configuration file path
    Path,
}

fn ipv4(value: &str) -> Result<String, String> {
    greynoise::validate_ip(value)
        .map(|ip| ip.to_string())
        .map_err(|_| format!("not a valid IPv4 address: {value}"))
}

fn date(value: &str) -> Result<NaiveDate, String> {
    greynoise::parse_date(value).map_err(|_| format!("expected YYYY-MM-DD, got {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_noise_date() {
        let cli = Cli::try_parse_from(["greynoise", "noise", "--date", "2019-01-01"]).unwrap();
        match cli.command {
            Commands::Noise(args) => {
                assert_eq!(args.date, NaiveDate::from_ymd_opt(2019, 1, 1));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let err = Cli::try_parse_from(["greynoise", "noise", "-d", "not-a-date"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_ip_arguments() {
        let cli = Cli::try_parse_from(["greynoise", "quick-check", "0.0.0.0"]).unwrap();
        assert!(matches!(cli.command, Commands::QuickCheck(ref a) if a.ip_address == "0.0.0.0"));

        let err = Cli::try_parse_from(["greynoise", "context", "not-an-ip"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = Cli::try_parse_from(["greynoise", "context"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["greynoise", "multi-quick-check", "0.0.0.0", "not-an-ip"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let cli = Cli::try_parse_from(["greynoise", "multi-quick-check"]).unwrap();
        assert!(matches!(cli.command, Commands::MultiQuickCheck(ref a) if a.ip_addresses.is_empty()));
    }

    #[test]
    fn test_setup_requires_api_key() {
        let err = Cli::try_parse_from(["greynoise", "setup"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from(["greynoise", "setup", "-k", "<api_key>"]).unwrap();
        assert!(matches!(cli.command, Commands::Setup(ref a) if a.api_key == "<api_key>"));
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::try_parse_from(["greynoise", "actors", "-vv", "-o", "yaml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormat::Yaml));
    }
}
