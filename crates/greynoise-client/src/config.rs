//! Client configuration: file loading, environment overrides and saving.

use directories::BaseDirs;
use greynoise_core::{GreyNoiseError, Result};
use ini::{EscapePolicy, Ini, ParseOption, WriteOption};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Default API server
pub const DEFAULT_API_SERVER: &str = "https://enterprise.api.greynoise.io";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable overriding the API key
pub const ENV_API_KEY: &str = "GREYNOISE_API_KEY";

/// Environment variable overriding the API server
pub const ENV_API_SERVER: &str = "GREYNOISE_API_SERVER";

/// Environment variable overriding the timeout
pub const ENV_TIMEOUT: &str = "GREYNOISE_TIMEOUT";

/// Section of the config file holding every field
const SECTION: &str = "greynoise";

/// Client configuration.
///
/// Loaded from `~/.config/greynoise/config`, then overridden by the
/// `GREYNOISE_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// GreyNoise API key.
    pub api_key: String,

    /// Base URL of the API server.
    pub api_server: String,

    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_server: DEFAULT_API_SERVER.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = BaseDirs::new()
            .ok_or_else(|| GreyNoiseError::Config("could not determine home directory".into()))?;

        Ok(dirs
            .home_dir()
            .join(".config")
            .join("greynoise")
            .join("config"))
    }

    /// Load configuration from the default file and the process environment.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?, |name| std::env::var(name).ok())
    }

    /// Load configuration from `path`, then apply overrides from `env`.
    ///
    /// A missing file is not an error: defaults are used instead.
    pub fn load_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = if path.is_file() {
            debug!(path = %path.display(), "Parsing configuration file");
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
                .map_err(|e| GreyNoiseError::Config(format!("{}: {e}", path.display())))?
        } else {
            warn!(path = %path.display(), "Configuration file not found");
            Self::default()
        };

        config.apply_env(env);
        Ok(config)
    }

    /// Parse the `key = value` lines of the `[greynoise]` section.
    ///
    /// Values are taken literally (no quote or escape handling) and missing
    /// keys keep their defaults.
    fn parse(content: &str) -> std::result::Result<Self, String> {
        let opt = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(content, opt).map_err(|e| e.to_string())?;

        let mut config = Self::default();
        let Some(section) = ini.section(Some(SECTION)) else {
            return Ok(config);
        };

        if let Some(api_key) = section.get("api_key") {
            config.api_key = api_key.to_string();
        }
        if let Some(api_server) = section.get("api_server") {
            config.api_server = api_server.to_string();
        }
        if let Some(timeout) = section.get("timeout") {
            config.timeout = timeout
                .trim()
                .parse()
                .map_err(|_| format!("timeout {timeout:?} is not an integer"))?;
        }
        Ok(config)
    }

    /// Apply environment overrides. Environment values take precedence over file content.
    pub fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(api_key) = env(ENV_API_KEY) {
            debug!("API key found in {ENV_API_KEY}");
            self.api_key = api_key;
        }

        if let Some(api_server) = env(ENV_API_SERVER) {
            debug!(api_server = %api_server, "API server found in {ENV_API_SERVER}");
            self.api_server = api_server;
        }

        if let Some(timeout) = env(ENV_TIMEOUT) {
            match timeout.trim().parse::<u64>() {
                Ok(secs) => {
                    debug!(timeout = secs, "Timeout found in {ENV_TIMEOUT}");
                    self.timeout = secs;
                }
                Err(_) => {
                    error!(
                        timeout = %timeout,
                        "{ENV_TIMEOUT} environment variable cannot be converted to an integer"
                    );
                }
            }
        }
    }

    /// Save configuration to the default file.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut ini = Ini::new();
        ini.with_section(Some(SECTION))
            .set("api_key", self.api_key.as_str())
            .set("api_server", self.api_server.as_str())
            .set("timeout", self.timeout.to_string());

        let opt = WriteOption {
            escape_policy: EscapePolicy::Nothing,
            kv_separator: " = ",
            ..WriteOption::default()
        };
        let mut content = Vec::new();
        ini.write_to_opt(&mut content, opt)?;
        std::fs::write(path, content)?;

        debug!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// The API key with everything but the first and last four characters hidden.
    #[must_use]
    pub fn masked_api_key(&self) -> Option<String> {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.is_empty() {
            None
        } else if chars.len() > 8 {
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            Some(format!("{head}...{tail}"))
        } else {
            Some("****".to_string())
        }
    }
}
