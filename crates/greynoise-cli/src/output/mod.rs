//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON output
    #[default]
    Json,
    /// Human-readable tables with colors
    Pretty,
    /// YAML output
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Pretty => write!(f, "pretty"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Render `value` as JSON or YAML.
///
/// Returns `None` for [`OutputFormat::Pretty`], which each command renders itself.
pub fn render<T: Serialize>(format: OutputFormat, value: &T) -> Result<Option<String>> {
    match format {
        OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
        OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(value)?.trim_end().to_string())),
        OutputFormat::Pretty => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(
            render(OutputFormat::Json, &empty).unwrap().as_deref(),
            Some("[]")
        );
        assert_eq!(
            render(OutputFormat::Yaml, &vec!["1.1.1.1"]).unwrap().as_deref(),
            Some("- 1.1.1.1")
        );
        assert_eq!(render(OutputFormat::Pretty, &empty).unwrap(), None);
    }
}
