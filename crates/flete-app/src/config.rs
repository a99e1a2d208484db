//! Configuration management for flete-calc
//!
//! Config stored at: ~/.config/flete-calc/config.json

use flete_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Route master TOML file overriding the built-in tariff table
    #[serde(default)]
    pub routes_file: Option<PathBuf>,

    /// Truck master TOML file overriding the built-in fleet
    #[serde(default)]
    pub trucks_file: Option<PathBuf>,

    /// Currency symbol used in table output
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            routes_file: None,
            trucks_file: None,
            currency: default_currency(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("flete-calc");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "  output_format: {}", self.output_format)?;
        writeln!(
            f,
            "  routes_file:   {}",
            self.routes_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in catalog)".to_string())
        )?;
        writeln!(
            f,
            "  trucks_file:   {}",
            self.trucks_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in catalog)".to_string())
        )?;
        write!(f, "  currency:      {}", self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.routes_file.is_none());
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"output_format":"json"}"#).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.trucks_file.is_none());
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = Config::default();
        config.routes_file = Some(PathBuf::from("/tmp/routes.toml"));
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.routes_file, config.routes_file);
    }
}
