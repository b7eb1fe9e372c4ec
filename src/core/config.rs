//! Configuration management

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration file location
pub const CONFIG_PATH_ENV: &str = "ENERGY_AUDIT_CONFIG";

/// Largest `audit.decimals` an f64 can still represent meaningfully
pub const MAX_DECIMALS: u32 = 15;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub audit: AuditConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("energy-audit").join("config.toml"))
    }

    /// Load configuration from disk, writing the defaults on first run
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific file, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the calculator cannot work with
    pub fn validate(&self) -> Result<()> {
        let rate = self.pricing.default_rate_per_kwh;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(Error::Config(format!(
                "pricing.default_rate_per_kwh must be positive, got {}",
                rate
            )));
        }

        let threshold = self.audit.replace_threshold_percent;
        if !(0.0..=100.0).contains(&threshold) {
            return Err(Error::Config(format!(
                "audit.replace_threshold_percent must be between 0 and 100, got {}",
                threshold
            )));
        }

        let max_hours = self.audit.max_hours_per_day;
        if !max_hours.is_finite() || max_hours <= 0.0 {
            return Err(Error::Config(format!(
                "audit.max_hours_per_day must be positive, got {}",
                max_hours
            )));
        }

        if self.audit.decimals > MAX_DECIMALS {
            return Err(Error::Config(format!(
                "audit.decimals must be at most {}, got {}",
                MAX_DECIMALS, self.audit.decimals
            )));
        }

        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "fr"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "127.0.0.1:5000")
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String { "127.0.0.1:5000".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Pricing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Rate per kWh used when a request omits `cost_per_kwh`
    #[serde(default = "default_rate")]
    pub default_rate_per_kwh: f64,
    /// Currency code (USD, EUR, GBP, etc.)
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Currency symbol
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_rate() -> f64 { 0.12 }
fn default_currency() -> String { "USD".to_string() }
fn default_currency_symbol() -> String { "$".to_string() }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_rate_per_kwh: default_rate(),
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Audit calculation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Gap percentage at or above which replacement is recommended
    #[serde(default = "default_replace_threshold")]
    pub replace_threshold_percent: f64,
    /// Upper bound accepted for `hours_per_day`
    #[serde(default = "default_max_hours")]
    pub max_hours_per_day: f64,
    /// Decimal places in HTTP responses
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

fn default_replace_threshold() -> f64 { 20.0 }
fn default_max_hours() -> f64 { 24.0 }
fn default_decimals() -> u32 { 2 }

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            replace_threshold_percent: default_replace_threshold(),
            max_hours_per_day: default_max_hours(),
            decimals: default_decimals(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.general.language, "auto");
        assert_eq!(config.server.bind_addr, "127.0.0.1:5000");
        assert_eq!(config.pricing.default_rate_per_kwh, 0.12);
        assert_eq!(config.audit.replace_threshold_percent, 20.0);
        assert_eq!(config.audit.decimals, 2);
    }

    #[test]
    fn test_partial_sections_merge_with_defaults() {
        let config = Config::from_toml_str(
            r#"
            [pricing]
            default_rate_per_kwh = 0.2276
            currency = "EUR"

            [audit]
            decimals = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.default_rate_per_kwh, 0.2276);
        assert_eq!(config.pricing.currency, "EUR");
        assert_eq!(config.pricing.currency_symbol, "$");
        assert_eq!(config.audit.decimals, 3);
        assert_eq!(config.audit.max_hours_per_day, 24.0);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = Config::from_toml_str("[pricing\nrate = ").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_validate_rejects_non_positive_rate() {
        let mut config = Config::default();
        config.pricing.default_rate_per_kwh = 0.0;
        assert!(config.validate().is_err());

        config.pricing.default_rate_per_kwh = 0.15;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_threshold_out_of_range() {
        let mut config = Config::default();
        config.audit.replace_threshold_percent = 120.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_excessive_decimals() {
        let mut config = Config::default();
        config.audit.decimals = 15;
        assert!(config.validate().is_ok());

        config.audit.decimals = 16;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.audit.decimals = 400;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_defaults_round_trip_through_disk() {
        let path = std::env::temp_dir()
            .join(format!("energy-audit-config-{}", std::process::id()))
            .join("config.toml");
        let _ = fs::remove_file(&path);

        let created = Config::load_from(&path).unwrap();
        assert!(path.exists());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.server.bind_addr, created.server.bind_addr);
        assert_eq!(reloaded.pricing.currency, created.pricing.currency);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
