//! Configuration module
//!
//! Settings are read from a TOML file (~/.config/repairshop-pos/config.toml
//! by default, overridable via the POS_CONFIG environment variable). Missing
//! file or sections fall back to defaults.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub sales: SalesSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Path to the SQLite file
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "./pos.db".to_string(),
        }
    }
}

impl DatabaseSettings {
    pub fn connection_url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SalesSettings {
    /// Sales tax in whole percent (10 = 10%)
    pub tax_percent: u32,
}

impl Default for SalesSettings {
    fn default() -> Self {
        Self { tax_percent: 10 }
    }
}

impl SalesSettings {
    /// Tax as a decimal fraction, e.g. 0.10
    pub fn tax_rate(&self) -> Decimal {
        Decimal::new(i64::from(self.tax_percent), 2)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log filter, e.g. "info" or "repairshop_pos=debug"
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Default config file location: ~/.config/repairshop-pos/config.toml
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("repairshop-pos")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.sales.tax_percent, 10);
        assert_eq!(cfg.sales.tax_rate(), Decimal::new(10, 2));
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.database.connection_url().starts_with("sqlite://"));
    }

    #[test]
    fn test_parse_partial_file() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [sales]
            tax_percent = 8

            [database]
            path = "/var/lib/pos/pos.db"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.sales.tax_percent, 8);
        assert_eq!(cfg.database.path, "/var/lib/pos/pos.db");
        // omitted section keeps its default
        assert_eq!(cfg.logging.level, "info");
    }
}
