//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`GESTOR_*`)
//! 2. Config file (`gestor.toml`)
//! 3. Defaults (this file)
//!
//! ## Example `gestor.toml`
//! ```toml
//! business_name = "Mercadinho da Ana"
//! currency_code = "BRL"
//! currency_symbol = "R$"
//! database_path = "/var/lib/gestorpro/gestorpro.db"
//! report_months = 12
//! low_stock_threshold = 3
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use gestor_core::{Money, DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_REPORT_MONTHS};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Largest monthly revenue window the dashboard chart accepts.
pub const MAX_REPORT_MONTHS: u32 = 24;

const CONFIG_FILE_NAME: &str = "gestor.toml";
const DATABASE_FILE_NAME: &str = "gestorpro.db";

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("No config path available")]
    NoConfigPath,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Shown in the dashboard header.
    pub business_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Months shown in the revenue chart
    pub report_months: u32,

    /// Products at or below this quantity count as low stock
    pub low_stock_threshold: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            business_name: "GestorPro".to_string(),
            currency_code: "BRL".to_string(),
            currency_symbol: "R$".to_string(),
            database_path: default_database_path()
                .unwrap_or_else(|| PathBuf::from(DATABASE_FILE_NAME)),
            report_months: DEFAULT_REPORT_MONTHS,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (gestor.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> Result<(), ConfigError> {
        let path = config_path
            .or_else(default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.business_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "business_name must not be empty".into(),
            ));
        }

        if !(1..=MAX_REPORT_MONTHS).contains(&self.report_months) {
            return Err(ConfigError::Invalid(format!(
                "report_months must be between 1 and {}, got {}",
                MAX_REPORT_MONTHS, self.report_months
            )));
        }

        if self.low_stock_threshold < 0 {
            return Err(ConfigError::Invalid(
                "low_stock_threshold must not be negative".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup. Unparseable numbers are ignored.
    fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("GESTOR_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database_path = PathBuf::from(path);
        }

        if let Some(name) = lookup("GESTOR_BUSINESS_NAME") {
            self.business_name = name;
        }

        if let Some(months) = lookup("GESTOR_REPORT_MONTHS") {
            match months.parse::<u32>() {
                Ok(m) => self.report_months = m,
                Err(_) => warn!(value = %months, "Ignoring invalid GESTOR_REPORT_MONTHS"),
            }
        }

        if let Some(threshold) = lookup("GESTOR_LOW_STOCK_THRESHOLD") {
            match threshold.parse::<i64>() {
                Ok(t) => self.low_stock_threshold = t,
                Err(_) => {
                    warn!(value = %threshold, "Ignoring invalid GESTOR_LOW_STOCK_THRESHOLD")
                }
            }
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "gestorpro", "dashboard")
}

/// Returns the default config file path.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Returns the default database file path.
pub fn default_database_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join(DATABASE_FILE_NAME))
}

// =============================================================================
// Command State
// =============================================================================

/// Read-only configuration handed to commands.
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    config: AppConfig,
}

impl ConfigState {
    pub fn new(config: AppConfig) -> Self {
        ConfigState { config }
    }

    pub fn inner(&self) -> &AppConfig {
        &self.config
    }

    pub fn database_path(&self) -> &Path {
        &self.config.database_path
    }

    /// Formats money with the configured currency symbol.
    pub fn format_money(&self, amount: Money) -> String {
        amount
            .to_string()
            .replacen("R$", &self.config.currency_symbol, 1)
    }
}
