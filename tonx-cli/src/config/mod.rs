//! Configuration module for tonx-cli.
//!
//! Handles loading the checkout configuration from a TOML file and
//! validating it into the core's `CheckoutConfig`.

pub mod file;

use crate::config::file::FileConfig;
use std::path::Path;
use thiserror::Error;
use tonx_core::config::CheckoutConfig;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] tonx_core::config::ConfigError),
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: std::path::PathBuf,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    /// Load and validate the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file
    /// 2. Apply section defaults
    /// 3. Validate into a `CheckoutConfig`
    pub fn load(&self) -> Result<CheckoutConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        let file_config: FileConfig = toml::from_str(&config_content)?;

        let checkout = file_config.checkout;
        let config = CheckoutConfig::new(
            checkout.recipient_address,
            checkout.exchange_rate,
            checkout.service_fee_rate,
            checkout.payment_timeout_secs,
            checkout.min_amount_usd,
            checkout.max_amount_usd,
        )?;
        Ok(config)
    }
}
