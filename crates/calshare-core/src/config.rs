use std::path::PathBuf;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{INVITE_FILE_SUFFIX, PRODUCT_IDENTIFIER, UID_DOMAIN};
use crate::error::CoreResult;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub share: ShareConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub product_id: String,
    pub uid_domain: String,
    pub method: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    pub output_dir: Option<PathBuf>,
    pub file_suffix: String,
}

impl ShareConfig {
    /// ## Summary
    /// Returns the directory invite files are written to, falling back to the
    /// system temp directory.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with every default value.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be set.
    pub fn defaults() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("calendar.product_id", PRODUCT_IDENTIFIER)?
            .set_default("calendar.uid_domain", UID_DOMAIN)?
            .set_default("share.file_suffix", INVITE_FILE_SUFFIX)?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Loads configuration from `calshare.toml` and `CALSHARE_*` environment variables
    /// into a `Settings`. Environment variables take precedence over the file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        let settings = Self::defaults()?
            // TOML file
            .add_source(config::File::with_name("calshare").required(false))
            .add_source(
                config::Environment::with_prefix("CALSHARE")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        tracing::debug!(?settings, "Configuration loaded");
        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
