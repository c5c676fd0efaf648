//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod drive;
pub mod logging;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use self::app::{CorsConfig, ServerConfig};
pub use self::drive::{DriveConfig, LatencyConfig};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable selecting the `config/{env}.toml` overlay.
pub const ENV_VAR: &str = "VIDTUBE_ENV";

/// Overlay used when [`ENV_VAR`] is unset or blank. It has no overlay file,
/// so debug endpoints stay off unless explicitly enabled.
pub const DEFAULT_ENV: &str = "production";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Drive capacity and simulated backend settings.
    #[serde(default)]
    pub drive: DriveConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Name of the active environment, read from `VIDTUBE_ENV`.
    pub fn environment() -> String {
        Self::environment_from(std::env::var(ENV_VAR).ok())
    }

    /// Resolve an environment name, falling back to [`DEFAULT_ENV`].
    pub fn environment_from(value: Option<String>) -> String {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENV.to_string())
    }

    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `VIDTUBE_`
    /// (`VIDTUBE_DRIVE__CAPACITY_BYTES=…`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("VIDTUBE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        self.drive
            .validate()
            .map_err(|e| AppError::configuration(format!("Invalid [drive] section: {e}")))
    }
}
