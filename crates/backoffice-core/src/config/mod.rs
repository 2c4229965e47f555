//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod api;
pub mod auth;
pub mod console;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::api::ApiConfig;
pub use self::auth::AuthConfig;
pub use self::console::{AfterCreate, ConsoleConfig};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Credential and role claim settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// List, form, and dashboard behaviour.
    #[serde(default)]
    pub console: ConsoleConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the base file at `path` with an environment-specific overlay
    /// (`config/{env}.toml`) and environment variables prefixed with
    /// `BACKOFFICE__`. Missing files are not an error; every field has a
    /// default.
    pub fn load(path: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("BACKOFFICE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config: AppConfig = serde_json::from_str("{}").expect("empty config");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.console.page_size, 10);
        assert_eq!(config.console.search_debounce_ms, 350);
        assert_eq!(config.console.after_create, AfterCreate::Reset);
        assert_eq!(config.console.dashboard_months, 3);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "api": { "base_url": "https://api.example.test/api" },
            "console": { "after_create": "edit" }
        }))
        .expect("partial config");
        assert_eq!(config.api.base_url, "https://api.example.test/api");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.console.after_create, AfterCreate::Edit);
    }
}
