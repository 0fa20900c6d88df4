//! Application configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tidemark_router::RouterConfig;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config names a controller the registry does not know.
    #[error("unknown controller in config: {0}")]
    UnknownController(String),
}

/// Root application configuration.
///
/// Read-only for the duration of a request.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Routing settings: site root, default and not-found controllers.
    pub routing: RouterConfig,
}

/// Loads and parses configuration from a TOML file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if it is not valid TOML for [`AppConfig`].
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.routing.site_root_path, "/");
        assert_eq!(config.routing.default_controller, "DashboardController");
        assert_eq!(config.routing.not_found_controller, "NotFoundController");
    }

    #[test]
    fn test_parse_routing_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [routing]
            site_root_path = "/tidemark/"
            default_controller = "HomeController"
            "#,
        )
        .unwrap();

        assert_eq!(config.routing.site_root_path, "/tidemark/");
        assert_eq!(config.routing.default_controller, "HomeController");
        // unspecified fields keep their defaults
        assert_eq!(config.routing.not_found_controller, "NotFoundController");
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.routing.default_controller, "DashboardController");
    }
}
