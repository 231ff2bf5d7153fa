//! Configuration loading, saving, and validation

use crate::error::{ErrorContext, StaffdeskError, StaffdeskResult};
use crate::types::PortalConfig;
use crate::validation_error;

use std::path::Path;

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            server: crate::types::ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            session: crate::types::SessionSettings {
                cookie_name: "staffdesk_session".to_string(),
                login_path: "/login".to_string(),
            },
            logging: crate::logging::LoggingConfig::default(),
        }
    }
}

impl PortalConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> StaffdeskResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| StaffdeskError::Config {
            message: format!("Failed to read config file: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config")
                .with_operation("read_file")
                .with_suggestion("Check if the config file exists and is readable"),
        })?;

        let config: PortalConfig = toml::from_str(&content).map_err(|e| StaffdeskError::Config {
            message: format!("Failed to parse config: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config")
                .with_operation("parse_toml")
                .with_suggestion("Check TOML syntax in config file"),
        })?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> StaffdeskResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| StaffdeskError::Config {
            message: format!("Failed to serialize config: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config").with_operation("serialize_toml"),
        })?;

        std::fs::write(path, content).map_err(|e| StaffdeskError::Config {
            message: format!("Failed to write config file: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config")
                .with_operation("write_file")
                .with_suggestion("Check if the directory exists and is writable"),
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> StaffdeskResult<()> {
        if self.server.port == 0 {
            return Err(validation_error!(
                "Server port must be greater than 0",
                "server.port",
                "config"
            ));
        }

        if self.session.cookie_name.is_empty() {
            return Err(validation_error!(
                "Session cookie name must not be empty",
                "session.cookie_name",
                "config"
            ));
        }

        if !self.session.login_path.starts_with('/') {
            return Err(validation_error!(
                "Login path must be absolute",
                "session.login_path",
                "config"
            ));
        }

        Ok(())
    }
}
