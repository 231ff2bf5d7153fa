//! Core configuration data structures shared across the portal crates

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level portal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    pub server: ServerConfig,
    pub session: SessionSettings,
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

/// Session handling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Name of the cookie carrying the session token
    pub cookie_name: String,
    /// Route the gate and logout redirect to
    pub login_path: String,
}
