//! Staffdesk Web Server
//!
//! Main web server implementation using Axum.

use crate::{create_app, AppState, WebConfig, WebError, WebResult};
use axum::serve;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Main Staffdesk web server
pub struct StaffdeskServer {
    config: WebConfig,
    state: AppState,
}

impl StaffdeskServer {
    /// Create a new Staffdesk server
    pub fn new(config: WebConfig) -> WebResult<Self> {
        let state = AppState::new(config.clone())?;

        Ok(Self { config, state })
    }

    /// Start the web server
    pub async fn start(self) -> WebResult<()> {
        let address = self.config.address();

        info!("Starting Staffdesk web server");
        info!("Server address: http://{}", address);
        info!("Development mode: {}", self.config.dev_mode);

        // Create the application
        let app = create_app(self.state.clone());

        // Create TCP listener
        let listener = TcpListener::bind(&address)
            .await
            .map_err(WebError::Server)?;

        info!("Server listening on http://{}", address);

        // Start the server
        if let Err(e) = serve(listener, app).await {
            error!("Server error: {}", e);
            return Err(WebError::Server(e));
        }

        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Builder for StaffdeskServer
pub struct StaffdeskServerBuilder {
    config: WebConfig,
}

impl StaffdeskServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self {
            config: WebConfig::default(),
        }
    }

    /// Start from an existing configuration
    pub fn with_config(mut self, config: WebConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the server host
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Enable development mode
    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.config.dev_mode = dev_mode;
        self
    }

    /// Set the session cookie name
    pub fn cookie_name<S: Into<String>>(mut self, cookie_name: S) -> Self {
        self.config.cookie_name = cookie_name.into();
        self
    }

    /// Build the server
    pub fn build(self) -> WebResult<StaffdeskServer> {
        StaffdeskServer::new(self.config)
    }
}

impl Default for StaffdeskServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to start a server with default configuration
pub async fn start_server() -> WebResult<()> {
    let config = WebConfig::from_env();
    let server = StaffdeskServer::new(config)?;
    server.start().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let config = WebConfig::default();
        let server = StaffdeskServer::new(config);
        assert!(server.is_ok());
    }

    #[test]
    fn test_server_builder() {
        let builder = StaffdeskServerBuilder::new()
            .host("localhost")
            .port(3000)
            .dev_mode(true)
            .cookie_name("desk_session");

        assert_eq!(builder.config.host, "localhost");
        assert_eq!(builder.config.port, 3000);
        assert!(builder.config.dev_mode);
        assert_eq!(builder.config.cookie_name, "desk_session");
    }

    #[test]
    fn test_config_from_env() {
        // Test default values when env vars are not set
        let config = WebConfig::from_env();
        assert_eq!(config.login_path, "/login");
        assert!(!config.dev_mode);
    }
}
