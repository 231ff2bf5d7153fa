//! Staffdesk Web Server
//!
//! This module provides the web interface for Staffdesk: every route group is
//! wrapped by the session gate, and every page renders inside the shared
//! chrome shell.

pub mod auth;
pub mod directory;
pub mod handlers;
pub mod records;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

// Re-export main types
pub use server::StaffdeskServer;
pub use state::AppState;

use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use staffdesk_core::PortalConfig;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_origin("http://127.0.0.1:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST])
        .allow_credentials(true)
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    routes::all_routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Enable development mode
    pub dev_mode: bool,
    /// Name of the session cookie
    pub cookie_name: String,
    /// Route the gate and logout redirect to
    pub login_path: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            dev_mode: false,
            cookie_name: "staffdesk_session".to_string(),
            login_path: "/login".to_string(),
        }
    }
}

impl WebConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("STAFFDESK_HOST").unwrap_or(defaults.host),
            port: std::env::var("STAFFDESK_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            dev_mode: std::env::var("STAFFDESK_DEV_MODE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.dev_mode),
            cookie_name: std::env::var("STAFFDESK_COOKIE_NAME").unwrap_or(defaults.cookie_name),
            login_path: defaults.login_path,
        }
    }

    /// Derive web configuration from a portal config file
    pub fn from_portal_config(config: &PortalConfig) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            dev_mode: false,
            cookie_name: config.session.cookie_name.clone(),
            login_path: config.session.login_path.clone(),
        }
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Error types for the web server
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Session error: {0}")]
    Session(#[from] staffdesk_session::SessionError),

    #[error("Page not found: {0}")]
    NotFound(String),
}

/// Result type for web operations
pub type WebResult<T> = Result<T, WebError>;

/// Initialize logging for the web server
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staffdesk_web=debug,tower_http=debug,axum=debug".into()),
        )
        .init();
}
