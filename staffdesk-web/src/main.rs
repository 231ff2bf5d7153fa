//! Staffdesk Web Server
//!
//! Role-gated internal administration portal.

use clap::Parser;
use staffdesk_core::PortalConfig;
use staffdesk_web::server::StaffdeskServerBuilder;
use staffdesk_web::{init_logging, WebConfig};

/// Staffdesk Web Server - role-gated internal administration portal
#[derive(Parser)]
#[command(name = "staffdesk-web")]
#[command(about = "A web interface for Staffdesk")]
#[command(version)]
struct Args {
    /// Server host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable development mode
    #[arg(long)]
    dev: bool,

    /// Portal configuration file (TOML)
    #[arg(long)]
    config: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Create web configuration: config file, then environment, then flags
    let mut config = WebConfig::from_env();
    match &args.config {
        Some(path) => {
            let portal_config = match PortalConfig::from_file(path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Failed to load config file {}: {}", path, e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = portal_config.validate() {
                eprintln!("Invalid configuration: {}", e);
                std::process::exit(1);
            }

            // The config file also carries the logging setup
            if let Err(e) = staffdesk_core::init_logging(&portal_config.logging) {
                eprintln!("Failed to initialize logging: {}", e);
                std::process::exit(1);
            }

            config = WebConfig::from_portal_config(&portal_config);
        }
        None => {
            std::env::set_var(
                "RUST_LOG",
                format!("staffdesk_web={},tower_http=debug", args.log_level),
            );
            init_logging();
        }
    }

    // Override with command line arguments
    config.host = args.host;
    config.port = args.port;
    config.dev_mode = args.dev;

    println!("Starting Staffdesk web server");
    println!("Server: http://{}:{}", config.host, config.port);
    println!("Development mode: {}", config.dev_mode);

    // Build and start the server
    let server = match StaffdeskServerBuilder::new().with_config(config).build() {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to build server: {}", e);
            std::process::exit(1);
        }
    };

    // Start the server (this will block until shutdown)
    if let Err(e) = server.start().await {
        eprintln!("Server failed to start: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        use clap::Parser;

        // Test default values
        let args = Args::parse_from(["staffdesk-web"]);
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 8080);
        assert!(!args.dev);
        assert!(args.config.is_none());

        // Test custom values
        let args = Args::parse_from([
            "staffdesk-web",
            "--host",
            "0.0.0.0",
            "--port",
            "3000",
            "--dev",
        ]);
        assert_eq!(args.host, "0.0.0.0");
        assert_eq!(args.port, 3000);
        assert!(args.dev);
    }
}
