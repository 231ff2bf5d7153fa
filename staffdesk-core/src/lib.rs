//! Staffdesk Core - Shared error handling, logging, and configuration
//!
//! This crate holds the cross-cutting pieces the portal crates build on

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use error::*;
pub use logging::*;
pub use types::*;

// Re-export commonly used external types
pub use tracing;
