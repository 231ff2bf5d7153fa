//! Staffdesk Session - session state and role-gated access control
//!
//! This crate owns the portal's one enforced invariant: a session must carry
//! the route group's required role before protected content renders. It
//! provides:
//!
//! - The session model: raw store records and the validated session view
//! - The Session Store contract and its in-memory implementation
//! - The Session Gate, one parameterized access check for every route group
//! - The Session Manager, the login/logout lifecycle around the store
//!
//! ## Architecture
//!
//! The store is injected everywhere it is read or written; there is no
//! ambient global session state. Presentation layers (staffdesk-web) wrap
//! the gate in their own request plumbing but never re-implement the check.

pub mod gate;
pub mod manager;
pub mod role;
pub mod session;
pub mod store;

pub use gate::{AccessDecision, RouteGroup, SessionGate};
pub use manager::SessionManager;
pub use role::Role;
pub use session::{
    Session, SessionRecord, SessionToken, AUTHENTICATED_VALUE, IS_AUTHENTICATED_KEY, USER_ROLE_KEY,
};
pub use store::{MemorySessionStore, SessionStore};

/// Session-level error type
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session store error: {message}")]
    Store { message: String },

    #[error("Core error: {0}")]
    Core(#[from] staffdesk_core::StaffdeskError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

impl SessionError {
    /// Create a store error
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}
