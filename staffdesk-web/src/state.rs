//! Application state for the web server

use crate::{directory::StaffDirectory, WebConfig, WebResult};
use staffdesk_session::{MemorySessionStore, SessionGate, SessionManager};
use std::sync::Arc;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: WebConfig,
    /// Session lifecycle (login/logout)
    pub sessions: SessionManager,
    /// Access check for protected route groups
    pub gate: SessionGate,
    /// Static staff directory the login flow verifies against
    pub directory: Arc<StaffDirectory>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: WebConfig) -> WebResult<Self> {
        let store = Arc::new(MemorySessionStore::new());
        let sessions = SessionManager::new(store.clone());
        let gate = SessionGate::new(store, config.login_path.clone());
        let directory = Arc::new(StaffDirectory::with_sample_staff());

        info!(
            staff = directory.len(),
            "Application state initialized successfully"
        );

        Ok(Self {
            config,
            sessions,
            gate,
            directory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffdesk_session::Role;

    #[test]
    fn state_wires_manager_and_gate_to_one_store() {
        let state = AppState::new(WebConfig::default()).unwrap();

        let token = state.sessions.login(Role::Admin).unwrap();
        assert_eq!(
            state.gate.check_access(Some(&token), Role::Admin),
            staffdesk_session::AccessDecision::Allow
        );
    }
}
