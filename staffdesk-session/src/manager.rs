//! Session Manager - session lifecycle on top of the store
//!
//! Login is the only writer, logout the only destroyer. The gate reads;
//! nothing else touches session state.

use crate::role::Role;
use crate::session::{Session, SessionRecord, SessionToken};
use crate::store::SessionStore;
use crate::SessionResult;
use std::sync::Arc;
use tracing::{info, warn};

/// Manages session creation and destruction
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// The store this manager writes to, for wiring up the gate
    pub fn store(&self) -> Arc<dyn SessionStore> {
        self.store.clone()
    }

    /// Establish a session for a role.
    ///
    /// Writes the full record in one store write, so no reader can observe a
    /// half-established session. Each login issues a fresh token; changing
    /// roles means logging out and back in.
    pub fn login(&self, role: Role) -> SessionResult<SessionToken> {
        let token = SessionToken::generate();
        self.store.write(&token, SessionRecord::established(role))?;
        info!(role = %role, "Session established");
        Ok(token)
    }

    /// Destroy the session behind a token.
    ///
    /// Clears both session fields at once and succeeds whether or not a
    /// session exists, so repeated logouts converge on the same end state.
    pub fn logout(&self, token: &SessionToken) -> SessionResult<()> {
        self.store.clear(token)?;
        info!("Session cleared");
        Ok(())
    }

    /// Validated session behind a token, if any.
    /// Store errors are logged and reported as "no session".
    pub fn current(&self, token: &SessionToken) -> Option<Session> {
        match self.store.read(token) {
            Ok(Some(record)) => Session::from_record(&record),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Session store unreadable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySessionStore;

    fn manager() -> (SessionManager, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::new());
        (SessionManager::new(store.clone()), store)
    }

    #[test]
    fn login_establishes_a_readable_session() {
        let (manager, _store) = manager();
        let token = manager.login(Role::FinanceManager).unwrap();

        let session = manager.current(&token).unwrap();
        assert_eq!(session.role, Role::FinanceManager);
    }

    #[test]
    fn login_writes_both_fields_together() {
        let (manager, store) = manager();
        let token = manager.login(Role::Admin).unwrap();

        let record = store.read(&token).unwrap().unwrap();
        assert_eq!(record, SessionRecord::established(Role::Admin));
    }

    #[test]
    fn logout_is_idempotent() {
        let (manager, store) = manager();
        let token = manager.login(Role::Admin).unwrap();

        manager.logout(&token).unwrap();
        let after_first = store.read(&token).unwrap();

        manager.logout(&token).unwrap();
        let after_second = store.read(&token).unwrap();

        assert_eq!(after_first, None);
        assert_eq!(after_second, None);
    }

    #[test]
    fn logout_without_a_session_succeeds() {
        let (manager, _store) = manager();
        let token = SessionToken::from_raw("never-logged-in");
        assert!(manager.logout(&token).is_ok());
    }

    #[test]
    fn each_login_issues_a_fresh_token() {
        let (manager, _store) = manager();
        let first = manager.login(Role::Store).unwrap();
        let second = manager.login(Role::Store).unwrap();
        assert_ne!(first, second);
    }
}
