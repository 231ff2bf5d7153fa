//! Session Gate - the access check executed before protected content renders
//!
//! One parameterized gate serves every route group; the group-to-role policy
//! lives in a single table so the groups cannot drift apart.

use crate::role::Role;
use crate::session::{Session, SessionToken};
use crate::store::SessionStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Verdict of an access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Render the protected content
    Allow,
    /// Navigate to the login entry point instead; carries the login path
    Redirect(String),
}

/// Protected route groups and their required role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGroup {
    Admin,
    AdminDataManager,
    AdminFinanceManager,
    DataManager,
    Store,
    Finance,
    Employee,
}

impl RouteGroup {
    /// URL prefix the group is mounted under
    pub fn prefix(&self) -> &'static str {
        match self {
            RouteGroup::Admin => "/admin",
            RouteGroup::AdminDataManager => "/admin/data-manager",
            RouteGroup::AdminFinanceManager => "/admin/finance-manager",
            RouteGroup::DataManager => "/data-manager",
            RouteGroup::Store => "/store",
            RouteGroup::Finance => "/finance",
            RouteGroup::Employee => "/employee",
        }
    }

    /// Role a session must carry to enter the group
    pub fn required_role(&self) -> Role {
        match self {
            RouteGroup::Admin => Role::Admin,
            RouteGroup::AdminDataManager => Role::Admin,
            RouteGroup::AdminFinanceManager => Role::Admin,
            RouteGroup::DataManager => Role::DataManager,
            RouteGroup::Store => Role::Store,
            RouteGroup::Finance => Role::FinanceManager,
            RouteGroup::Employee => Role::Employee,
        }
    }

    /// Landing group for a freshly established session
    pub fn home_for(role: Role) -> RouteGroup {
        match role {
            Role::Admin => RouteGroup::Admin,
            Role::DataManager => RouteGroup::DataManager,
            Role::Store => RouteGroup::Store,
            Role::FinanceManager => RouteGroup::Finance,
            Role::Employee => RouteGroup::Employee,
        }
    }

    pub fn all() -> [RouteGroup; 7] {
        [
            RouteGroup::Admin,
            RouteGroup::AdminDataManager,
            RouteGroup::AdminFinanceManager,
            RouteGroup::DataManager,
            RouteGroup::Store,
            RouteGroup::Finance,
            RouteGroup::Employee,
        ]
    }
}

/// The access check run on entry to every protected route group
#[derive(Clone)]
pub struct SessionGate {
    store: Arc<dyn SessionStore>,
    login_path: String,
}

impl SessionGate {
    pub fn new(store: Arc<dyn SessionStore>, login_path: impl Into<String>) -> Self {
        Self {
            store,
            login_path: login_path.into(),
        }
    }

    /// Route the gate redirects to on denial
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Check whether the session behind `token` may enter a route group
    /// requiring `required`.
    ///
    /// Denial covers every other case the same way: no token, unknown token,
    /// partial or malformed record, wrong role, and an unreadable store. The
    /// check never mutates the store and carries no denial reason.
    pub fn check_access(&self, token: Option<&SessionToken>, required: Role) -> AccessDecision {
        let Some(token) = token else {
            debug!(required = %required, "Access check without session token");
            return self.redirect();
        };

        let record = match self.store.read(token) {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(required = %required, "Access check with unknown session token");
                return self.redirect();
            }
            Err(e) => {
                warn!(required = %required, error = %e, "Session store unreadable, gating as unauthenticated");
                return self.redirect();
            }
        };

        match Session::from_record(&record) {
            Some(session) if session.role == required => AccessDecision::Allow,
            Some(session) => {
                debug!(required = %required, actual = %session.role, "Role mismatch");
                self.redirect()
            }
            None => {
                debug!(required = %required, "Partial or malformed session record");
                self.redirect()
            }
        }
    }

    /// Check access for a route group via the policy table
    pub fn check_group(&self, token: Option<&SessionToken>, group: RouteGroup) -> AccessDecision {
        self.check_access(token, group.required_role())
    }

    /// Validated session behind a token, if any
    pub fn current_session(&self, token: &SessionToken) -> Option<Session> {
        match self.store.read(token) {
            Ok(Some(record)) => Session::from_record(&record),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Session store unreadable");
                None
            }
        }
    }

    fn redirect(&self) -> AccessDecision {
        AccessDecision::Redirect(self.login_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionRecord, AUTHENTICATED_VALUE};
    use crate::store::MemorySessionStore;

    fn gate_with_store() -> (SessionGate, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::new());
        let gate = SessionGate::new(store.clone(), "/login");
        (gate, store)
    }

    fn establish(store: &MemorySessionStore, role: Role) -> SessionToken {
        let token = SessionToken::generate();
        store
            .write(&token, SessionRecord::established(role))
            .unwrap();
        token
    }

    #[test]
    fn matching_role_is_allowed() {
        let (gate, store) = gate_with_store();
        let token = establish(&store, Role::Store);

        assert_eq!(
            gate.check_access(Some(&token), Role::Store),
            AccessDecision::Allow
        );
    }

    #[test]
    fn every_mismatched_role_pair_redirects() {
        let (gate, store) = gate_with_store();

        for actual in Role::all() {
            let token = establish(&store, actual);
            for required in Role::all() {
                let decision = gate.check_access(Some(&token), required);
                if actual == required {
                    assert_eq!(decision, AccessDecision::Allow);
                } else {
                    assert_eq!(decision, AccessDecision::Redirect("/login".to_string()));
                }
            }
        }
    }

    #[test]
    fn absent_session_redirects_for_every_role() {
        let (gate, _store) = gate_with_store();

        for required in Role::all() {
            assert_eq!(
                gate.check_access(None, required),
                AccessDecision::Redirect("/login".to_string())
            );
        }
    }

    #[test]
    fn unknown_token_redirects() {
        let (gate, _store) = gate_with_store();
        let token = SessionToken::from_raw("forged");

        assert_eq!(
            gate.check_access(Some(&token), Role::Admin),
            AccessDecision::Redirect("/login".to_string())
        );
    }

    #[test]
    fn partial_record_never_allows() {
        let (gate, store) = gate_with_store();

        let token = SessionToken::generate();
        store
            .write(
                &token,
                SessionRecord {
                    is_authenticated: Some(AUTHENTICATED_VALUE.to_string()),
                    user_role: None,
                },
            )
            .unwrap();

        for required in Role::all() {
            assert_eq!(
                gate.check_access(Some(&token), required),
                AccessDecision::Redirect("/login".to_string())
            );
        }
    }

    #[test]
    fn denial_does_not_clear_the_store() {
        let (gate, store) = gate_with_store();
        let token = establish(&store, Role::Employee);

        let _ = gate.check_access(Some(&token), Role::Admin);
        assert!(store.read(&token).unwrap().is_some());
    }

    #[test]
    fn admin_route_groups_require_admin() {
        for group in [
            RouteGroup::Admin,
            RouteGroup::AdminDataManager,
            RouteGroup::AdminFinanceManager,
        ] {
            assert_eq!(group.required_role(), Role::Admin);
        }
    }

    #[test]
    fn every_role_can_enter_its_home_group() {
        for role in Role::all() {
            assert_eq!(RouteGroup::home_for(role).required_role(), role);
        }
    }

    #[test]
    fn group_check_follows_the_policy_table() {
        let (gate, store) = gate_with_store();
        let token = establish(&store, Role::DataManager);

        assert_eq!(
            gate.check_group(Some(&token), RouteGroup::DataManager),
            AccessDecision::Allow
        );
        assert_eq!(
            gate.check_group(Some(&token), RouteGroup::AdminDataManager),
            AccessDecision::Redirect("/login".to_string())
        );
    }
}
