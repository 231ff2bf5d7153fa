//! Session lifecycle scenarios across the manager, store, and gate

use staffdesk_session::{
    AccessDecision, MemorySessionStore, Role, RouteGroup, SessionGate, SessionManager,
    SessionRecord, SessionStore, SessionToken,
};
use std::sync::Arc;

fn portal() -> (SessionManager, SessionGate, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let manager = SessionManager::new(store.clone());
    let gate = SessionGate::new(store.clone(), "/login");
    (manager, gate, store)
}

#[test]
fn store_session_enters_store_group() {
    let (manager, gate, _) = portal();
    let token = manager.login(Role::Store).unwrap();

    assert_eq!(
        gate.check_access(Some(&token), Role::Store),
        AccessDecision::Allow
    );
}

#[test]
fn store_session_is_turned_away_from_admin() {
    let (manager, gate, _) = portal();
    let token = manager.login(Role::Store).unwrap();

    assert_eq!(
        gate.check_access(Some(&token), Role::Admin),
        AccessDecision::Redirect("/login".to_string())
    );
}

#[test]
fn absent_session_is_turned_away_everywhere() {
    let (_, gate, _) = portal();

    for group in RouteGroup::all() {
        assert_eq!(
            gate.check_group(None, group),
            AccessDecision::Redirect("/login".to_string())
        );
    }
}

#[test]
fn logout_destroys_the_session_end_to_end() {
    let (manager, gate, store) = portal();
    let token = manager.login(Role::Admin).unwrap();
    assert_eq!(
        gate.check_access(Some(&token), Role::Admin),
        AccessDecision::Allow
    );

    manager.logout(&token).unwrap();

    assert_eq!(store.read(&token).unwrap(), None);
    assert_eq!(
        gate.check_access(Some(&token), Role::Admin),
        AccessDecision::Redirect("/login".to_string())
    );
}

#[test]
fn double_logout_matches_single_logout() {
    let (manager, _, store) = portal();
    let token = manager.login(Role::Employee).unwrap();

    manager.logout(&token).unwrap();
    manager.logout(&token).unwrap();

    assert_eq!(store.read(&token).unwrap(), None);
}

#[test]
fn hand_written_partial_record_is_not_a_session() {
    let (manager, gate, store) = portal();

    // a writer that bypasses the manager and sets only the flag
    let token = SessionToken::generate();
    store
        .write(
            &token,
            SessionRecord {
                is_authenticated: Some("true".to_string()),
                user_role: None,
            },
        )
        .unwrap();

    assert!(manager.current(&token).is_none());
    for group in RouteGroup::all() {
        assert_eq!(
            gate.check_group(Some(&token), group),
            AccessDecision::Redirect("/login".to_string())
        );
    }
}

#[test]
fn role_change_requires_a_fresh_login() {
    let (manager, gate, _) = portal();

    let token = manager.login(Role::Employee).unwrap();
    manager.logout(&token).unwrap();
    let token = manager.login(Role::Admin).unwrap();

    assert_eq!(
        gate.check_access(Some(&token), Role::Admin),
        AccessDecision::Allow
    );
    assert_eq!(
        gate.check_access(Some(&token), Role::Employee),
        AccessDecision::Redirect("/login".to_string())
    );
}
